use std::collections::BTreeMap;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::enums::version_ordering::VersionOrdering;
use crate::config::structs::configuration::Configuration;
use crate::packages::enums::file_kind::FileKind;
use crate::packages::enums::package_error::PackageError;
use crate::packages::enums::version_rank::VersionRank;
use crate::packages::structs::architecture_entry::ArchitectureEntry;
use crate::packages::structs::local_filesystem::LocalFilesystem;
use crate::packages::structs::package_detail::PackageDetail;
use crate::packages::structs::package_index::PackageIndex;
use crate::packages::structs::package_listing::PackageListing;
use crate::packages::structs::package_metadata::PackageMetadata;
use crate::packages::traits::package_filesystem::PackageFilesystem;

pub const METADATA_FILE: &str = "metadata.json";
pub const ARCHIVE_EXTENSION: &str = "apg";

static PACKAGE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._+-]+$").expect("package name pattern compiles")
});

impl std::fmt::Debug for PackageIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PackageIndex")
            .field("root", &self.root)
            .field("download_url_template", &self.download_url_template)
            .field("version_ordering", &self.version_ordering)
            .finish()
    }
}

impl PackageIndex {
    pub fn new(
        root: impl Into<PathBuf>,
        filesystem: Arc<dyn PackageFilesystem>,
        download_url_template: &str,
        version_ordering: VersionOrdering,
    ) -> PackageIndex {
        PackageIndex {
            root: root.into(),
            filesystem,
            download_url_template: download_url_template.to_string(),
            version_ordering,
        }
    }

    pub fn from_config(config: &Configuration) -> PackageIndex {
        Self::new(
            &config.paths.packages,
            Arc::new(LocalFilesystem),
            &config.packages.download_url_template,
            config.packages.version_ordering,
        )
    }

    /// Every package directory with its immediate children.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn list_all(&self) -> Result<Vec<PackageListing>, PackageError> {
        let mut listings = Vec::new();
        for name in self.package_dirs()? {
            let directory = self.root.join(&name);
            let files = match self.filesystem.list_dir(&directory) {
                Ok(entries) => entries.into_iter()
                    .map(|entry| (entry.name, entry.kind))
                    .collect::<BTreeMap<String, FileKind>>(),
                Err(error) => {
                    warn!("[PACKAGES] Unable to list {}: {}", directory.display(), error);
                    BTreeMap::new()
                }
            };
            listings.push(PackageListing { name, files });
        }
        Ok(listings)
    }

    /// Builds grouped by architecture whose metadata name matches `package`
    /// case-insensitively. Unreadable or malformed metadata is skipped.
    ///
    /// Directories are visited in name order; on equal ranks the build seen
    /// first stays `latest`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn detail(&self, package: &str) -> Result<PackageDetail, PackageError> {
        let wanted = package.to_lowercase();
        let mut architectures: BTreeMap<String, ArchitectureEntry> = BTreeMap::new();

        for directory in self.package_dirs()? {
            let Some(metadata) = self.read_metadata(&self.root.join(&directory)) else {
                continue;
            };
            if metadata.name.to_lowercase() != wanted {
                continue;
            }

            let version_release = format!("{}-{}", metadata.version, metadata.release);
            let download_url = self.download_url(&metadata);
            let rank = VersionRank::compute(self.version_ordering, &metadata.version, metadata.release);
            match architectures.get_mut(&metadata.architecture) {
                Some(entry) => entry.record(version_release, rank, download_url),
                None => {
                    architectures.insert(
                        metadata.architecture.clone(),
                        ArchitectureEntry::new(version_release, rank, download_url),
                    );
                }
            }
        }

        debug!("[PACKAGES] {} resolved to {} architectures", package, architectures.len());
        Ok(PackageDetail {
            package: package.to_string(),
            architectures,
        })
    }

    pub fn download_url(&self, metadata: &PackageMetadata) -> String {
        self.download_url_template
            .replace("{name}", &metadata.name)
            .replace("{version}", &metadata.version)
            .replace("{release}", &metadata.release.to_string())
            .replace("{architecture}", &metadata.architecture)
    }

    pub fn is_valid_name(name: &str) -> bool {
        name != "." && name != ".." && PACKAGE_NAME.is_match(name)
    }

    /// Directory of package `name`.
    pub fn package_dir(&self, name: &str) -> Result<PathBuf, PackageError> {
        if !Self::is_valid_name(name) {
            return Err(PackageError::InvalidPath(name.to_string()));
        }
        let directory = self.root.join(name);
        if !self.filesystem.is_dir(&directory) {
            return Err(PackageError::PackageNotFound(name.to_string()));
        }
        Ok(directory)
    }

    /// `<root>/<name>/download/<name>.apg`
    pub fn archive_path(&self, name: &str) -> Result<PathBuf, PackageError> {
        let archive = self.package_dir(name)?
            .join("download")
            .join(format!("{name}.{ARCHIVE_EXTENSION}"));
        match self.filesystem.is_file(&archive) {
            true => Ok(archive),
            false => Err(PackageError::FileNotFound(archive.display().to_string())),
        }
    }

    /// An archive stored directly in the package root.
    pub fn root_archive_path(&self, file_name: &str) -> Result<PathBuf, PackageError> {
        if !Self::is_valid_name(file_name) || !file_name.ends_with(&format!(".{ARCHIVE_EXTENSION}")) {
            return Err(PackageError::InvalidPath(file_name.to_string()));
        }
        let archive = self.root.join(file_name);
        match self.filesystem.is_file(&archive) {
            true => Ok(archive),
            false => Err(PackageError::FileNotFound(file_name.to_string())),
        }
    }

    /// A file inside package `name`, addressed by a relative path.
    pub fn package_file(&self, name: &str, relative: &str) -> Result<PathBuf, PackageError> {
        let directory = self.package_dir(name)?;
        let relative = safe_relative_path(relative)
            .ok_or_else(|| PackageError::InvalidPath(relative.to_string()))?;
        let file = directory.join(relative);
        match self.filesystem.is_file(&file) {
            true => Ok(file),
            false => Err(PackageError::FileNotFound(file.display().to_string())),
        }
    }

    fn package_dirs(&self) -> Result<Vec<String>, PackageError> {
        if !self.filesystem.is_dir(&self.root) {
            return Err(PackageError::RootNotFound);
        }
        let entries = self.filesystem.list_dir(&self.root).map_err(|source| PackageError::Io {
            path: self.root.display().to_string(),
            source,
        })?;
        let mut names: Vec<String> = entries.into_iter()
            .filter(|entry| entry.kind == FileKind::Directory)
            .map(|entry| entry.name)
            .collect();
        names.sort();
        Ok(names)
    }

    fn read_metadata(&self, directory: &Path) -> Option<PackageMetadata> {
        let path = directory.join(METADATA_FILE);
        if !self.filesystem.is_file(&path) {
            return None;
        }
        let content = match self.filesystem.read_to_string(&path) {
            Ok(content) => content,
            Err(error) => {
                warn!("[PACKAGES] Skipping unreadable {}: {}", path.display(), error);
                return None;
            }
        };
        match serde_json::from_str::<PackageMetadata>(&content) {
            Ok(metadata) => Some(metadata),
            Err(error) => {
                warn!("[PACKAGES] Skipping malformed {}: {}", path.display(), error);
                None
            }
        }
    }
}

/// Accepts only plain relative paths made of normal components.
pub fn safe_relative_path(relative: &str) -> Option<PathBuf> {
    if relative.is_empty() || relative.contains('\\') || relative.contains('\0') {
        return None;
    }
    let path = Path::new(relative);
    match path.components().all(|component| matches!(component, Component::Normal(_))) {
        true => Some(path.to_path_buf()),
        false => None,
    }
}
