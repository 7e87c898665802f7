use std::path::Path;
use crate::packages::enums::file_kind::FileKind;
use crate::packages::structs::dir_entry_info::DirEntryInfo;
use crate::packages::structs::local_filesystem::LocalFilesystem;
use crate::packages::traits::package_filesystem::PackageFilesystem;

impl PackageFilesystem for LocalFilesystem {
    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path)? {
            let entry = entry?;
            let kind = match entry.path().is_dir() {
                true => FileKind::Directory,
                false => FileKind::File,
            };
            entries.push(DirEntryInfo {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        Ok(entries)
    }

    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }
}
