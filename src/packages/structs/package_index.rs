use std::path::PathBuf;
use std::sync::Arc;
use crate::config::enums::version_ordering::VersionOrdering;
use crate::packages::traits::package_filesystem::PackageFilesystem;

pub struct PackageIndex {
    pub root: PathBuf,
    pub filesystem: Arc<dyn PackageFilesystem>,
    pub download_url_template: String,
    pub version_ordering: VersionOrdering,
}
