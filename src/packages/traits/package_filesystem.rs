use std::path::Path;
use crate::packages::structs::dir_entry_info::DirEntryInfo;

#[cfg_attr(test, mockall::automock)]
pub trait PackageFilesystem: Send + Sync {
    fn is_dir(&self, path: &Path) -> bool;

    fn is_file(&self, path: &Path) -> bool;

    /// Immediate children of `path`, in no particular order.
    fn list_dir(&self, path: &Path) -> std::io::Result<Vec<DirEntryInfo>>;

    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;
}
