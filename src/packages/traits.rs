/// Read-only filesystem operations needed by the index.
pub mod package_filesystem;
