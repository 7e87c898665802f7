/// Scanner over the package root.
pub mod package_index;

/// Parsed `metadata.json`.
pub mod package_metadata;

/// One package directory with its immediate children.
pub mod package_listing;

/// Per-architecture view of one package.
pub mod package_detail;

/// Latest version and download URLs for one architecture.
pub mod architecture_entry;

/// Name and kind of one directory child.
pub mod dir_entry_info;

/// `std::fs` backed filesystem.
pub mod local_filesystem;
