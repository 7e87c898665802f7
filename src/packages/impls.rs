pub mod package_index;

pub mod local_filesystem;

pub mod version_rank;

pub mod architecture_entry;
