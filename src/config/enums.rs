/// Errors raised while reading or writing the configuration file.
pub mod configuration_error;

/// Ordering strategy used to pick the latest package version.
pub mod version_ordering;
