/// Entry kind reported in package listings.
pub mod file_kind;

/// Errors raised while resolving packages.
pub mod package_error;

/// Ordering key for versions of one package/architecture.
pub mod version_rank;
