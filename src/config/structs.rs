//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Listener, admission and transfer settings.
pub mod server_config;

/// Package root and static asset locations.
pub mod paths_config;

/// Package index settings.
pub mod packages_config;

/// Sentry error reporting configuration.
pub mod sentry_config;
