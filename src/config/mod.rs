//! Configuration management module.
//!
//! Loads, validates and writes the server configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - top level: `log_level`, `log_file`, `log_console_interval`
//! - **server**: listener, admission limits, transfer limits and timeouts.
//!   The limit keys keep their historical names (`maxRequests`,
//!   `blockDurationMillis`, `maxDownloadsPerIP`, `maxDownloadSpeed`,
//!   `BUFFER_SIZE`) so existing deployments load unchanged.
//! - **paths**: package root and static asset locations
//! - **packages**: download URL template and version ordering
//! - **sentry_config**: error reporting
//!
//! # Example
//!
//! ```rust,ignore
//! use tulpar_server::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (errors, version ordering).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

/// Unit tests for configuration handling.
pub mod tests;
