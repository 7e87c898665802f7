//! Shared utilities used by every subsystem.
//!
//! - `CustomError` for free-form error messages
//! - `ClientShards`, the per-client striped map used by admission control and
//!   the transfer throttle
//! - logging setup, system property lookup and content type probing

/// Common data structures (errors, sharded client maps).
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
