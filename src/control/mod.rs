//! Server lifecycle control plane.
//!
//! [`ServerControlPlane`](structs::server_control_plane::ServerControlPlane)
//! supervises the HTTP listener through the states
//! `Stopped -> Starting -> Running -> Stopping -> Stopped`, with `Failed` on a
//! bind error. Administrative commands (`start`, `stop`, `restart`, TLS
//! activation and the operator console commands) run strictly one at a time.
//!
//! ```rust,ignore
//! let control = Arc::new(ServerControlPlane::new(data));
//! control.start().await?;
//! control.execute_line("ban 10.0.0.7").await?;
//! control.enable_tls("keystore.pem", "", "").await?;
//! ```

/// Lifecycle states, command and error enumerations.
pub mod enums;

/// Control plane, status and command table entries.
pub mod structs;

/// Implementation blocks for the control plane.
pub mod impls;

/// Command table and operator console.
#[allow(clippy::module_inception)]
pub mod control;
