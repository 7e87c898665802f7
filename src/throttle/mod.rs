//! Per-client transfer throttling.
//!
//! Download handlers [`acquire`](structs::transfer_throttle::TransferThrottle)
//! a session slot before streaming and get back a
//! [`TransferToken`](structs::transfer_token::TransferToken). The token paces
//! each outgoing chunk against the client's bytes-per-second budget and
//! releases the slot exactly once, either explicitly or when it is dropped
//! (client disconnect, I/O error, normal completion).
//!
//! Pacing delays are computed under the client's stripe lock but slept
//! outside of it with `tokio::time::sleep`, so a paced transfer only ever
//! suspends its own task.

/// Throttle errors.
pub mod enums;

/// Throttle, per-client transfer state and session token.
pub mod structs;

/// Implementation blocks for the throttle.
pub mod impls;
