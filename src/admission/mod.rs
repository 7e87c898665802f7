//! Per-client admission control.
//!
//! Every request on the API and package routes passes through
//! [`AdmissionController::admit`](structs::admission_controller::AdmissionController)
//! before any other work is done. A client may have at most `maxRequests`
//! accepted requests in any rolling 60 second window; the request that would
//! exceed the limit is denied and blocks the client for `blockDurationMillis`.
//! Operators can additionally ban and unban clients by hand.
//!
//! State lives in striped maps keyed by client identity, so clients on
//! different stripes never contend on the same lock. Entries are created on a
//! client's first request and evicted opportunistically on later accesses to
//! the same stripe; no background timer is involved.

/// Admission outcomes and block bookkeeping enums.
pub mod enums;

/// Controller and per-client state structures.
pub mod structs;

/// Implementation blocks for the admission controller.
pub mod impls;
