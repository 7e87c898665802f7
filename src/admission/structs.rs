/// Sliding-window rate limiter and block list.
pub mod admission_controller;

/// Rate window and block state for one client.
pub mod client_rate_state;

/// Per-stripe eviction bookkeeping.
pub mod sweep_mark;

/// Observability view of a blocked client.
pub mod blocked_client;
