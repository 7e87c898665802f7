/// Concurrency cap and bandwidth pacing per client.
pub mod transfer_throttle;

/// Active sessions and current pacing window of one client.
pub mod client_transfer_state;

/// Scoped session slot.
pub mod transfer_token;
