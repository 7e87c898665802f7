use std::time::Instant;

#[derive(Debug, Clone, Copy)]
pub struct ClientTransferState {
    pub active_sessions: u64,
    pub bytes_in_window: u64,
    /// May lie in the future when a paced chunk was already booked into the
    /// next window.
    pub window_started_at: Instant,
}
