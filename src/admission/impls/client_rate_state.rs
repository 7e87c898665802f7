use std::time::{Duration, Instant};
use crate::admission::enums::block_expiry::BlockExpiry;
use crate::admission::structs::client_rate_state::ClientRateState;

impl ClientRateState {
    /// Drops request instants older than `window`.
    pub fn prune(&mut self, now: Instant, window: Duration) {
        self.recent_requests.retain(|at| now.saturating_duration_since(*at) <= window);
    }

    pub fn is_blocked(&self, now: Instant) -> bool {
        match self.blocked_until {
            Some(BlockExpiry::Indefinite) => true,
            Some(BlockExpiry::Until(until)) => now < until,
            None => false,
        }
    }

    /// True when the entry carries nothing worth keeping.
    pub fn is_idle(&self, now: Instant, window: Duration) -> bool {
        !self.is_blocked(now)
            && self.recent_requests
                .back()
                .is_none_or(|last| now.saturating_duration_since(*last) > window)
    }
}
