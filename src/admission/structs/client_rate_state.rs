use std::collections::VecDeque;
use std::time::Instant;
use crate::admission::enums::block_expiry::BlockExpiry;

/// Accepted request instants (oldest first) plus an optional block.
#[derive(Debug, Clone, Default)]
pub struct ClientRateState {
    pub recent_requests: VecDeque<Instant>,
    pub blocked_until: Option<BlockExpiry>,
}
