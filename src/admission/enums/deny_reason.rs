use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenyReason {
    /// This request exceeded the window and started a block.
    RateLimited,
    /// The client was already blocked.
    Blocked,
}
