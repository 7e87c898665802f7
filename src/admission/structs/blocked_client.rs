use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct BlockedClient {
    pub client_id: String,
    /// Milliseconds until the block lifts, `None` for an indefinite ban.
    pub remaining_millis: Option<u64>,
}
