use std::time::Duration;
use parking_lot::Mutex;
use crate::admission::structs::client_rate_state::ClientRateState;
use crate::admission::structs::sweep_mark::SweepMark;
use crate::common::structs::client_shards::{ClientShards, CLIENT_SHARD_COUNT};

#[derive(Debug)]
pub struct AdmissionController {
    pub clients: ClientShards<ClientRateState>,
    pub max_requests: u64,
    pub window: Duration,
    pub block_duration: Duration,
    /// `None` keeps operator bans until `unban`.
    pub manual_ban_duration: Option<Duration>,
    /// Indexed like the stripes of `clients`; only locked while that stripe is held.
    pub sweep_marks: [Mutex<SweepMark>; CLIENT_SHARD_COUNT],
}
