use crate::common::structs::client_shards::ClientShards;
use crate::throttle::structs::client_transfer_state::ClientTransferState;

#[derive(Debug)]
pub struct TransferThrottle {
    pub clients: ClientShards<ClientTransferState>,
    pub max_concurrent_per_client: u64,
    /// 0 disables pacing.
    pub max_bytes_per_second: u64,
}
