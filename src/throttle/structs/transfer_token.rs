use std::sync::Arc;
use crate::throttle::structs::transfer_throttle::TransferThrottle;

/// A held session slot. Dropping the token releases the slot.
#[derive(Debug)]
pub struct TransferToken {
    pub(crate) throttle: Arc<TransferThrottle>,
    pub(crate) client_id: String,
    pub(crate) released: bool,
}
