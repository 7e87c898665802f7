use std::time::{Duration, Instant};
use crate::throttle::structs::transfer_token::TransferToken;

impl TransferToken {
    pub async fn pace(&self, chunk_bytes: u64) -> Duration {
        self.throttle.pace(&self.client_id, chunk_bytes, Instant::now()).await
    }

    pub fn release(mut self) {
        self.release_once();
    }

    fn release_once(&mut self) {
        if !self.released {
            self.released = true;
            self.throttle.release(&self.client_id);
        }
    }
}

impl Drop for TransferToken {
    fn drop(&mut self) {
        self.release_once();
    }
}
