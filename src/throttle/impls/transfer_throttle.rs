use std::sync::Arc;
use std::time::{Duration, Instant};
use log::{debug, info};
use crate::common::structs::client_shards::ClientShards;
use crate::config::structs::server_config::ServerConfig;
use crate::throttle::enums::throttle_error::ThrottleError;
use crate::throttle::structs::client_transfer_state::ClientTransferState;
use crate::throttle::structs::transfer_throttle::TransferThrottle;
use crate::throttle::structs::transfer_token::TransferToken;

/// Length of one pacing window.
pub const PACING_WINDOW: Duration = Duration::from_secs(1);

impl TransferThrottle {
    pub fn new(max_concurrent_per_client: u64, max_bytes_per_second: u64) -> TransferThrottle {
        TransferThrottle {
            clients: ClientShards::new(),
            max_concurrent_per_client,
            max_bytes_per_second,
        }
    }

    pub fn from_config(config: &ServerConfig) -> TransferThrottle {
        Self::new(config.max_downloads_per_ip, config.max_download_speed)
    }

    /// Takes a session slot for `client_id`, or refuses when the client is
    /// already at its concurrency cap. A refusal leaves the count untouched.
    pub fn acquire(self: &Arc<Self>, client_id: &str) -> Result<TransferToken, ThrottleError> {
        let limit = self.max_concurrent_per_client;
        let active = self.clients.with_shard(client_id, |shard| {
            let state = shard.entry(client_id.to_owned()).or_insert_with(|| ClientTransferState {
                active_sessions: 0,
                bytes_in_window: 0,
                window_started_at: Instant::now(),
            });
            if state.active_sessions >= limit {
                if state.active_sessions == 0 {
                    shard.remove(client_id);
                }
                return Err(ThrottleError::TooManyConcurrent { client_id: client_id.to_owned(), limit });
            }
            state.active_sessions += 1;
            Ok(state.active_sessions)
        });

        match active {
            Ok(active) => {
                debug!("[THROTTLE] Session opened for {client_id} ({active}/{limit})");
                Ok(TransferToken {
                    throttle: Arc::clone(self),
                    client_id: client_id.to_owned(),
                    released: false,
                })
            }
            Err(error) => {
                info!("[THROTTLE] Refused session for {client_id}, already at {limit} concurrent downloads");
                Err(error)
            }
        }
    }

    /// Books `chunk_bytes` against the client's current window and returns how
    /// long the caller has to wait before sending them.
    ///
    /// When the chunk does not fit the remaining budget it is booked into the
    /// window starting at the end of the current one, and the returned delay
    /// runs until then. The first chunk of a window is always accepted, so a
    /// window can exceed the budget by at most one chunk.
    pub fn reserve(&self, client_id: &str, chunk_bytes: u64, now: Instant) -> Duration {
        let max = self.max_bytes_per_second;
        if max == 0 {
            return Duration::ZERO;
        }
        self.clients.with_shard(client_id, |shard| {
            let Some(state) = shard.get_mut(client_id) else {
                return Duration::ZERO;
            };
            if now.saturating_duration_since(state.window_started_at) >= PACING_WINDOW {
                state.window_started_at = now;
                state.bytes_in_window = 0;
            }
            if state.bytes_in_window > 0 && state.bytes_in_window + chunk_bytes > max {
                let next_window = state.window_started_at + PACING_WINDOW;
                let delay = next_window.saturating_duration_since(now);
                state.window_started_at = next_window;
                state.bytes_in_window = chunk_bytes;
                return delay;
            }
            state.bytes_in_window += chunk_bytes;
            Duration::ZERO
        })
    }

    /// Suspends the calling task until `chunk_bytes` may be sent.
    pub async fn pace(&self, client_id: &str, chunk_bytes: u64, now: Instant) -> Duration {
        let delay = self.reserve(client_id, chunk_bytes, now);
        if !delay.is_zero() {
            debug!("[THROTTLE] Pacing {client_id} for {delay:?}");
            tokio::time::sleep(delay).await;
        }
        delay
    }

    /// Returns the slot of one session; the client's entry is dropped once its
    /// last session ends. Returns the sessions still active.
    pub fn release(&self, client_id: &str) -> u64 {
        self.clients.with_shard(client_id, |shard| {
            let Some(state) = shard.get_mut(client_id) else {
                return 0;
            };
            state.active_sessions = state.active_sessions.saturating_sub(1);
            let remaining = state.active_sessions;
            if remaining == 0 {
                shard.remove(client_id);
            }
            remaining
        })
    }

    pub fn active_sessions(&self, client_id: &str) -> u64 {
        self.clients.with_shard(client_id, |shard| {
            shard.get(client_id).map(|state| state.active_sessions).unwrap_or(0)
        })
    }

    pub fn total_active_sessions(&self) -> u64 {
        self.clients.collect(|_, state| Some(state.active_sessions)).into_iter().sum()
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}
