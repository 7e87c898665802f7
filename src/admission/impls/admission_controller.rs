use std::time::{Duration, Instant};
use log::{debug, info};
use parking_lot::Mutex;
use crate::admission::enums::admission_decision::AdmissionDecision;
use crate::admission::enums::block_expiry::BlockExpiry;
use crate::admission::enums::deny_reason::DenyReason;
use crate::admission::structs::admission_controller::AdmissionController;
use crate::admission::structs::blocked_client::BlockedClient;
use crate::admission::structs::client_rate_state::ClientRateState;
use crate::admission::structs::sweep_mark::SweepMark;
use crate::common::structs::client_shards::ClientShards;
use crate::config::structs::server_config::ServerConfig;

/// Rolling window the request limit applies to.
pub const RATE_WINDOW: Duration = Duration::from_secs(60);

/// Stripes at or below this size are never swept.
pub const EVICTION_THRESHOLD: usize = 64;

impl AdmissionController {
    pub fn new(max_requests: u64, block_duration: Duration, manual_ban_duration: Option<Duration>) -> AdmissionController {
        AdmissionController {
            clients: ClientShards::new(),
            max_requests,
            window: RATE_WINDOW,
            block_duration,
            manual_ban_duration,
            sweep_marks: std::array::from_fn(|_| Mutex::new(SweepMark::default())),
        }
    }

    pub fn from_config(config: &ServerConfig) -> AdmissionController {
        Self::new(config.max_requests, config.block_duration(), config.manual_ban_duration())
    }

    /// Decides whether `client_id` may proceed at `now`.
    ///
    /// A blocked client is denied without touching its request history. An
    /// accepted request is recorded; a denied one never is.
    pub fn admit(&self, client_id: &str, now: Instant) -> AdmissionDecision {
        let window = self.window;
        let stripe = self.clients.shard_index(client_id);
        self.clients.with_shard(client_id, |shard| {
            if shard.len() > EVICTION_THRESHOLD {
                let mut mark = self.sweep_marks[stripe].lock();
                if mark.is_due(shard.len(), now, window) {
                    shard.retain(|key, state| key == client_id || !state.is_idle(now, window));
                    mark.swept(shard.len(), now);
                }
            }

            let state = shard.entry(client_id.to_owned()).or_default();
            match state.blocked_until {
                Some(BlockExpiry::Indefinite) => {
                    return AdmissionDecision::Deny { reason: DenyReason::Blocked, retry_after: None };
                }
                Some(BlockExpiry::Until(until)) if now < until => {
                    return AdmissionDecision::Deny { reason: DenyReason::Blocked, retry_after: Some(until - now) };
                }
                Some(BlockExpiry::Until(_)) => {
                    debug!("[ADMISSION] Block on {client_id} expired");
                    state.blocked_until = None;
                }
                None => {}
            }

            state.prune(now, window);
            if state.recent_requests.len() as u64 >= self.max_requests {
                state.blocked_until = Some(BlockExpiry::Until(now + self.block_duration));
                info!("[ADMISSION] Client {} exceeded {} requests per {:?}, blocked for {:?}", client_id, self.max_requests, window, self.block_duration);
                return AdmissionDecision::Deny { reason: DenyReason::RateLimited, retry_after: Some(self.block_duration) };
            }

            state.recent_requests.push_back(now);
            AdmissionDecision::Allow
        })
    }

    /// Operator ban, timed or indefinite depending on configuration.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn ban(&self, client_id: &str, now: Instant) -> BlockExpiry {
        let expiry = match self.manual_ban_duration {
            Some(duration) => BlockExpiry::Until(now + duration),
            None => BlockExpiry::Indefinite,
        };
        self.clients.with_shard(client_id, |shard| {
            shard.entry(client_id.to_owned()).or_default().blocked_until = Some(expiry);
        });
        info!("[ADMISSION] Client {client_id} banned ({expiry:?})");
        expiry
    }

    /// Lifts any block on `client_id` and forgets its request history, so the
    /// next request is evaluated fresh. Returns whether a block was active.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn unban(&self, client_id: &str, now: Instant) -> bool {
        let was_blocked = self.clients.with_shard(client_id, |shard| {
            shard.remove(client_id)
                .map(|state| state.is_blocked(now))
                .unwrap_or(false)
        });
        if was_blocked {
            info!("[ADMISSION] Client {client_id} unbanned");
        }
        was_blocked
    }

    pub fn is_blocked(&self, client_id: &str, now: Instant) -> bool {
        self.clients.with_shard(client_id, |shard| {
            shard.get(client_id).is_some_and(|state| state.is_blocked(now))
        })
    }

    /// Currently active blocks, sorted by client identity.
    pub fn list_blocked(&self, now: Instant) -> Vec<BlockedClient> {
        let mut blocked = self.clients.collect(|client_id, state: &ClientRateState| {
            match state.blocked_until {
                Some(BlockExpiry::Indefinite) => Some(BlockedClient {
                    client_id: client_id.clone(),
                    remaining_millis: None,
                }),
                Some(BlockExpiry::Until(until)) if now < until => Some(BlockedClient {
                    client_id: client_id.clone(),
                    remaining_millis: Some((until - now).as_millis() as u64),
                }),
                _ => None,
            }
        });
        blocked.sort_by(|a, b| a.client_id.cmp(&b.client_id));
        blocked
    }

    pub fn blocked_count(&self, now: Instant) -> usize {
        self.clients.collect(|_, state: &ClientRateState| state.is_blocked(now).then_some(())).len()
    }

    pub fn tracked_clients(&self) -> usize {
        self.clients.len()
    }
}
