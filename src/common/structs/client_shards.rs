//! Striped storage for per-client state.

use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::Mutex;

/// Number of independently locked stripes.
pub const CLIENT_SHARD_COUNT: usize = 64;

/// Per-client state spread over [`CLIENT_SHARD_COUNT`] stripes.
///
/// A client identity always hashes to the same stripe, so all operations on
/// one client are mutually exclusive while clients living on other stripes
/// proceed without touching the same lock. Nothing here ever sleeps or does
/// I/O while a stripe is held.
pub struct ClientShards<T> {
    pub shards: [Arc<Mutex<HashMap<String, T>>>; CLIENT_SHARD_COUNT],
    pub hasher: ahash::RandomState,
}
