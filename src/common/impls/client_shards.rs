use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;
use parking_lot::Mutex;
use crate::common::structs::client_shards::{ClientShards, CLIENT_SHARD_COUNT};

impl<T> Default for ClientShards<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for ClientShards<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientShards")
            .field("shards", &CLIENT_SHARD_COUNT)
            .field("clients", &self.len())
            .finish()
    }
}

impl<T> ClientShards<T> {
    pub fn new() -> ClientShards<T> {
        ClientShards {
            shards: std::array::from_fn(|_| Arc::new(Mutex::new(HashMap::new()))),
            hasher: ahash::RandomState::new(),
        }
    }

    pub fn shard_index(&self, client_id: &str) -> usize {
        (BuildHasher::hash_one(&self.hasher, client_id) % CLIENT_SHARD_COUNT as u64) as usize
    }

    pub fn shard(&self, client_id: &str) -> &Arc<Mutex<HashMap<String, T>>> {
        &self.shards[self.shard_index(client_id)]
    }

    /// Runs `f` with exclusive access to the stripe owning `client_id`.
    pub fn with_shard<R>(&self, client_id: &str, f: impl FnOnce(&mut HashMap<String, T>) -> R) -> R {
        let mut shard = self.shard(client_id).lock();
        f(&mut shard)
    }

    pub fn len(&self) -> usize {
        self.shards.iter().map(|shard| shard.lock().len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.iter().all(|shard| shard.lock().is_empty())
    }

    /// Visits every stripe in turn, locking one stripe at a time.
    pub fn collect<R>(&self, mut f: impl FnMut(&String, &T) -> Option<R>) -> Vec<R> {
        let mut output = Vec::new();
        for shard in self.shards.iter() {
            let shard = shard.lock();
            output.extend(shard.iter().filter_map(|(key, value)| f(key, value)));
        }
        output
    }
}
