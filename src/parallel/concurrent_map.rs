//! A sharded map for parallel accumulation.
//!
//! Keys are spread over a fixed array of shards, each a mutex around a hash
//! map. Point updates on distinct shards proceed in parallel; updates to
//! the same key are serialized by the shard lock. There is no global lock.

use std::collections::BTreeMap;
use std::hash::{BuildHasher, Hash};

use ahash::{AHashMap, RandomState};
use parking_lot::{MappedMutexGuard, Mutex, MutexGuard};

/// Default shard count. Sized so that concurrent accumulation over short
/// postings lists rarely contends on a shard.
pub const DEFAULT_SHARD_COUNT: usize = 5_000;

/// A concurrent map sharded over a fixed number of locks.
pub struct ConcurrentMap<K, V> {
    shards: Vec<Mutex<AHashMap<K, V>>>,
    hasher: RandomState,
}

impl<K: Hash + Eq, V> ConcurrentMap<K, V> {
    /// Create a map with [`DEFAULT_SHARD_COUNT`] shards.
    pub fn new() -> Self {
        Self::with_shards(DEFAULT_SHARD_COUNT)
    }

    /// Create a map with a custom shard count. At least one shard is
    /// always allocated.
    pub fn with_shards(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        ConcurrentMap {
            shards: (0..shard_count).map(|_| Mutex::new(AHashMap::new())).collect(),
            hasher: RandomState::new(),
        }
    }

    fn shard(&self, key: &K) -> &Mutex<AHashMap<K, V>> {
        let index = self.hasher.hash_one(key) as usize % self.shards.len();
        &self.shards[index]
    }

    /// Lock the shard owning `key` and return a guarded reference to its
    /// value, default-constructing it on first access. The shard stays
    /// locked for the lifetime of the guard.
    pub fn access(&self, key: K) -> MappedMutexGuard<'_, V>
    where
        V: Default,
    {
        MutexGuard::map(self.shard(&key).lock(), |shard| {
            shard.entry(key).or_default()
        })
    }

    /// Remove `key` from the map, if present.
    pub fn erase(&self, key: K) {
        self.shard(&key).lock().remove(&key);
    }

    /// Merge every shard, in shard order, into one ordered map.
    pub fn build_ordinary_map(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        let mut merged = BTreeMap::new();
        for shard in &self.shards {
            for (key, value) in shard.lock().iter() {
                merged.insert(key.clone(), value.clone());
            }
        }
        merged
    }
}

impl<K: Hash + Eq, V> Default for ConcurrentMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
