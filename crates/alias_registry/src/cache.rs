//! Write-once memo map.
//!
//! Provides get-or-compute with thread-safe concurrent access via the
//! per-shard locking of `DashMap`.

use std::hash::Hash;

use dashmap::DashMap;
use rustc_hash::FxBuildHasher;

/// Concurrent map whose entries are computed on first use and never change.
///
/// # Thread Safety
/// Computation runs outside any shard lock, so racing first callers may each
/// compute a value. Only the first inserted value is retained, and every
/// caller returns that one.
pub(crate) struct MemoMap<K, V> {
    /// Projection name for tracing.
    name: &'static str,
    map: DashMap<K, V, FxBuildHasher>,
}

impl<K, V> MemoMap<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(crate) fn new(name: &'static str, capacity: usize, shard_amount: Option<usize>) -> Self {
        let map = match shard_amount {
            Some(shards) => {
                DashMap::with_capacity_and_hasher_and_shard_amount(capacity, FxBuildHasher, shards)
            }
            None => DashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        };
        MemoMap { name, map }
    }

    /// Return the retained value for `key`, computing it on first use.
    pub(crate) fn get_or_compute(&self, key: K, compute: impl FnOnce() -> V) -> V {
        // Fast path: read lock on a single shard
        if let Some(existing) = self.map.get(&key) {
            tracing::trace!(cache = self.name, "cache hit");
            return existing.value().clone();
        }

        let computed = compute();

        // Whichever value landed first wins; a racing computation is discarded
        self.map.entry(key).or_insert(computed).value().clone()
    }

    /// Number of retained entries.
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }
}
