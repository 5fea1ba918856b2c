//! File Cache Module
//!
//! The cache engine: a hash index over an arena-backed recency list,
//! with capacity-bounded LRU eviction and lazy staleness expiry.
//!
//! Every entry is reachable from the index if and only if it is linked
//! into the recency list; each public operation restores that coupling
//! before returning. The engine has no internal locking: methods take
//! `&mut self`, and the server wraps the whole cache in one lock held
//! for the full duration of each call (see `api::AppState`).

use crate::cache::{CacheEntry, CacheStats, Index, RecencyList, DEFAULT_STALE_AFTER_SECS};
use crate::error::{CacheError, Result};

// == File Cache ==
/// Fixed-capacity LRU cache mapping request paths to file artifacts.
#[derive(Debug)]
pub struct FileCache {
    /// Key -> arena slot
    index: Index,
    /// Recency order; owns all entry memory
    list: RecencyList,
    /// Performance counters
    stats: CacheStats,
    /// Capacity ceiling in entries, fixed at construction
    max_size: usize,
    /// Staleness threshold in seconds
    stale_after: u64,
}

impl FileCache {
    // == Constructor ==
    /// Creates a cache holding at most `max_size` entries.
    ///
    /// `index_hint` pre-sizes the hash index (0 selects the default);
    /// it only tunes the collision rate, never behavior. Fails with
    /// [`CacheError::InvalidCapacity`] when `max_size` is zero.
    pub fn new(max_size: usize, index_hint: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidCapacity(max_size));
        }

        Ok(Self {
            index: Index::with_hint(index_hint),
            list: RecencyList::with_capacity(max_size),
            stats: CacheStats::new(),
            max_size,
            stale_after: DEFAULT_STALE_AFTER_SECS,
        })
    }

    /// Overrides the staleness threshold (seconds).
    pub fn stale_after(mut self, secs: u64) -> Self {
        self.stale_after = secs;
        self
    }

    // == Put ==
    /// Stores an artifact under `key`, stamped `now`.
    ///
    /// A duplicate key overwrites: the superseded entry is removed from
    /// both structures before the new one is linked, so no unreachable
    /// entry can linger in the recency list. If the insertion pushes the
    /// cache over capacity, exactly one entry is evicted from the tail,
    /// and its index mapping is removed by the evicted entry's own
    /// stored key rather than by a second lookup.
    pub fn put(&mut self, key: &str, content_type: &str, content: Vec<u8>, now: u64) {
        if let Some(slot) = self.index.remove(key) {
            self.list.remove(slot);
        }

        let entry = CacheEntry::new(key, content_type, content, now);
        let slot = self.list.push_front(entry);
        self.index.insert(key.to_string(), slot);

        if self.list.len() > self.max_size {
            if let Some((_, victim)) = self.list.pop_tail() {
                self.index.remove(&victim.key);
                self.stats.record_eviction();
                tracing::debug!(key = %victim.key, "evicted least-recently-used entry");
            }
        }

        self.stats.set_entries(self.list.len());
    }

    // == Get ==
    /// Looks up `key` at time `now`.
    ///
    /// A fresh hit promotes the entry to most-recently-used and returns
    /// a borrow valid until the next mutating call. A stale hit removes
    /// the entry and reports a miss, so the caller can repopulate via
    /// [`put`](Self::put). An absent key is a normal miss, not an error.
    pub fn get(&mut self, key: &str, now: u64) -> Option<&CacheEntry> {
        let slot = match self.index.get(key) {
            Some(slot) => slot,
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if self.list.get(slot).is_stale(now, self.stale_after) {
            let expired = self.evict_slot(slot);
            self.stats.record_expiry();
            self.stats.record_miss();
            self.stats.set_entries(self.list.len());
            tracing::debug!(key = %expired.key, age = expired.age(now), "expired stale entry");
            return None;
        }

        self.list.move_to_front(slot);
        self.stats.record_hit();
        Some(self.list.get(slot))
    }

    // == Eviction ==
    /// Removes the entry in `slot` from both structures and returns it.
    fn evict_slot(&mut self, slot: usize) -> CacheEntry {
        let entry = self.list.remove(slot);
        self.index.remove(&entry.key);
        entry
    }

    // == Accessors ==
    /// Current number of live entries.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Capacity ceiling in entries.
    pub fn capacity(&self) -> usize {
        self.max_size
    }

    /// Snapshot of the performance counters.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.list.len());
        stats
    }

    /// Keys in recency order, most recent first. Test and debug aid.
    pub fn recency_order(&self) -> Vec<String> {
        self.list.iter().map(|e| e.key.clone()).collect()
    }

    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        self.list.assert_consistent();
        assert_eq!(
            self.index.len(),
            self.list.len(),
            "index and recency list disagree on size"
        );
        assert!(self.list.len() <= self.max_size, "capacity exceeded");
        for entry in self.list.iter() {
            let slot = self
                .index
                .get(&entry.key)
                .expect("listed entry missing from index");
            assert_eq!(self.list.get(slot).key, entry.key);
        }
    }
}
