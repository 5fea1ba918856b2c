//! Cache Statistics Module
//!
//! Tracks hit/miss counters plus the two ways an entry leaves the cache
//! early: capacity eviction and staleness expiry.

use serde::Serialize;

// == Cache Stats ==
/// Performance counters for the file cache.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups served from memory
    pub hits: u64,
    /// Lookups that fell through to disk (absent or stale)
    pub misses: u64,
    /// Entries dropped by capacity pressure
    pub evictions: u64,
    /// Entries dropped because they aged past the staleness threshold
    pub expired: u64,
    /// Current number of live entries
    pub entries: usize,
}

impl CacheStats {
    /// Creates stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit rate as a fraction, or 0.0 before any lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expiry(&mut self) {
        self.expired += 1;
    }

    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
