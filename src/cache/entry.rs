//! Cache Entry Module
//!
//! Defines the artifact stored under one request path: the file bytes,
//! their content-type label, and the moment they were read from disk.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A single cached artifact. Immutable once inserted; only the recency
/// links held by the surrounding list change after insertion.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The request path this artifact was stored under
    pub key: String,
    /// MIME label resolved at insertion time
    pub content_type: String,
    /// File bytes, captured once at insertion
    pub content: Vec<u8>,
    /// Creation timestamp (Unix seconds)
    pub created_at: u64,
}

impl CacheEntry {
    /// Creates a new entry stamped with the given creation time.
    pub fn new(
        key: impl Into<String>,
        content_type: impl Into<String>,
        content: Vec<u8>,
        created_at: u64,
    ) -> Self {
        Self {
            key: key.into(),
            content_type: content_type.into(),
            content,
            created_at,
        }
    }

    /// Age of the entry in seconds at time `now`.
    ///
    /// Saturates at zero if `now` is earlier than the creation time, so a
    /// clock that steps backwards never produces a huge bogus age.
    pub fn age(&self, now: u64) -> u64 {
        now.saturating_sub(self.created_at)
    }

    /// Whether this entry has outlived `max_age` seconds at time `now`.
    ///
    /// Boundary condition: an entry aged exactly `max_age` is still fresh;
    /// staleness requires the age to strictly exceed the threshold.
    pub fn is_stale(&self, now: u64, max_age: u64) -> bool {
        self.age(now) > max_age
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in seconds.
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_secs()
}
