//! Index Module
//!
//! Hash-based key lookup for the cache: request path -> arena slot.
//! The index stores locators only; entry memory is owned by the recency
//! list's arena, so tearing the index down never frees an entry.

use std::collections::HashMap;

/// Default table sizing when the caller passes a hint of 0.
const DEFAULT_CAPACITY_HINT: usize = 128;

// == Index ==
/// Thin adapter over `HashMap` mapping keys to recency-list slots.
#[derive(Debug)]
pub struct Index {
    slots: HashMap<String, usize>,
}

impl Index {
    /// Creates an index pre-sized for `hint` keys (0 selects the
    /// default). The hint affects only the initial table allocation,
    /// never correctness.
    pub fn with_hint(hint: usize) -> Self {
        let capacity = if hint == 0 { DEFAULT_CAPACITY_HINT } else { hint };
        Self {
            slots: HashMap::with_capacity(capacity),
        }
    }

    /// Maps `key` to `slot`, returning the previous slot if the key was
    /// already present.
    pub fn insert(&mut self, key: String, slot: usize) -> Option<usize> {
        self.slots.insert(key, slot)
    }

    /// Looks up the slot for `key`. Absence is a normal outcome.
    pub fn get(&self, key: &str) -> Option<usize> {
        self.slots.get(key).copied()
    }

    /// Unmaps `key`, returning the slot it pointed at.
    pub fn remove(&mut self, key: &str) -> Option<usize> {
        self.slots.remove(key)
    }

    /// Number of mapped keys.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}
