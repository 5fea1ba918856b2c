//! Cache Module
//!
//! In-memory file cache: a hash index coupled to an arena-backed
//! recency list, with LRU eviction and lazy staleness expiry.

mod entry;
mod index;
mod list;
mod stats;
mod store;


// Re-export public types
pub use entry::{unix_now, CacheEntry};
pub use index::Index;
pub use list::RecencyList;
pub use stats::CacheStats;
pub use store::FileCache;

// == Public Constants ==
/// Default staleness threshold in seconds: a cached artifact older than
/// this is expired on its next lookup.
pub const DEFAULT_STALE_AFTER_SECS: u64 = 60;
