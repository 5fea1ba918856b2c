//! Response DTOs for the file server API
//!
//! Defines the structure of outgoing JSON response bodies.

use chrono::Utc;
use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from memory
    pub hits: u64,
    /// Lookups that fell through to disk
    pub misses: u64,
    /// Entries dropped by capacity pressure
    pub evictions: u64,
    /// Entries dropped by staleness expiry
    pub expired: u64,
    /// Current number of cached files
    pub entries: usize,
    /// Capacity ceiling in entries
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a cache statistics snapshot.
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expired: stats.expired,
            entries: stats.entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response stamped with the current time.
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// JSON error body returned by all failing endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error description
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_response_from_snapshot() {
        let mut stats = CacheStats::new();
        stats.record_hit();
        stats.record_miss();
        stats.set_entries(3);

        let response = StatsResponse::new(&stats, 64);
        assert_eq!(response.hits, 1);
        assert_eq!(response.misses, 1);
        assert_eq!(response.entries, 3);
        assert_eq!(response.capacity, 64);
        assert_eq!(response.hit_rate, 0.5);
    }

    #[test]
    fn test_health_response_serializes() {
        let response = HealthResponse::healthy();
        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"status\":\"healthy\""));
    }

    #[test]
    fn test_error_response() {
        let response = ErrorResponse::new("boom");
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"error":"boom"}"#);
    }
}
