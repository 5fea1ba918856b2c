//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::path::PathBuf;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Directory the server serves files from
    pub root_dir: PathBuf,
    /// Maximum number of files the cache can hold
    pub cache_capacity: usize,
    /// Sizing hint for the cache's hash index (0 = default)
    pub index_hint: usize,
    /// Seconds before a cached file is considered stale
    pub stale_after: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3490)
    /// - `ROOT_DIR` - Served directory (default: ./public)
    /// - `CACHE_CAPACITY` - Maximum cached files (default: 64)
    /// - `CACHE_INDEX_HINT` - Hash index sizing hint (default: 0)
    /// - `STALE_AFTER` - Staleness threshold in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3490),
            root_dir: env::var("ROOT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./public")),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(64),
            index_hint: env::var("CACHE_INDEX_HINT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            stale_after: env::var("STALE_AFTER")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3490,
            root_dir: PathBuf::from("./public"),
            cache_capacity: 64,
            index_hint: 0,
            stale_after: 60,
        }
    }
}
