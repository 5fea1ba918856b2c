//! staticd - A caching static file server
//!
//! Serves files over HTTP through a fixed-capacity LRU cache with lazy
//! staleness expiry, so hot files are read from disk once per minute at
//! most.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fs;
pub mod mime;
pub mod models;

pub use api::AppState;
pub use cache::FileCache;
pub use config::Config;
