//! API Handlers
//!
//! HTTP request handlers: the file dispatcher plus the stats and
//! health side endpoints.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{unix_now, FileCache};
use crate::config::Config;
use crate::error::Result;
use crate::fs;
use crate::mime::MimeTable;
use crate::models::{HealthResponse, StatsResponse};

/// Application state shared across all handlers.
///
/// The cache is wrapped in a single `Arc<RwLock<_>>`; every cache
/// operation takes the write lock for its full duration, because even a
/// lookup reorders the recency list. The MIME table is built once at
/// startup and shared read-only.
#[derive(Clone)]
pub struct AppState {
    /// The shared file cache, guarded as one unit
    pub cache: Arc<RwLock<FileCache>>,
    /// Extension -> content-type table
    pub mime: Arc<MimeTable>,
    /// Directory files are served from
    pub root: Arc<PathBuf>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: FileCache, mime: MimeTable, root: PathBuf) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
            mime: Arc::new(mime),
            root: Arc::new(root),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Fails if the configured cache capacity is zero.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = FileCache::new(config.cache_capacity, config.index_hint)?
            .stale_after(config.stale_after);
        Ok(Self::new(cache, MimeTable::new(), config.root_dir.clone()))
    }
}

/// Handler serving files for every GET the side endpoints don't claim.
///
/// The request path is normalized (directories resolve to their index
/// file) and used as the cache key. A fresh cache hit is served from
/// memory; a miss or stale removal falls through to disk, repopulates
/// the cache, and serves the bytes just read.
pub async fn serve_handler(State(state): State<AppState>, uri: Uri) -> Result<Response> {
    let key = fs::normalize(state.root.as_path(), uri.path()).await?;
    let now = unix_now();

    {
        let mut cache = state.cache.write().await;
        if let Some(entry) = cache.get(&key, now) {
            debug!(path = %key, "serving from cache");
            return Ok(file_response(&entry.content_type, entry.content.clone()));
        }
    }

    // Miss or stale removal: load from disk and repopulate. Two tasks
    // racing here both read the file; the second put overwrites the
    // first, which is harmless.
    let content = fs::read(state.root.as_path(), &key).await?;
    let content_type = state.mime.lookup(&key);
    debug!(path = %key, bytes = content.len(), "serving from disk");

    let mut cache = state.cache.write().await;
    cache.put(&key, content_type, content.clone(), now);

    Ok(file_response(content_type, content))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::new(&cache.stats(), cache.capacity()))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Builds a 200 response carrying the file bytes and their label.
fn file_response(content_type: &str, body: Vec<u8>) -> Response {
    ([(header::CONTENT_TYPE, content_type.to_string())], body).into_response()
}
