//! API Routes
//!
//! Configures the Axum router: two JSON side endpoints plus a GET
//! fallback that serves (and caches) files for every other path.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{health_handler, serve_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
/// - `GET /` and `GET /*path` - Serve a file from the cache or disk
///
/// `/stats` and `/health` shadow files of the same name under the
/// server root; everything else routes to the file dispatcher.
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .route("/", get(serve_handler))
        .route("/*path", get(serve_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
