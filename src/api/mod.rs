//! API Module
//!
//! HTTP handlers and routing for the caching file server.
//!
//! # Endpoints
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint
//! - `GET /*` - Serve a file, from cache when fresh, from disk otherwise

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
