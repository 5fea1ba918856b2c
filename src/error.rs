//! Error types for the file server
//!
//! Provides unified error handling using thiserror.
//!
//! Cache lookup misses are deliberately NOT errors: the cache reports
//! absence as `Option::None` and the dispatcher falls through to disk.
//! Only a file that exists nowhere becomes a `NotFound` response.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Cache Error Enum ==
/// Unified error type for the file server.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a capacity below one entry
    #[error("Invalid cache capacity: {0} (must be >= 1)")]
    InvalidCapacity(usize),

    /// Requested file exists neither in the cache nor on disk
    #[error("Not found: {0}")]
    NotFound(String),

    /// Request path tries to escape the server root
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Underlying filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::NotFound(_) => StatusCode::NOT_FOUND,
            CacheError::InvalidPath(_) => StatusCode::FORBIDDEN,
            CacheError::InvalidCapacity(_)
            | CacheError::Io(_)
            | CacheError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the file server.
pub type Result<T> = std::result::Result<T, CacheError>;
