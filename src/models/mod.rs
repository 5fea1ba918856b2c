//! Response models for the file server API
//!
//! File bodies are served raw; these DTOs cover the JSON side surfaces
//! (statistics, health, and error bodies).

pub mod responses;

// Re-export commonly used types
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
