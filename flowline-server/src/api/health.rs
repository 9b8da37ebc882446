//! Health Check API Handler
//!
//! Simple health check endpoint for monitoring. The registry is in-memory,
//! so reachability of the process is the whole check.

use axum::{http::StatusCode, response::IntoResponse};

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
