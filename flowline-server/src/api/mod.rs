//! API Module
//!
//! HTTP API layer for the server.
//! Each submodule handles endpoints for a specific domain.

pub mod error;
pub mod health;
pub mod run;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, patch},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::registry::RunRegistry;

/// Create the main API router with all endpoints
pub fn create_router(registry: Arc<RunRegistry>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Run endpoints
        .route("/api/runs", get(run::list_runs).post(run::create_run))
        .route("/api/runs/{id}", get(run::get_run))
        .route("/api/runs/{id}/status", patch(run::update_run_status))
        // Add state and middleware
        .with_state(registry)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
