//! Run API Handlers
//!
//! HTTP endpoints for pipeline run management.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use flowline_core::domain::run::PipelineRun;
use flowline_core::dto::run::{CreateRun, RunFilter, UpdateRunStatus};

use crate::api::error::{ApiError, ApiResult};
use crate::registry::RunRegistry;
use crate::service::run_service;

/// GET /api/runs
/// List runs, with optional status/branch/author/q filters
pub async fn list_runs(
    State(registry): State<Arc<RunRegistry>>,
    Query(filter): Query<RunFilter>,
) -> Json<Vec<PipelineRun>> {
    tracing::debug!("Listing runs");

    Json(run_service::list_runs(&registry, &filter))
}

/// GET /api/runs/{id}
/// Get run by id
pub async fn get_run(
    State(registry): State<Arc<RunRegistry>>,
    Path(id): Path<u64>,
) -> ApiResult<Json<PipelineRun>> {
    tracing::debug!("Getting run: {}", id);

    let run = run_service::get_run(&registry, id).map_err(|e| match e {
        run_service::RunError::NotFound(id) => ApiError::NotFound(format!("Run {} not found", id)),
        run_service::RunError::InvalidStatus(token) => {
            ApiError::BadRequest(format!("Invalid status: {}", token))
        }
    })?;

    Ok(Json(run))
}

/// POST /api/runs
/// Create a new run
pub async fn create_run(
    State(registry): State<Arc<RunRegistry>>,
    Json(req): Json<CreateRun>,
) -> (StatusCode, Json<PipelineRun>) {
    tracing::info!("Creating run for branch: {}", req.branch);

    let run = run_service::create_run(&registry, req);

    (StatusCode::CREATED, Json(run))
}

/// PATCH /api/runs/{id}/status
/// Update a run's status from its textual name
pub async fn update_run_status(
    State(registry): State<Arc<RunRegistry>>,
    Path(id): Path<u64>,
    Json(req): Json<UpdateRunStatus>,
) -> ApiResult<StatusCode> {
    tracing::info!("Updating run {} status to: {}", id, req.status);

    run_service::update_run_status(&registry, id, &req.status).map_err(|e| match e {
        run_service::RunError::NotFound(id) => ApiError::NotFound(format!("Run {} not found", id)),
        run_service::RunError::InvalidStatus(_) => {
            ApiError::BadRequest("Invalid status. Use Queued, Running, Passed, Failed.".to_string())
        }
    })?;

    Ok(StatusCode::NO_CONTENT)
}
