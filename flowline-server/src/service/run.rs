//! Run Service
//!
//! Business logic for run management: creation, lookup, filtering, and
//! status updates over the registry.

use flowline_core::domain::run::{PipelineRun, RunStatus, Stage};
use flowline_core::dto::run::{CreateRun, RunFilter};

use crate::registry::RunRegistry;

/// Service error type
#[derive(Debug)]
pub enum RunError {
    NotFound(u64),
    InvalidStatus(String),
}

pub type Result<T> = std::result::Result<T, RunError>;

/// Create a new run
///
/// Assigns a fresh id, stamps the current UTC time, and attaches the fixed
/// stage set, all queued. Always succeeds.
pub fn create_run(registry: &RunRegistry, req: CreateRun) -> PipelineRun {
    let run = PipelineRun {
        id: registry.next_id(),
        branch: req.branch,
        commit: req.commit,
        title: req.title,
        author: req.author,
        started_at: chrono::Utc::now(),
        status: RunStatus::Queued,
        stages: Stage::initial_set(),
    };

    registry.add(run.clone());

    tracing::info!("Run created: {} ({})", run.title, run.id);

    run
}

/// Get a run by id
pub fn get_run(registry: &RunRegistry, id: u64) -> Result<PipelineRun> {
    registry.get(id).ok_or(RunError::NotFound(id))
}

/// List runs matching the given filters
///
/// Filters compose with AND; an absent or blank parameter is not applied.
/// A status token that fails to parse skips the status predicate instead of
/// failing, so `?status=bogus` behaves like no status filter at all.
pub fn list_runs(registry: &RunRegistry, filter: &RunFilter) -> Vec<PipelineRun> {
    let mut runs = registry.all();

    if let Some(status) = param(&filter.status) {
        if let Ok(parsed) = RunStatus::parse(status) {
            runs.retain(|r| r.status == parsed);
        }
    }

    if let Some(branch) = param(&filter.branch) {
        runs.retain(|r| r.branch.eq_ignore_ascii_case(branch));
    }

    if let Some(author) = param(&filter.author) {
        runs.retain(|r| r.author.eq_ignore_ascii_case(author));
    }

    if let Some(q) = param(&filter.q) {
        let q = q.to_lowercase();
        runs.retain(|r| {
            r.commit.to_lowercase().contains(&q) || r.title.to_lowercase().contains(&q)
        });
    }

    runs
}

/// Update a run's status from its textual name
///
/// The token is parsed before the registry is touched, so a bad token never
/// changes state.
pub fn update_run_status(registry: &RunRegistry, id: u64, token: &str) -> Result<()> {
    let status = RunStatus::parse(token).map_err(|e| RunError::InvalidStatus(e.token))?;

    if !registry.update_status(id, status) {
        return Err(RunError::NotFound(id));
    }

    tracing::info!("Run {} status set to {}", id, status.as_str());

    Ok(())
}

fn param(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
