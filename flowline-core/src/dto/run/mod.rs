//! Run DTOs for the HTTP API

use serde::{Deserialize, Serialize};

/// Request to create a new run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRun {
    pub branch: String,
    pub commit: String,
    pub title: String,
    pub author: String,
}

/// Request to update a run's status
///
/// The status arrives as text and is parsed case-insensitively by the
/// service layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRunStatus {
    pub status: String,
}

/// Optional filters for listing runs
///
/// Also the query-string shape of the list endpoint. Absent or blank
/// parameters are not applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunFilter {
    pub status: Option<String>,
    pub branch: Option<String>,
    pub author: Option<String>,
    pub q: Option<String>,
}
