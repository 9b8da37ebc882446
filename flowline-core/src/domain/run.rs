//! Pipeline run domain types

use serde::{Deserialize, Serialize};

/// Lifecycle status of a pipeline run
///
/// The intended path is Queued -> Running -> Passed/Failed, but transitions
/// are not enforced: any status may be set at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunStatus {
    Queued,
    Running,
    Passed,
    Failed,
}

impl RunStatus {
    /// Canonical name of the status
    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Queued => "Queued",
            RunStatus::Running => "Running",
            RunStatus::Passed => "Passed",
            RunStatus::Failed => "Failed",
        }
    }

    /// Parse a status token, case-insensitively.
    ///
    /// Surrounding whitespace is ignored. Anything other than the four
    /// canonical names (including an empty or blank token) is rejected.
    pub fn parse(token: &str) -> Result<Self, ParseStatusError> {
        let trimmed = token.trim();

        if trimmed.eq_ignore_ascii_case("queued") {
            Ok(RunStatus::Queued)
        } else if trimmed.eq_ignore_ascii_case("running") {
            Ok(RunStatus::Running)
        } else if trimmed.eq_ignore_ascii_case("passed") {
            Ok(RunStatus::Passed)
        } else if trimmed.eq_ignore_ascii_case("failed") {
            Ok(RunStatus::Failed)
        } else {
            Err(ParseStatusError {
                token: token.to_string(),
            })
        }
    }
}

impl std::str::FromStr for RunStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunStatus::parse(s)
    }
}

/// Error for a status token that is not one of the canonical names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStatusError {
    /// The rejected token, as supplied
    pub token: String,
}

impl std::fmt::Display for ParseStatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid status {:?}: use Queued, Running, Passed, Failed",
            self.token
        )
    }
}

impl std::error::Error for ParseStatusError {}

/// Status of a single stage within a run
///
/// Same domain as [`RunStatus`], kept as a distinct type because stages and
/// runs are observed independently. A stage's status never feeds back into
/// the parent run's status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StageStatus {
    Queued,
    Running,
    Passed,
    Failed,
}

/// Fixed stage sequence every run is created with, in execution order
pub const STAGE_NAMES: [&str; 5] = ["Checkout", "Build", "Test", "Deploy", "Verify"];

/// One named phase within a pipeline run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stage {
    pub name: String,
    pub status: StageStatus,
}

impl Stage {
    /// Fresh stage set for a new run: the five stages from [`STAGE_NAMES`],
    /// in order, all queued.
    pub fn initial_set() -> Vec<Stage> {
        STAGE_NAMES
            .iter()
            .map(|name| Stage {
                name: name.to_string(),
                status: StageStatus::Queued,
            })
            .collect()
    }
}

/// One execution record of a CI pipeline
///
/// Created only by the registry's create operation and mutated in place only
/// through its status update. `started_at` is assigned once at creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub id: u64,
    pub branch: String,
    pub commit: String,
    pub title: String,
    pub author: String,
    pub started_at: chrono::DateTime<chrono::Utc>,
    pub status: RunStatus,
    pub stages: Vec<Stage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_names() {
        assert_eq!(RunStatus::parse("Queued"), Ok(RunStatus::Queued));
        assert_eq!(RunStatus::parse("Running"), Ok(RunStatus::Running));
        assert_eq!(RunStatus::parse("Passed"), Ok(RunStatus::Passed));
        assert_eq!(RunStatus::parse("Failed"), Ok(RunStatus::Failed));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(RunStatus::parse("failed"), Ok(RunStatus::Failed));
        assert_eq!(RunStatus::parse("RUNNING"), Ok(RunStatus::Running));
        assert_eq!(RunStatus::parse("qUeUeD"), Ok(RunStatus::Queued));
    }

    #[test]
    fn test_parse_ignores_surrounding_whitespace() {
        assert_eq!(RunStatus::parse(" passed "), Ok(RunStatus::Passed));
    }

    #[test]
    fn test_parse_rejects_unknown_tokens() {
        assert!(RunStatus::parse("bogus").is_err());
        assert!(RunStatus::parse("").is_err());
        assert!(RunStatus::parse("   ").is_err());
        assert!(RunStatus::parse("Succeeded").is_err());
    }

    #[test]
    fn test_parse_error_lists_accepted_values() {
        let err = RunStatus::parse("bogus").unwrap_err();
        assert_eq!(err.token, "bogus");
        assert!(err.to_string().contains("Queued, Running, Passed, Failed"));
    }

    #[test]
    fn test_parse_roundtrips_canonical_names() {
        for status in [
            RunStatus::Queued,
            RunStatus::Running,
            RunStatus::Passed,
            RunStatus::Failed,
        ] {
            assert_eq!(RunStatus::parse(status.as_str()), Ok(status));
        }
    }

    #[test]
    fn test_initial_stage_set() {
        let stages = Stage::initial_set();

        assert_eq!(stages.len(), 5);
        let names: Vec<&str> = stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Checkout", "Build", "Test", "Deploy", "Verify"]);
        assert!(stages.iter().all(|s| s.status == StageStatus::Queued));
    }

    #[test]
    fn test_status_serializes_as_canonical_name() {
        let json = serde_json::to_string(&RunStatus::Passed).unwrap();
        assert_eq!(json, "\"Passed\"");
    }
}
