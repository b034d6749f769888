// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Pass/fail status of a course as recorded for the student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    Approved,
    Failed,
    #[default]
    NotTaken,
}

impl FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approved" | "passed" => Ok(CourseStatus::Approved),
            "failed" => Ok(CourseStatus::Failed),
            "not_taken" | "not-taken" | "reset" => Ok(CourseStatus::NotTaken),
            other => Err(format!(
                "invalid course status: {other} (expected \"approved\", \"failed\" or \"not_taken\")"
            )),
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CourseStatus::Approved => "approved",
            CourseStatus::Failed => "failed",
            CourseStatus::NotTaken => "not_taken",
        };
        f.write_str(s)
    }
}

/// Outcome assumed for a course attempted in a planned term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AttemptOutcome {
    Approved,
    Failed,
}

impl fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptOutcome::Approved => f.write_str("approved"),
            AttemptOutcome::Failed => f.write_str("failed"),
        }
    }
}

/// What the planner does when a state still has available courses but every
/// combination leads to an unreachable completion.
///
/// - `Report`: give up on the state and report it as unreachable (default).
/// - `ForceFail`: assume the first available course fails this term and keep
///   searching from there. The resulting plan contains a failure that nobody
///   asked for, so this is opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StuckPolicy {
    #[default]
    Report,
    ForceFail,
}
