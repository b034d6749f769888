// src/errors.rs

//! Crate-wide error type.
//!
//! An unreachable schedule is *not* an error; see
//! [`TermCount`](crate::planner::TermCount).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("Prerequisite cycle(s) detected: {}", format_cycles(.cycles))]
    CycleDetected { cycles: Vec<Vec<String>> },

    #[error("Cannot approve '{course}': missing prerequisites {missing:?}")]
    MissingPrerequisites { course: String, missing: Vec<String> },

    #[error("Catalog has {courses} courses; at most {limit} are supported")]
    CatalogTooLarge { courses: usize, limit: usize },

    #[error("Credit cap must be >= 1 (got {0})")]
    InvalidCreditCap(u32),

    #[error("A combination of {width} courses has too many outcomes to enumerate (limit {limit})")]
    CombinationOverflow { width: usize, limit: usize },

    #[error("Schedule search aborted after {explored} states: {reason}")]
    SearchAborted { explored: u64, reason: String },

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn format_cycles(cycles: &[Vec<String>]) -> String {
    cycles
        .iter()
        .map(|c| c.join(" -> "))
        .collect::<Vec<_>>()
        .join("; ")
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, PlanError>;
