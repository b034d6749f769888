// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::graph::{Course, RejectedCourse};
use crate::planner::{DEFAULT_CREDIT_CAP, DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_SEARCH_NODES};
use crate::types::{CourseStatus, StuckPolicy};

/// Catalog file as read from TOML, before any semantic validation.
///
/// ```toml
/// [planner]
/// credit_cap = 20
///
/// [course.MAT101]
/// name = "Calculus I"
/// credits = 4
/// term = 1
/// prerequisites = []
///
/// [course.MAT102]
/// name = "Calculus II"
/// credits = 4
/// term = 2
/// prerequisites = ["MAT101"]
/// status = "failed"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCatalog {
    #[serde(default)]
    pub planner: PlannerSection,

    /// Keys are course ids.
    #[serde(default)]
    pub course: BTreeMap<String, RawCourse>,
}

/// `[planner]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PlannerSection {
    #[serde(default = "default_credit_cap")]
    pub credit_cap: u32,

    #[serde(default = "default_max_search_nodes")]
    pub max_search_nodes: u64,

    #[serde(default = "default_max_combinations")]
    pub max_combinations: u64,

    /// Optional wall-clock budget for one schedule search.
    #[serde(default)]
    pub deadline_ms: Option<u64>,

    #[serde(default)]
    pub on_stuck: StuckPolicy,

    #[serde(default = "default_first_term")]
    pub first_term: u32,

    /// Plan failed courses as retakes.
    #[serde(default)]
    pub retake_failed: bool,
}

fn default_credit_cap() -> u32 {
    DEFAULT_CREDIT_CAP
}

fn default_max_search_nodes() -> u64 {
    DEFAULT_MAX_SEARCH_NODES
}

fn default_max_combinations() -> u64 {
    DEFAULT_MAX_COMBINATIONS
}

fn default_first_term() -> u32 {
    1
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            credit_cap: default_credit_cap(),
            max_search_nodes: default_max_search_nodes(),
            max_combinations: default_max_combinations(),
            deadline_ms: None,
            on_stuck: StuckPolicy::default(),
            first_term: default_first_term(),
            retake_failed: false,
        }
    }
}

/// `[course.<id>]` section.
///
/// Everything is optional at this level so that one malformed entry does
/// not fail the whole file; [`ingest`](crate::config::ingest) decides what
/// is acceptable.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawCourse {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub credits: Option<u32>,

    /// Term the catalog places the course in.
    #[serde(default)]
    pub term: Option<u32>,

    #[serde(default)]
    pub prerequisites: Option<Vec<String>>,

    #[serde(default)]
    pub status: Option<CourseStatus>,
}

/// A validated catalog: planner settings plus the courses that survived
/// ingestion.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub planner: PlannerSection,
    pub courses: Vec<Course>,
    /// Entries that were dropped, with the reason.
    pub rejected: Vec<RejectedCourse>,
}

impl Catalog {
    /// Construct without validation. Prefer `Catalog::try_from(raw)`.
    pub fn new_unchecked(
        planner: PlannerSection,
        courses: Vec<Course>,
        rejected: Vec<RejectedCourse>,
    ) -> Self {
        Self {
            planner,
            courses,
            rejected,
        }
    }
}
