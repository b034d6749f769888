// src/planner/mod.rs

//! Minimum-term multi-term scheduling.
//!
//! - [`search`] is the memoised search over `(approved, failed, term)` states.
//! - [`budget`] bounds how much of the (exponential) state space it may visit.
//! - [`plan`] holds the result types handed back to callers.

pub mod budget;
pub mod plan;
pub mod search;

pub use budget::{DEFAULT_MAX_COMBINATIONS, DEFAULT_MAX_SEARCH_NODES, SearchBudget, SearchLimits};
pub use plan::{PlannedCourse, ScheduleResult, TermCount, TermStep};
pub use search::{MAX_COMBINATION_WIDTH, Search, SearchState};

use crate::types::StuckPolicy;

/// Default per-term credit cap.
pub const DEFAULT_CREDIT_CAP: u32 = 20;

/// Knobs for one schedule search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannerOptions {
    pub credit_cap: u32,
    pub limits: SearchLimits,
    pub on_stuck: StuckPolicy,
    /// Number given to the first planned term.
    pub first_term: u32,
    /// Plan courses currently marked failed as retakes instead of treating
    /// them as failed for good.
    pub retake_failed: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            credit_cap: DEFAULT_CREDIT_CAP,
            limits: SearchLimits::default(),
            on_stuck: StuckPolicy::default(),
            first_term: 1,
            retake_failed: false,
        }
    }
}

impl PlannerOptions {
    pub fn with_credit_cap(credit_cap: u32) -> Self {
        Self {
            credit_cap,
            ..Self::default()
        }
    }
}
