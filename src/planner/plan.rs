// src/planner/plan.rs

//! Result types produced by the schedule search.

use std::fmt;

use crate::graph::CourseId;
use crate::types::AttemptOutcome;

/// Number of terms needed to approve every course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermCount {
    Terms(u32),
    /// No sequence of terms approves every course under the given cap.
    Unreachable,
}

impl TermCount {
    pub fn terms(self) -> Option<u32> {
        match self {
            TermCount::Terms(n) => Some(n),
            TermCount::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, TermCount::Terms(_))
    }
}

impl fmt::Display for TermCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermCount::Terms(n) => write!(f, "{n}"),
            TermCount::Unreachable => f.write_str("unreachable"),
        }
    }
}

/// One course attempted in a planned term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedCourse {
    pub id: CourseId,
    pub credits: u32,
    pub outcome: AttemptOutcome,
}

/// One planned term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermStep {
    pub term: u32,
    pub courses: Vec<PlannedCourse>,
    /// Sum of `courses[..].credits`.
    pub credits: u32,
}

impl TermStep {
    pub fn course_ids(&self) -> Vec<&str> {
        self.courses.iter().map(|c| c.id.as_str()).collect()
    }

    pub fn outcome_of(&self, id: &str) -> Option<AttemptOutcome> {
        self.courses.iter().find(|c| c.id == id).map(|c| c.outcome)
    }
}

/// Outcome of [`Engine::optimal_schedule`](crate::engine::Engine::optimal_schedule).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub total: TermCount,
    /// Plan achieving `total`. Empty when unreachable, unless the
    /// `force_fail` stuck policy produced a partial plan.
    pub steps: Vec<TermStep>,
    /// Courses whose credit weight alone exceeds the cap.
    pub oversized: Vec<CourseId>,
    /// Number of states the search expanded.
    pub explored: u64,
}

impl ScheduleResult {
    pub fn term_count(&self) -> Option<u32> {
        self.total.terms()
    }

    pub fn is_reachable(&self) -> bool {
        self.total.is_reachable()
    }
}
