// src/planner/budget.rs

//! Bounds on the exponential schedule search.

use std::time::{Duration, Instant};

use crate::errors::{PlanError, Result};

/// Default cap on the number of distinct states the search may expand.
pub const DEFAULT_MAX_SEARCH_NODES: u64 = 2_000_000;

/// Default cap on the number of term combinations the search may enumerate.
pub const DEFAULT_MAX_COMBINATIONS: u64 = 4_000_000;

/// How often (in expanded states) the wall-clock deadline is checked.
const DEADLINE_CHECK_INTERVAL: u64 = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub max_nodes: u64,
    /// Total combinations enumerated across all distinct available sets.
    pub max_combinations: u64,
    pub deadline: Option<Duration>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_nodes: DEFAULT_MAX_SEARCH_NODES,
            max_combinations: DEFAULT_MAX_COMBINATIONS,
            deadline: None,
        }
    }
}

/// Running budget for one search. Every expanded state and every
/// enumerated combination is charged once.
#[derive(Debug)]
pub struct SearchBudget {
    limits: SearchLimits,
    started: Instant,
    explored: u64,
    enumerated: u64,
}

impl SearchBudget {
    pub fn new(limits: SearchLimits) -> Self {
        Self {
            limits,
            started: Instant::now(),
            explored: 0,
            enumerated: 0,
        }
    }

    pub fn explored(&self) -> u64 {
        self.explored
    }

    pub fn enumerated(&self) -> u64 {
        self.enumerated
    }

    /// Charge one expanded state.
    pub fn charge(&mut self) -> Result<()> {
        self.explored += 1;

        if self.explored > self.limits.max_nodes {
            return Err(PlanError::SearchAborted {
                explored: self.explored,
                reason: format!("node budget of {} exhausted", self.limits.max_nodes),
            });
        }

        if let Some(deadline) = self.limits.deadline {
            if self.explored % DEADLINE_CHECK_INTERVAL == 0 && self.started.elapsed() >= deadline {
                return Err(PlanError::SearchAborted {
                    explored: self.explored,
                    reason: format!("deadline of {deadline:?} exceeded"),
                });
            }
        }

        Ok(())
    }

    /// Charge one enumerated combination.
    pub fn charge_combination(&mut self) -> Result<()> {
        self.enumerated += 1;

        if self.enumerated > self.limits.max_combinations {
            return Err(PlanError::SearchAborted {
                explored: self.explored,
                reason: format!(
                    "combination budget of {} exhausted",
                    self.limits.max_combinations
                ),
            });
        }

        Ok(())
    }
}
