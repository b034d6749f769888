// src/planner/search.rs

//! Memoised minimum-term search.
//!
//! A state is `(approved, failed, term)`. From a state, every combination
//! of available courses within the credit cap is tried under every
//! approved/failed outcome vector, and the state costs
//! `1 + min(child costs)`. The first minimum found wins ties; combinations
//! are visited by descending credit weight and outcome vectors starting
//! from "all approved". A state stops looking once it reaches the lower
//! bound on its remaining terms, which no later branch can beat.
//!
//! The memo table and the combination cache live inside one [`Search`] and
//! are dropped with it, so nothing carries over between calls.

use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::errors::{PlanError, Result};
use crate::graph::{CourseGraph, CourseSet};
use crate::planner::PlannerOptions;
use crate::planner::budget::SearchBudget;
use crate::planner::plan::{PlannedCourse, ScheduleResult, TermCount, TermStep};
use crate::types::{AttemptOutcome, StuckPolicy};

/// Widest combination whose outcome vectors can be enumerated (one bit per
/// course in a `u64`).
pub const MAX_COMBINATION_WIDTH: usize = 63;

/// Bit `i` of `mask` set means the `i`-th course of a combination failed.
fn attempt_failed(mask: u64, i: usize) -> bool {
    i < 64 && mask >> i & 1 == 1
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchState {
    pub approved: CourseSet,
    pub failed: CourseSet,
    pub term: u32,
}

impl SearchState {
    /// Child state after attempting `members` with the given outcome mask
    /// (bit `i` set means `members[i]` failed).
    fn advance(&self, members: &[usize], failed_mask: u64) -> SearchState {
        let mut approved = self.approved.clone();
        let mut failed = self.failed.clone();
        for (i, &pos) in members.iter().enumerate() {
            if attempt_failed(failed_mask, i) {
                failed.insert(pos);
            } else {
                approved.insert(pos);
            }
        }
        SearchState {
            approved,
            failed,
            term: self.term + 1,
        }
    }
}

#[derive(Debug, Clone)]
struct Combination {
    /// Course positions, in availability order.
    members: Vec<usize>,
    credits: u32,
}

/// Memoised answer for one state. `next` is the step taken from it and the
/// state it leads to.
#[derive(Debug, Clone)]
struct Solved {
    cost: Option<u32>,
    next: Option<(TermStep, SearchState)>,
}

pub struct Search<'a> {
    graph: &'a CourseGraph,
    order: &'a [usize],
    credit_cap: u32,
    on_stuck: StuckPolicy,
    budget: SearchBudget,
    memo: HashMap<SearchState, Solved>,
    combinations: HashMap<CourseSet, Rc<Vec<Combination>>>,
}

impl<'a> Search<'a> {
    /// `order` must be a topological order of `graph`; it fixes the order in
    /// which available courses are listed.
    pub fn new(graph: &'a CourseGraph, order: &'a [usize], options: &PlannerOptions) -> Self {
        Self {
            graph,
            order,
            credit_cap: options.credit_cap,
            on_stuck: options.on_stuck,
            budget: SearchBudget::new(options.limits),
            memo: HashMap::new(),
            combinations: HashMap::new(),
        }
    }

    /// Run the search from `root` and assemble the plan.
    pub fn run(mut self, root: SearchState) -> Result<ScheduleResult> {
        if self.credit_cap == 0 {
            return Err(PlanError::InvalidCreditCap(self.credit_cap));
        }

        let cost = self.solve(&root)?;

        let mut steps = Vec::new();
        let mut cursor = root;
        while let Some(Solved {
            next: Some((step, next)),
            ..
        }) = self.memo.get(&cursor)
        {
            steps.push(step.clone());
            cursor = next.clone();
        }

        let total = match cost {
            Some(n) => TermCount::Terms(n),
            None => TermCount::Unreachable,
        };
        if total == TermCount::Unreachable && self.on_stuck == StuckPolicy::Report {
            steps.clear();
        }

        let oversized = (0..self.graph.len())
            .filter(|&p| self.graph.credits(p) > self.credit_cap)
            .map(|p| self.graph.id(p).to_string())
            .collect();

        debug!(
            %total,
            terms_planned = steps.len(),
            explored = self.budget.explored(),
            combinations = self.budget.enumerated(),
            memo_entries = self.memo.len(),
            "schedule search finished"
        );

        Ok(ScheduleResult {
            total,
            steps,
            oversized,
            explored: self.budget.explored(),
        })
    }

    /// Courses that can be attempted in `state`, in topological order.
    fn available(&self, state: &SearchState) -> Vec<usize> {
        self.order
            .iter()
            .copied()
            .filter(|&pos| {
                !state.approved.contains(pos)
                    && !state.failed.contains(pos)
                    && self
                        .graph
                        .prerequisites_of(pos)
                        .iter()
                        .all(|&dep| state.approved.contains(dep))
            })
            .collect()
    }

    /// Minimum number of further terms from `state`, or `None` if every
    /// course can no longer be approved.
    fn solve(&mut self, state: &SearchState) -> Result<Option<u32>> {
        // Failed courses are never attempted again, so once anything has
        // failed the catalog cannot be fully approved.
        if !state.failed.is_empty() && self.on_stuck == StuckPolicy::Report {
            return Ok(None);
        }

        if let Some(solved) = self.memo.get(state) {
            return Ok(solved.cost);
        }
        self.budget.charge()?;

        let available = self.available(state);
        if available.is_empty() {
            let cost = if state.approved.is_full() { Some(0) } else { None };
            trace!(term = state.term, ?cost, "no available courses");
            self.memo.insert(state.clone(), Solved { cost, next: None });
            return Ok(cost);
        }

        let combinations = self.combinations_for(&available)?;
        let floor = self.lower_bound(state);
        let mut best: Option<(u32, TermStep, SearchState)> = None;

        'combinations: for combo in combinations.iter() {
            let outcomes = match self.on_stuck {
                // A failed attempt is never retried, so every other outcome
                // leads to a pruned state.
                StuckPolicy::Report => 1,
                StuckPolicy::ForceFail => outcome_vectors(combo)?,
            };
            for failed_mask in 0..outcomes {
                let child = state.advance(&combo.members, failed_mask);
                let Some(child_cost) = self.solve(&child)? else {
                    continue;
                };
                let cost = child_cost + 1;
                if best.as_ref().is_none_or(|(b, _, _)| cost < *b) {
                    let step = self.term_step(state.term, combo, failed_mask);
                    best = Some((cost, step, child));
                    if cost <= floor {
                        break 'combinations;
                    }
                }
            }
        }

        let solved = match best {
            Some((cost, step, child)) => Solved {
                cost: Some(cost),
                next: Some((step, child)),
            },
            None => self.stuck(state, &available)?,
        };

        let cost = solved.cost;
        self.memo.insert(state.clone(), solved);
        Ok(cost)
    }

    /// Every branch from `state` is unreachable although courses are
    /// available.
    fn stuck(&mut self, state: &SearchState, available: &[usize]) -> Result<Solved> {
        match self.on_stuck {
            StuckPolicy::Report => {
                trace!(term = state.term, "stuck state; reporting unreachable");
                Ok(Solved {
                    cost: None,
                    next: None,
                })
            }
            StuckPolicy::ForceFail => {
                let forced = available[0];
                warn!(
                    term = state.term,
                    course = %self.graph.id(forced),
                    "no productive combination; assuming a failed attempt"
                );
                let combo = Combination {
                    members: vec![forced],
                    credits: self.graph.credits(forced),
                };
                let child = state.advance(&combo.members, 1);
                let cost = self.solve(&child)?.map(|c| c + 1);
                let step = self.term_step(state.term, &combo, 1);
                Ok(Solved {
                    cost,
                    next: Some((step, child)),
                })
            }
        }
    }

    /// Fewest terms that could still approve every remaining course: the
    /// longest chain of remaining courses, or the remaining credits spread
    /// over full terms, whichever is larger.
    fn lower_bound(&self, state: &SearchState) -> u32 {
        let mut depth = vec![0u32; self.graph.len()];
        let mut longest = 0;
        let mut credits = 0u64;
        for &pos in self.order {
            if state.approved.contains(pos) || state.failed.contains(pos) {
                continue;
            }
            let d = 1 + self
                .graph
                .prerequisites_of(pos)
                .iter()
                .map(|&dep| depth[dep])
                .max()
                .unwrap_or(0);
            depth[pos] = d;
            longest = longest.max(d);
            credits += u64::from(self.graph.credits(pos));
        }
        let by_credits = credits.div_ceil(u64::from(self.credit_cap));
        longest.max(u32::try_from(by_credits).unwrap_or(u32::MAX))
    }

    /// Non-empty subsets of `available` within the credit cap, heaviest
    /// first. Cached per available set.
    fn combinations_for(&mut self, available: &[usize]) -> Result<Rc<Vec<Combination>>> {
        let key = CourseSet::from_positions(self.graph.len(), available.iter().copied());
        if let Some(cached) = self.combinations.get(&key) {
            return Ok(Rc::clone(cached));
        }

        let mut combos = Vec::new();
        let mut members = Vec::with_capacity(available.len());
        self.collect_combinations(available, 0, 0, &mut members, &mut combos)?;
        // Stable: equal weights keep enumeration order.
        combos.sort_by(|a, b| b.credits.cmp(&a.credits));

        trace!(
            available = available.len(),
            combinations = combos.len(),
            "enumerated combinations"
        );
        let combos = Rc::new(combos);
        self.combinations.insert(key, Rc::clone(&combos));
        Ok(combos)
    }

    /// Extend `members` with every course of `available[start..]` that still
    /// fits under the cap. Subsets over the cap are never visited, so the
    /// work is proportional to the number of combinations produced.
    fn collect_combinations(
        &mut self,
        available: &[usize],
        start: usize,
        credits: u32,
        members: &mut Vec<usize>,
        out: &mut Vec<Combination>,
    ) -> Result<()> {
        for (offset, &pos) in available[start..].iter().enumerate() {
            let total = match credits.checked_add(self.graph.credits(pos)) {
                Some(total) if total <= self.credit_cap => total,
                _ => continue,
            };
            self.budget.charge_combination()?;

            members.push(pos);
            out.push(Combination {
                members: members.clone(),
                credits: total,
            });
            self.collect_combinations(available, start + offset + 1, total, members, out)?;
            members.pop();
        }
        Ok(())
    }

    fn term_step(&self, term: u32, combo: &Combination, failed_mask: u64) -> TermStep {
        let courses = combo
            .members
            .iter()
            .enumerate()
            .map(|(i, &pos)| PlannedCourse {
                id: self.graph.id(pos).to_string(),
                credits: self.graph.credits(pos),
                outcome: if attempt_failed(failed_mask, i) {
                    AttemptOutcome::Failed
                } else {
                    AttemptOutcome::Approved
                },
            })
            .collect();
        TermStep {
            term,
            courses,
            credits: combo.credits,
        }
    }
}

/// Number of outcome vectors for `combo`.
fn outcome_vectors(combo: &Combination) -> Result<u64> {
    let width = combo.members.len();
    if width > MAX_COMBINATION_WIDTH {
        return Err(PlanError::CombinationOverflow {
            width,
            limit: MAX_COMBINATION_WIDTH,
        });
    }
    Ok(1u64 << width)
}
