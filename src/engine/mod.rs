// src/engine/mod.rs

//! The scheduling engine.
//!
//! [`Engine`] owns the course graph and the structural state derived from
//! it. It performs no IO; loading catalogs and persisting statuses happen
//! in [`config`](crate::config) and [`status_store`](crate::status_store).
//!
//! Every mutating operation either succeeds completely or leaves the engine
//! exactly as it was.

pub mod derived;

use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::errors::{PlanError, Result};
use crate::graph::layout::{Layout, layout};
use crate::graph::{Course, CourseGraph, CourseId, CourseSet, CriticalPath};
use crate::planner::{PlannerOptions, ScheduleResult, Search, SearchState};
use crate::types::CourseStatus;

pub use derived::Derived;

/// Course statuses keyed by course id.
pub type StatusMap = BTreeMap<CourseId, CourseStatus>;

#[derive(Debug, Clone)]
pub struct Engine {
    graph: CourseGraph,
    derived: Derived,
    /// Bumped on every applied status change.
    revision: u64,
}

impl Engine {
    /// Build an engine from a course list.
    ///
    /// Structurally invalid entries are dropped with a warning; a
    /// prerequisite cycle fails the build with
    /// [`PlanError::CycleDetected`].
    pub fn build(courses: Vec<Course>) -> Result<Self> {
        let graph = CourseGraph::new(courses)?;
        let derived = Derived::compute(&graph)?;
        info!(
            courses = graph.len(),
            critical_path_len = derived.critical_path.len(),
            "engine built"
        );
        Ok(Self {
            graph,
            derived,
            revision: 0,
        })
    }

    pub fn graph(&self) -> &CourseGraph {
        &self.graph
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn courses(&self) -> Vec<Course> {
        self.graph.courses().to_vec()
    }

    pub fn course(&self, id: &str) -> Option<Course> {
        self.graph.course_by_id(id).cloned()
    }

    pub fn status_of(&self, id: &str) -> Option<CourseStatus> {
        self.graph.course_by_id(id).map(|c| c.status)
    }

    pub fn critical_path(&self) -> CriticalPath {
        self.derived.critical_path.clone()
    }

    /// Course ids, every course after all of its prerequisites.
    pub fn topological_order(&self) -> Vec<CourseId> {
        self.derived
            .order
            .iter()
            .map(|&p| self.graph.id(p).to_string())
            .collect()
    }

    /// Courses that can be attempted now: not taken yet, with every
    /// prerequisite approved.
    pub fn available_courses(&self) -> Vec<CourseId> {
        self.derived
            .order
            .iter()
            .copied()
            .filter(|&pos| {
                self.graph.course(pos).status == CourseStatus::NotTaken
                    && self
                        .graph
                        .prerequisites_of(pos)
                        .iter()
                        .all(|&dep| self.graph.course(dep).status == CourseStatus::Approved)
            })
            .map(|pos| self.graph.id(pos).to_string())
            .collect()
    }

    /// Change a course's status.
    ///
    /// Approving a course requires every direct prerequisite to be approved.
    /// Setting the status a course already has is a no-op.
    pub fn set_status(&mut self, id: &str, status: CourseStatus) -> Result<()> {
        let pos = self
            .graph
            .position(id)
            .ok_or_else(|| PlanError::CourseNotFound(id.to_string()))?;

        let current = self.graph.course(pos).status;
        if current == status {
            debug!(course = %id, %status, "status unchanged; nothing to do");
            return Ok(());
        }

        if status == CourseStatus::Approved {
            let missing: Vec<String> = self
                .graph
                .prerequisites_of(pos)
                .iter()
                .filter(|&&dep| self.graph.course(dep).status != CourseStatus::Approved)
                .map(|&dep| self.graph.id(dep).to_string())
                .collect();
            if !missing.is_empty() {
                return Err(PlanError::MissingPrerequisites {
                    course: id.to_string(),
                    missing,
                });
            }
        }

        let mut graph = self.graph.clone();
        graph.set_status(pos, status);
        let derived = Derived::compute(&graph)?;

        self.graph = graph;
        self.derived = derived;
        self.revision += 1;

        info!(course = %id, from = %current, to = %status, "course status changed");
        Ok(())
    }

    /// Current status of every course.
    pub fn status_map(&self) -> StatusMap {
        self.graph
            .courses()
            .iter()
            .map(|c| (c.id.clone(), c.status))
            .collect()
    }

    /// Apply a batch of statuses.
    ///
    /// Entries are applied in topological order, so a course and its
    /// prerequisites can be approved in the same batch. Either every entry
    /// applies or none does.
    pub fn apply_status_map(&mut self, statuses: &StatusMap) -> Result<()> {
        if let Some(unknown) = statuses.keys().find(|id| self.graph.position(id).is_none()) {
            return Err(PlanError::CourseNotFound(unknown.clone()));
        }

        let mut staged = self.clone();
        for id in self.topological_order() {
            if let Some(&status) = statuses.get(&id) {
                staged.set_status(&id, status)?;
            }
        }

        *self = staged;
        Ok(())
    }

    /// Minimum-term plan approving every remaining course with at most
    /// `credit_cap` credits per term.
    pub fn optimal_schedule(&self, credit_cap: u32) -> Result<ScheduleResult> {
        self.optimal_schedule_with(&PlannerOptions::with_credit_cap(credit_cap))
    }

    /// Like [`optimal_schedule`](Self::optimal_schedule) with explicit
    /// planner options.
    ///
    /// The search starts from the current approved and failed sets. With
    /// `retake_failed`, failed courses start out as not taken instead.
    pub fn optimal_schedule_with(&self, options: &PlannerOptions) -> Result<ScheduleResult> {
        let failed = if options.retake_failed {
            CourseSet::empty(self.graph.len())
        } else {
            self.graph.status_set(CourseStatus::Failed)
        };
        let root = SearchState {
            approved: self.graph.status_set(CourseStatus::Approved),
            failed,
            term: options.first_term,
        };
        debug!(
            credit_cap = options.credit_cap,
            retake_failed = options.retake_failed,
            approved = root.approved.len(),
            failed = root.failed.len(),
            remaining = self.graph.len() - root.approved.len(),
            "starting schedule search"
        );
        Search::new(&self.graph, &self.derived.order, options).run(root)
    }

    /// Grid placement of the courses for graph views.
    pub fn layout(&self) -> Layout {
        layout(&self.graph, &self.derived.critical_path)
    }
}
