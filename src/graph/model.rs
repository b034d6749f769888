// src/graph/model.rs

use std::collections::HashSet;
use std::fmt;

use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::{debug, warn};

use crate::errors::{PlanError, Result};
use crate::graph::course_set::CourseSet;
use crate::graph::index::{CourseId, CourseIndex, MAX_CATALOG_SIZE};
use crate::types::CourseStatus;

/// A single catalog course plus its current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    /// Credit weight; always positive for courses that made it into a graph.
    pub credits: u32,
    /// Term the catalog places the course in. Informational only.
    pub origin_term: u32,
    /// Direct prerequisites, in catalog order.
    pub prerequisites: Vec<CourseId>,
    pub status: CourseStatus,
}

/// Why a catalog entry was left out of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyId,
    MissingPrerequisiteList,
    MissingCredits,
    ZeroCredits,
    DuplicateId,
    SelfReference,
    UnknownPrerequisite(CourseId),
    /// A prerequisite exists in the catalog but was itself rejected.
    RejectedPrerequisite(CourseId),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::EmptyId => f.write_str("empty course id"),
            RejectReason::MissingPrerequisiteList => f.write_str("missing `prerequisites` list"),
            RejectReason::MissingCredits => f.write_str("missing `credits`"),
            RejectReason::ZeroCredits => f.write_str("credits must be >= 1"),
            RejectReason::DuplicateId => f.write_str("duplicate course id"),
            RejectReason::SelfReference => f.write_str("course lists itself as a prerequisite"),
            RejectReason::UnknownPrerequisite(dep) => write!(f, "unknown prerequisite '{dep}'"),
            RejectReason::RejectedPrerequisite(dep) => {
                write!(f, "prerequisite '{dep}' was rejected")
            }
        }
    }
}

/// A catalog entry that did not make it into the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedCourse {
    pub id: CourseId,
    pub reason: RejectReason,
}

/// Split courses into those that are structurally sound and those that are
/// not.
///
/// Dropping a course also drops every course that (transitively) requires
/// it, so the accepted list is always closed under prerequisites. The first
/// occurrence of a duplicated id wins.
pub fn screen_courses(courses: Vec<Course>) -> (Vec<Course>, Vec<RejectedCourse>) {
    let mut rejected = Vec::new();
    let mut seen: HashSet<CourseId> = HashSet::new();
    let mut candidates = Vec::with_capacity(courses.len());

    for course in courses {
        let reason = if course.id.trim().is_empty() {
            Some(RejectReason::EmptyId)
        } else if course.credits == 0 {
            Some(RejectReason::ZeroCredits)
        } else if seen.contains(&course.id) {
            Some(RejectReason::DuplicateId)
        } else if course.prerequisites.iter().any(|p| p == &course.id) {
            Some(RejectReason::SelfReference)
        } else {
            None
        };

        match reason {
            Some(reason) => rejected.push(RejectedCourse {
                id: course.id,
                reason,
            }),
            None => {
                seen.insert(course.id.clone());
                candidates.push(course);
            }
        }
    }

    let rejected_ids: HashSet<CourseId> = rejected
        .iter()
        .filter(|r| !seen.contains(&r.id))
        .map(|r| r.id.clone())
        .collect();

    // Drop courses with unresolvable prerequisites until nothing changes.
    let mut dropped: HashSet<CourseId> = HashSet::new();
    loop {
        let mut changed = false;
        for course in candidates.iter() {
            if dropped.contains(&course.id) {
                continue;
            }
            let bad_dep = course.prerequisites.iter().find_map(|dep| {
                if dropped.contains(dep) || rejected_ids.contains(dep) {
                    Some(RejectReason::RejectedPrerequisite(dep.clone()))
                } else if !seen.contains(dep) {
                    Some(RejectReason::UnknownPrerequisite(dep.clone()))
                } else {
                    None
                }
            });
            if let Some(reason) = bad_dep {
                dropped.insert(course.id.clone());
                rejected.push(RejectedCourse {
                    id: course.id.clone(),
                    reason,
                });
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    let accepted = candidates
        .into_iter()
        .filter(|c| !dropped.contains(&c.id))
        .collect();

    (accepted, rejected)
}

/// Prerequisite graph over a course catalog.
///
/// Node `i` of the underlying petgraph graph is the course at position `i`
/// of the [`CourseIndex`]. Edges run from a prerequisite to the course that
/// requires it.
#[derive(Debug, Clone)]
pub struct CourseGraph {
    index: CourseIndex,
    courses: Vec<Course>,
    prereqs: Vec<Vec<usize>>,
    dag: DiGraph<usize, ()>,
}

impl CourseGraph {
    /// Build a graph from a course list.
    ///
    /// Structurally invalid entries are dropped with a warning rather than
    /// failing the build (see [`screen_courses`]). Acyclicity is *not*
    /// checked here; that is the job of [`topo`](crate::graph::topo).
    pub fn new(courses: Vec<Course>) -> Result<Self> {
        let (accepted, rejected) = screen_courses(courses);
        for r in &rejected {
            warn!(course = %r.id, reason = %r.reason, "dropping catalog entry");
        }

        if accepted.len() > MAX_CATALOG_SIZE {
            return Err(PlanError::CatalogTooLarge {
                courses: accepted.len(),
                limit: MAX_CATALOG_SIZE,
            });
        }

        let mut index = CourseIndex::new();
        let mut dag = DiGraph::with_capacity(accepted.len(), accepted.len());
        for course in &accepted {
            let pos = index.insert(&course.id);
            dag.add_node(pos);
        }

        let mut prereqs = Vec::with_capacity(accepted.len());
        for (pos, course) in accepted.iter().enumerate() {
            let mut deps = Vec::with_capacity(course.prerequisites.len());
            for dep in &course.prerequisites {
                // screen_courses guarantees every prerequisite is indexed.
                if let Some(dep_pos) = index.position(dep) {
                    if !deps.contains(&dep_pos) {
                        deps.push(dep_pos);
                        dag.add_edge(NodeIndex::new(dep_pos), NodeIndex::new(pos), ());
                    }
                }
            }
            prereqs.push(deps);
        }

        debug!(
            courses = accepted.len(),
            edges = dag.edge_count(),
            dropped = rejected.len(),
            "built course graph"
        );

        Ok(Self {
            index,
            courses: accepted,
            prereqs,
            dag,
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn index(&self) -> &CourseIndex {
        &self.index
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.position(id)
    }

    pub fn id(&self, pos: usize) -> &str {
        self.index.id(pos)
    }

    pub fn course(&self, pos: usize) -> &Course {
        &self.courses[pos]
    }

    pub fn course_by_id(&self, id: &str) -> Option<&Course> {
        self.position(id).map(|pos| &self.courses[pos])
    }

    /// All courses in position order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn credits(&self, pos: usize) -> u32 {
        self.courses[pos].credits
    }

    /// Direct prerequisites of the course at `pos`, in catalog order.
    pub fn prerequisites_of(&self, pos: usize) -> &[usize] {
        &self.prereqs[pos]
    }

    /// Direct dependents of the course at `pos`, in ascending position order.
    pub fn dependents_of(&self, pos: usize) -> Vec<usize> {
        let mut out: Vec<usize> = self
            .dag
            .neighbors_directed(NodeIndex::new(pos), Direction::Outgoing)
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }

    /// Number of direct prerequisites of the course at `pos`.
    pub fn in_degree(&self, pos: usize) -> usize {
        self.prereqs[pos].len()
    }

    pub(crate) fn set_status(&mut self, pos: usize, status: CourseStatus) {
        self.courses[pos].status = status;
    }

    /// Positions of courses with the given status.
    pub fn status_set(&self, status: CourseStatus) -> CourseSet {
        CourseSet::from_positions(
            self.len(),
            self.courses
                .iter()
                .enumerate()
                .filter(|(_, c)| c.status == status)
                .map(|(pos, _)| pos),
        )
    }
}
