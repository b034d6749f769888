// src/graph/mod.rs

//! Prerequisite graph and the structural computations over it.
//!
//! - [`index`] maps course ids to dense positions.
//! - [`course_set`] represents sets of courses as bit patterns.
//! - [`model`] holds courses and prerequisite adjacency.
//! - [`topo`] validates acyclicity and produces a topological order.
//! - [`critical_path`] computes the longest weighted prerequisite chain.
//! - [`layout`] places courses on a grid for graph views.

pub mod course_set;
pub mod critical_path;
pub mod index;
pub mod layout;
pub mod model;
pub mod topo;

pub use course_set::CourseSet;
pub use critical_path::{CriticalPath, compute_critical_path};
pub use index::{CourseId, CourseIndex, MAX_CATALOG_SIZE};
pub use layout::{Layout, LayoutEdge, LayoutNode};
pub use model::{Course, CourseGraph, RejectReason, RejectedCourse, screen_courses};
pub use topo::{compute_order, topological_order};
