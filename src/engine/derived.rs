// src/engine/derived.rs

//! Structural results derived from a course graph.

use crate::errors::Result;
use crate::graph::{CourseGraph, CriticalPath, compute_critical_path, topological_order};

/// Topological order plus critical path for one graph snapshot.
///
/// Computed from scratch by [`Derived::compute`] and never patched in place.
#[derive(Debug, Clone)]
pub struct Derived {
    pub order: Vec<usize>,
    pub critical_path: CriticalPath,
}

impl Derived {
    /// Validate `graph` and compute its derived state. Fails on cycles.
    pub fn compute(graph: &CourseGraph) -> Result<Self> {
        let order = topological_order(graph)?;
        let critical_path = compute_critical_path(graph);
        Ok(Self {
            order,
            critical_path,
        })
    }
}
