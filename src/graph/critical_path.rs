// src/graph/critical_path.rs

//! Longest weighted prerequisite chain.
//!
//! Advancing from a course `u` to a dependent `v` costs one term slot plus a
//! workload factor of `credits(u) / 4`. Course status plays no part, so the
//! result only changes when the graph structure does.

use std::collections::VecDeque;

use crate::graph::index::CourseId;
use crate::graph::model::CourseGraph;

/// Credits per unit of workload in the edge weight.
pub const CREDITS_PER_WORKLOAD_UNIT: f64 = 4.0;

/// The longest weighted chain through the graph, sources first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CriticalPath {
    pub courses: Vec<CourseId>,
    /// Accumulated distance at the last course of the chain.
    pub length: f64,
}

impl CriticalPath {
    pub fn contains(&self, id: &str) -> bool {
        self.courses.iter().any(|c| c == id)
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// `true` if `from -> to` is a consecutive step of the path.
    pub fn has_step(&self, from: &str, to: &str) -> bool {
        self.courses
            .windows(2)
            .any(|w| w[0] == from && w[1] == to)
    }
}

/// Kahn's algorithm with longest-distance relaxation.
///
/// Sources are queued in position order and a predecessor is only replaced
/// on a strict improvement, so ties resolve to the course processed first.
/// The chain ends at the first processed course with the maximum distance.
pub fn compute_critical_path(graph: &CourseGraph) -> CriticalPath {
    let n = graph.len();
    if n == 0 {
        return CriticalPath::default();
    }

    let mut in_degree: Vec<usize> = (0..n).map(|p| graph.in_degree(p)).collect();
    let mut distance = vec![0.0_f64; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue: VecDeque<usize> = (0..n).filter(|&p| in_degree[p] == 0).collect();
    let mut processed = Vec::with_capacity(n);

    while let Some(u) = queue.pop_front() {
        processed.push(u);
        let step = 1.0 + f64::from(graph.credits(u)) / CREDITS_PER_WORKLOAD_UNIT;

        for v in graph.dependents_of(u) {
            let candidate = distance[u] + step;
            if candidate > distance[v] {
                distance[v] = candidate;
                predecessor[v] = Some(u);
            }
            in_degree[v] -= 1;
            if in_degree[v] == 0 {
                queue.push_back(v);
            }
        }
    }

    let Some(&first) = processed.first() else {
        return CriticalPath::default();
    };
    let mut end = first;
    for &p in &processed {
        if distance[p] > distance[end] {
            end = p;
        }
    }

    let mut chain = vec![end];
    let mut cursor = end;
    while let Some(prev) = predecessor[cursor] {
        chain.push(prev);
        cursor = prev;
    }
    chain.reverse();

    CriticalPath {
        courses: chain.into_iter().map(|p| graph.id(p).to_string()).collect(),
        length: distance[end],
    }
}
