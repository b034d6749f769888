// src/graph/topo.rs

//! Topological validation of the prerequisite graph.
//!
//! Depth-first search over prerequisite edges with three-colour marking.
//! A back-edge into an in-progress course closes a cycle; the cycle is read
//! off the DFS path, the in-progress path is abandoned, and the scan carries
//! on from the next unvisited course so that every independent cycle is
//! reported in one go.

use tracing::{debug, warn};

use crate::errors::{PlanError, Result};
use crate::graph::model::CourseGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Finished,
}

/// Compute a topological order of course positions: every course appears
/// after all of its prerequisites.
///
/// Fails with [`PlanError::CycleDetected`] carrying one id sequence per
/// cycle found. Each sequence is listed prerequisite-first, so
/// `cycle[i]` is a prerequisite of `cycle[i + 1]` and the last course is a
/// prerequisite of the first.
pub fn topological_order(graph: &CourseGraph) -> Result<Vec<usize>> {
    let n = graph.len();
    let mut marks = vec![Mark::Unvisited; n];
    let mut order = Vec::with_capacity(n);
    let mut cycles: Vec<Vec<usize>> = Vec::new();
    // (course, index of the next prerequisite to explore)
    let mut path: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if marks[root] != Mark::Unvisited {
            continue;
        }
        marks[root] = Mark::InProgress;
        path.push((root, 0));

        while let Some(&(node, next)) = path.last() {
            let prereqs = graph.prerequisites_of(node);
            if next >= prereqs.len() {
                marks[node] = Mark::Finished;
                order.push(node);
                path.pop();
                continue;
            }

            let top = path.len() - 1;
            path[top].1 += 1;
            let dep = prereqs[next];

            match marks[dep] {
                Mark::Unvisited => {
                    marks[dep] = Mark::InProgress;
                    path.push((dep, 0));
                }
                Mark::InProgress => {
                    let start = path.iter().position(|&(p, _)| p == dep).unwrap_or(0);
                    let mut cycle: Vec<usize> = path[start..].iter().map(|&(p, _)| p).collect();
                    cycle.reverse();
                    warn!(
                        cycle = ?cycle.iter().map(|&p| graph.id(p)).collect::<Vec<_>>(),
                        "prerequisite cycle detected"
                    );
                    cycles.push(cycle);

                    for &(p, _) in &path {
                        marks[p] = Mark::Finished;
                    }
                    path.clear();
                }
                Mark::Finished => {}
            }
        }
    }

    if !cycles.is_empty() {
        let cycles = cycles
            .into_iter()
            .map(|c| c.into_iter().map(|p| graph.id(p).to_string()).collect())
            .collect();
        return Err(PlanError::CycleDetected { cycles });
    }

    debug!(courses = n, "topological order computed");
    Ok(order)
}

/// Same as [`topological_order`], returning course ids.
pub fn compute_order(graph: &CourseGraph) -> Result<Vec<String>> {
    let order = topological_order(graph)?;
    Ok(order.into_iter().map(|p| graph.id(p).to_string()).collect())
}
