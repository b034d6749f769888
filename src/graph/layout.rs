// src/graph/layout.rs

//! Grid placement of courses for graph views.
//!
//! Columns follow each course's origin term; inside a column, courses that
//! unlock more dependents sit higher up (ties broken by id). This is a
//! presentation heuristic only and never feeds back into planning.

use std::collections::BTreeMap;

use crate::graph::critical_path::CriticalPath;
use crate::graph::index::CourseId;
use crate::graph::model::CourseGraph;
use crate::types::CourseStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutNode {
    pub id: CourseId,
    pub name: String,
    pub column: u32,
    pub row: usize,
    pub status: CourseStatus,
    pub dependents: usize,
    pub on_critical_path: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEdge {
    /// The prerequisite.
    pub from: CourseId,
    pub to: CourseId,
    pub on_critical_path: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
}

pub fn layout(graph: &CourseGraph, critical: &CriticalPath) -> Layout {
    let mut columns: BTreeMap<u32, Vec<(usize, usize)>> = BTreeMap::new();
    for pos in 0..graph.len() {
        let dependents = graph.dependents_of(pos).len();
        columns
            .entry(graph.course(pos).origin_term)
            .or_default()
            .push((pos, dependents));
    }

    let mut nodes = Vec::with_capacity(graph.len());
    for (column, mut members) in columns {
        members.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| graph.id(a.0).cmp(graph.id(b.0))));
        for (row, (pos, dependents)) in members.into_iter().enumerate() {
            let course = graph.course(pos);
            nodes.push(LayoutNode {
                id: course.id.clone(),
                name: course.name.clone(),
                column,
                row,
                status: course.status,
                dependents,
                on_critical_path: critical.contains(&course.id),
            });
        }
    }

    let mut edges = Vec::new();
    for pos in 0..graph.len() {
        for &dep in graph.prerequisites_of(pos) {
            let from = graph.id(dep);
            let to = graph.id(pos);
            edges.push(LayoutEdge {
                from: from.to_string(),
                to: to.to_string(),
                on_critical_path: critical.has_step(from, to),
            });
        }
    }

    Layout { nodes, edges }
}
