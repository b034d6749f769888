// src/graph/index.rs

//! Dense course id <-> position mapping.

use std::collections::HashMap;

/// Largest catalog the engine accepts.
///
/// Course sets are fixed-capacity bitsets sized to the catalog, so this is
/// not a storage limit; it keeps the exponential schedule search honest
/// about the catalog sizes it can realistically handle.
pub const MAX_CATALOG_SIZE: usize = 256;

/// Canonical course identifier type used throughout the crate.
pub type CourseId = String;

/// Bijection between course identifiers and positions in `[0, len)`.
///
/// Positions are assigned in insertion order and never change for the
/// lifetime of the index.
#[derive(Debug, Clone, Default)]
pub struct CourseIndex {
    ids: Vec<CourseId>,
    positions: HashMap<CourseId, usize>,
}

impl CourseIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an id, returning its position. Re-registering an existing
    /// id returns the position it already has.
    pub fn insert(&mut self, id: &str) -> usize {
        if let Some(&pos) = self.positions.get(id) {
            return pos;
        }
        let pos = self.ids.len();
        self.ids.push(id.to_string());
        self.positions.insert(id.to_string(), pos);
        pos
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    pub fn id(&self, pos: usize) -> &str {
        &self.ids[pos]
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in position order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(|s| s.as_str())
    }
}
