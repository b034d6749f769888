// src/graph/course_set.rs

//! Set of courses as a bit pattern over [`CourseIndex`](super::CourseIndex)
//! positions.

use fixedbitset::FixedBitSet;

/// Fixed-capacity set of course positions.
///
/// The capacity is the catalog size; inserting a position outside it is a
/// programming error and panics (as `FixedBitSet::insert` does).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CourseSet {
    bits: FixedBitSet,
}

impl CourseSet {
    pub fn empty(capacity: usize) -> Self {
        Self {
            bits: FixedBitSet::with_capacity(capacity),
        }
    }

    pub fn from_positions(capacity: usize, positions: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::empty(capacity);
        for pos in positions {
            set.insert(pos);
        }
        set
    }

    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    pub fn insert(&mut self, pos: usize) {
        self.bits.insert(pos);
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.bits.contains(pos)
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `true` when every position in the catalog is a member.
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }
}
