//! Index set with O(1) uniform sampling
//!
//! A `HashSet` answers membership, a parallel `Vec` holds the same indices
//! so a random element can be picked by position. Both always contain
//! exactly the same values.

use std::collections::HashSet;

use rand::Rng;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RandSet {
    set: HashSet<usize>,
    list: Vec<usize>,
}

impl RandSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `index` if absent. Returns whether it was newly added.
    pub fn add(&mut self, index: usize) -> bool {
        if self.set.insert(index) {
            self.list.push(index);
            true
        } else {
            false
        }
    }

    pub fn has(&self, index: usize) -> bool {
        self.set.contains(&index)
    }

    /// Uniformly random member, `None` when empty
    pub fn get_random<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.list.is_empty() {
            return None;
        }
        let pos = rng.random_range(0..self.list.len());
        Some(self.list[pos])
    }

    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn clear(&mut self) {
        self.set.clear();
        self.list.clear();
    }

    /// Snapshot of the members in insertion order
    pub fn values(&self) -> Vec<usize> {
        self.list.clone()
    }
}
