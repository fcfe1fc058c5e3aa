//! Candidate set with O(1) membership, random pop, and targeted removal

use std::collections::HashMap;

use rand::Rng;
use rand::rngs::StdRng;

use crate::spatial::point::Point;

/// Bag of candidate pixels with indexed-vector storage
///
/// The vector gives uniform random selection by index; the coordinate map
/// gives duplicate rejection and targeted removal. `swap_remove` plus a
/// moved-slot fixup keeps every operation O(1). Insertion order is not
/// observable: only random selection, indexed removal, and targeted removal
/// are exposed.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    points: Vec<Point>,
    slots: HashMap<(i32, i32), usize>,
}

impl Frontier {
    /// Create an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of candidates
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no candidates remain; growth terminates on an empty frontier
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether a coordinate is already a candidate
    pub fn contains(&self, i: i32, j: i32) -> bool {
        self.slots.contains_key(&(i, j))
    }

    /// Add a candidate; keeps the existing entry when already present
    pub fn insert(&mut self, point: Point) {
        if self.slots.contains_key(&point.coords()) {
            return;
        }
        self.slots.insert(point.coords(), self.points.len());
        self.points.push(point);
    }

    /// Remove a specific candidate, reporting whether it was present
    pub fn remove(&mut self, i: i32, j: i32) -> bool {
        if let Some(index) = self.slots.get(&(i, j)).copied() {
            self.detach(index);
            true
        } else {
            false
        }
    }

    /// Remove and return a uniformly random candidate
    ///
    /// # Panics
    ///
    /// Panics if the frontier is empty.
    pub fn pop_random(&mut self, rng: &mut StdRng) -> Point {
        let index = rng.random_range(0..self.points.len());
        self.detach(index)
    }

    /// Remove and return the candidate at a vector index
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn pop_at(&mut self, index: usize) -> Point {
        self.detach(index)
    }

    /// Candidate at a vector index, for sampling without removal
    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    /// Drop every candidate
    pub fn clear(&mut self) {
        self.points.clear();
        self.slots.clear();
    }

    fn detach(&mut self, index: usize) -> Point {
        let point = self.points.swap_remove(index);
        self.slots.remove(&point.coords());
        if let Some(moved) = self.points.get(index) {
            self.slots.insert(moved.coords(), index);
        }
        point
    }
}
