//! Frontier candidate points

use std::hash::{Hash, Hasher};

/// Candidate pixel with a selection preference
///
/// Identity is the coordinate pair alone; the preference participates in
/// neither equality nor hashing, so re-inserting a scored point cannot
/// duplicate it.
#[derive(Debug, Clone, Copy)]
pub struct Point {
    /// Column index
    pub i: i32,
    /// Row index
    pub j: i32,
    /// Score consulted by the preferred-location policy
    pub preference: f64,
}

impl Point {
    /// Create a point with a neutral preference
    pub const fn new(i: i32, j: i32) -> Self {
        Self {
            i,
            j,
            preference: 0.0,
        }
    }

    /// Coordinate pair
    pub const fn coords(&self) -> (i32, i32) {
        (self.i, self.j)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.i == other.i && self.j == other.j
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.i.hash(state);
        self.j.hash(state);
    }
}
