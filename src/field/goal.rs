//! Wandering goal point for location-based preference

use rand::Rng;
use rand::rngs::StdRng;

use crate::spatial::raster::Raster;

/// Attractor that pulls frontier preference toward a moving target
///
/// The goal stays put until the growth covers it, then respawns at a fresh
/// uniformly random pixel.
#[derive(Debug, Clone, Default)]
pub struct GoalAttractor {
    goal: Option<(i32, i32)>,
}

impl GoalAttractor {
    /// Create an attractor with no goal yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the goal so the next query resamples it
    pub fn reset(&mut self) {
        self.goal = None;
    }

    /// Preference for a candidate: negated squared distance to the goal
    ///
    /// Resamples the goal when none is set or the current one has been
    /// overgrown.
    pub fn preference(&mut self, i: i32, j: i32, raster: &Raster, rng: &mut StdRng) -> f64 {
        let stale = self
            .goal
            .is_none_or(|(gi, gj)| raster.is_filled(gi as usize, gj as usize));
        if stale {
            self.goal = Some((
                rng.random_range(0..raster.width() as i32),
                rng.random_range(0..raster.height() as i32),
            ));
        }
        let (gi, gj) = self.goal.unwrap_or((0, 0));
        let di = f64::from(i - gi);
        let dj = f64::from(j - gj);
        -di.mul_add(di, dj * dj)
    }
}
