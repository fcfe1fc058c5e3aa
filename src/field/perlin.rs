//! Smooth noise field over pixel coordinates

use noise::{Fbm, MultiFractal, NoiseFn, Perlin};

/// Perlin fractal noise sampled on the pixel lattice
///
/// Deterministic for a given seed. `grid_size` pixels correspond to one
/// noise-space unit, so larger values produce broader features.
#[derive(Debug, Clone)]
pub struct PerlinField {
    noise: Fbm<Perlin>,
    grid_size: f64,
}

impl PerlinField {
    /// Create a field with the given octave count and feature size
    pub fn new(seed: u32, octaves: usize, grid_size: f64) -> Self {
        Self {
            noise: Fbm::<Perlin>::new(seed).set_octaves(octaves),
            grid_size,
        }
    }

    /// Field value at a pixel, clamped to `[-1, 1]`
    pub fn sample(&self, i: i32, j: i32) -> f64 {
        let x = f64::from(i) / self.grid_size;
        let y = f64::from(j) / self.grid_size;
        self.noise.get([x, y]).clamp(-1.0, 1.0)
    }
}
