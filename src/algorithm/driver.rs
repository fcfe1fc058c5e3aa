//! Growth driver: frontier selection, color assignment, frontier extension
//!
//! The driver owns every piece of run state — raster, frontier, palette,
//! field sources, and the single RNG — and advances one pixel per
//! iteration. Given a fixed seed, the finished raster is a deterministic
//! function of the dimensions and the configured policies.

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::config::{ColorPolicy, GrowthConfig, LocationPolicy, PreferencePolicy};
use crate::color::palette::Palette;
use crate::color::rgb::Color;
use crate::field::goal::GoalAttractor;
use crate::field::perlin::PerlinField;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::frontier::Frontier;
use crate::spatial::point::Point;
use crate::spatial::raster::Raster;

/// Offsets of the 8-connected neighborhood
const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Offsets of the four diagonal neighbors, in snaking candidate order
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Sequential growth driver that fills every pixel exactly once
pub struct GrowthDriver {
    config: GrowthConfig,
    raster: Raster,
    frontier: Frontier,
    palette: Palette,
    previous: Option<(i32, i32)>,
    goal: GoalAttractor,
    perlin: PerlinField,
    rng: StdRng,
}

impl GrowthDriver {
    /// Create a driver, enumerate the palette, and seed the frontier
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` when the configuration fails validation or
    /// the generated palette cannot cover the image area.
    pub fn new(config: GrowthConfig) -> Result<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        // The field source derives its seed from the driver RNG, so one
        // config seed fixes the whole raster.
        let perlin_seed = rng.random::<u32>();
        let perlin = PerlinField::new(perlin_seed, config.perlin_octaves, config.perlin_grid_size);

        let area = config.width * config.height;
        let palette = Palette::uniform(area);
        if palette.remaining() < area {
            return Err(invalid_parameter(
                "palette",
                &palette.remaining(),
                &format!("must hold at least {area} colors"),
            ));
        }

        let mut driver = Self {
            raster: Raster::new(config.width, config.height),
            frontier: Frontier::new(),
            palette,
            previous: None,
            goal: GoalAttractor::new(),
            perlin,
            rng,
            config,
        };
        driver.reset();
        Ok(driver)
    }

    /// Clear all growth state and seed a fresh frontier pixel
    ///
    /// The palette keeps whatever it has left; reset does not replenish it.
    pub fn reset(&mut self) {
        self.raster = Raster::new(self.config.width, self.config.height);
        self.frontier.clear();
        self.previous = None;
        self.goal.reset();
        let i = self.rng.random_range(0..self.config.width as i32);
        let j = self.rng.random_range(0..self.config.height as i32);
        self.frontier.insert(Point::new(i, j));
    }

    /// Run one growth step: place one pixel and extend the frontier
    ///
    /// Returns whether candidates remain. Calling this on an empty frontier
    /// is a contract violation; the run loop checks [`Self::frontier_len`]
    /// first.
    pub fn iterate(&mut self) -> bool {
        debug_assert!(!self.frontier.is_empty(), "iterate on an empty frontier");
        let loc = self.choose_location();
        let color = self.choose_color(loc);
        self.raster
            .fill(loc.0 as usize, loc.1 as usize, color.to_rgb8());
        self.extend_frontier(loc);
        // Sequential selection can name a pixel that never joined the
        // frontier; removal tolerates absence.
        self.frontier.remove(loc.0, loc.1);
        self.previous = Some(loc);
        !self.frontier.is_empty()
    }

    /// Iterate until the frontier is exhausted
    ///
    /// Terminates because every iteration fills exactly one unfilled pixel
    /// and the raster is finite.
    pub fn iterate_until_done(&mut self) {
        while self.iterate() {}
    }

    /// Raster width in pixels
    pub const fn width(&self) -> usize {
        self.config.width
    }

    /// Raster height in pixels
    pub const fn height(&self) -> usize {
        self.config.height
    }

    /// Color of a filled pixel; `None` while unfilled
    pub fn pixel(&self, i: usize, j: usize) -> Option<[u8; 3]> {
        self.raster.pixel(i, j)
    }

    /// Read access to the raster
    pub const fn raster(&self) -> &Raster {
        &self.raster
    }

    /// Number of pixels filled so far
    pub const fn filled_count(&self) -> usize {
        self.raster.filled_count()
    }

    /// Current frontier size; zero means the run is complete
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Colors the palette can still supply
    pub fn palette_remaining(&self) -> usize {
        self.palette.remaining()
    }

    /// Coordinates of the most recently filled pixel
    pub const fn last_filled(&self) -> Option<(i32, i32)> {
        self.previous
    }

    fn choose_location(&mut self) -> (i32, i32) {
        match self.config.location {
            LocationPolicy::Random => self.frontier.pop_random(&mut self.rng).coords(),
            LocationPolicy::Snaking => self.choose_snaking_location(),
            LocationPolicy::Sequential => self.choose_sequential_location(),
            LocationPolicy::Preferred => {
                self.choose_preferred_location(self.config.preferred_location_iterations)
            }
        }
    }

    /// Continue diagonally from the previous pixel when possible, otherwise
    /// fall back to a random frontier pop
    fn choose_snaking_location(&mut self) -> (i32, i32) {
        let mut free = Vec::with_capacity(DIAGONALS.len());
        if let Some((pi, pj)) = self.previous {
            for (di, dj) in DIAGONALS {
                let (ni, nj) = (pi + di, pj + dj);
                if self.raster.in_bounds(ni, nj) && !self.raster.is_filled(ni as usize, nj as usize)
                {
                    free.push((ni, nj));
                }
            }
        }
        if free.is_empty() {
            return self.frontier.pop_random(&mut self.rng).coords();
        }
        let choice = free.swap_remove(self.rng.random_range(0..free.len()));
        self.frontier.remove(choice.0, choice.1);
        choice
    }

    /// Raster-scan order; the frontier is bypassed entirely
    fn choose_sequential_location(&self) -> (i32, i32) {
        match self.previous {
            None => (0, 0),
            Some((i, j)) if i == self.config.width as i32 - 1 => (0, j + 1),
            Some((i, j)) => (i + 1, j),
        }
    }

    /// Keep the best-preference candidate among `samples` uniform draws
    ///
    /// Sampling is with replacement, so a small frontier may be probed
    /// repeatedly; the draw count is fixed regardless.
    fn choose_preferred_location(&mut self, samples: usize) -> (i32, i32) {
        debug_assert!(samples > 0, "preferred policy needs at least one sample");
        let mut best_index = self.rng.random_range(0..self.frontier.len());
        let mut best_preference = self
            .frontier
            .get(best_index)
            .map_or(f64::NEG_INFINITY, |point| point.preference);
        for _ in 1..samples {
            let index = self.rng.random_range(0..self.frontier.len());
            let preference = self
                .frontier
                .get(index)
                .map_or(f64::NEG_INFINITY, |point| point.preference);
            if preference > best_preference {
                best_preference = preference;
                best_index = index;
            }
        }
        self.frontier.pop_at(best_index).coords()
    }

    fn choose_color(&mut self, loc: (i32, i32)) -> Color {
        match self.config.color {
            ColorPolicy::Nearest => self.choose_nearest_color(loc),
            ColorPolicy::Sequential => self.palette.pop_back(),
            ColorPolicy::Perlin => self.choose_perlin_color(loc),
        }
    }

    /// Pop the palette color nearest the mean of the filled neighbors
    fn choose_nearest_color(&mut self, loc: (i32, i32)) -> Color {
        match self.mean_neighbor_color(loc) {
            Some(mean) => self.palette.pop_closest(&mean, self.config.epsilon),
            // The seed pixel has no filled neighbor to match.
            None => self.palette.pop_random(&mut self.rng),
        }
    }

    /// Plain arithmetic mean over filled 8-neighbors; `None` when no
    /// neighbor is filled
    fn mean_neighbor_color(&self, loc: (i32, i32)) -> Option<Color> {
        let mut sum = [0.0_f64; 3];
        let mut count = 0_u32;
        for (di, dj) in NEIGHBORS {
            let (ni, nj) = (loc.0 + di, loc.1 + dj);
            if !self.raster.in_bounds(ni, nj) {
                continue;
            }
            if let Some(rgb) = self.raster.pixel(ni as usize, nj as usize) {
                sum[0] += f64::from(rgb[0]);
                sum[1] += f64::from(rgb[1]);
                sum[2] += f64::from(rgb[2]);
                count += 1;
            }
        }
        (count > 0).then(|| {
            let n = f64::from(count);
            Color::new(sum[0] / n, sum[1] / n, sum[2] / n)
        })
    }

    /// Grayscale from the noise field; the palette is left untouched
    fn choose_perlin_color(&self, loc: (i32, i32)) -> Color {
        let value = 255.0 * (self.perlin.sample(loc.0, loc.1) + 1.0) / 2.0;
        Color::new(value, value, value)
    }

    /// Promote every in-bounds, unfilled, non-member 8-neighbor of `loc`
    /// onto the frontier, scoring each as it joins
    fn extend_frontier(&mut self, loc: (i32, i32)) {
        for (di, dj) in NEIGHBORS {
            let (ni, nj) = (loc.0 + di, loc.1 + dj);
            if self.raster.in_bounds(ni, nj)
                && !self.raster.is_filled(ni as usize, nj as usize)
                && !self.frontier.contains(ni, nj)
            {
                let preference = self.score_preference(ni, nj);
                self.frontier.insert(Point {
                    i: ni,
                    j: nj,
                    preference,
                });
            }
        }
    }

    fn score_preference(&mut self, i: i32, j: i32) -> f64 {
        match self.config.preference {
            PreferencePolicy::Location => {
                self.goal.preference(i, j, &self.raster, &mut self.rng)
            }
            PreferencePolicy::Perlin => self.perlin.sample(i, j),
        }
    }
}
