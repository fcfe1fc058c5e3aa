//! Runtime configuration defaults

/// Default seed; zero tells the CLI to derive one from the wall clock
pub const DEFAULT_SEED: u64 = 0;

/// Default output width in pixels
pub const DEFAULT_WIDTH: usize = 256;

/// Default output height in pixels
pub const DEFAULT_HEIGHT: usize = 256;

/// Default octave count for the Perlin field
pub const DEFAULT_PERLIN_OCTAVES: usize = 6;

/// Default feature size of the Perlin field in pixels
pub const DEFAULT_PERLIN_GRID_SIZE: f64 = 64.0;

/// Default sample count for the preferred-location policy
pub const DEFAULT_PREFERRED_LOCATION_ITERATIONS: usize = 10;

/// Default closest-color tolerance
pub const DEFAULT_EPSILON: f64 = 0.0;

/// Iterations between progress display refreshes
pub const PROGRESS_UPDATE_INTERVAL: usize = 4096;

/// Default output path for the generated image
pub const DEFAULT_OUTPUT: &str = "growth.png";
