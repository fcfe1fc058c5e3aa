//! Command-line interface for generating growth images

use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, ValueEnum};

use crate::algorithm::config::{ColorPolicy, GrowthConfig, LocationPolicy, PreferencePolicy};
use crate::algorithm::driver::GrowthDriver;
use crate::io::configuration::{
    DEFAULT_EPSILON, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_PERLIN_GRID_SIZE,
    DEFAULT_PERLIN_OCTAVES, DEFAULT_PREFERRED_LOCATION_ITERATIONS, DEFAULT_SEED, DEFAULT_WIDTH,
    PROGRESS_UPDATE_INTERVAL,
};
use crate::io::error::Result;
use crate::io::image::export_raster_as_png;
use crate::io::progress::GrowthProgress;

/// Location policy names accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum LocationArg {
    /// Uniformly random frontier pop
    Random,
    /// Prefer a diagonal continuation of the previous pixel
    Snaking,
    /// Raster-scan order
    Sequential,
    /// Best preference among sampled frontier candidates
    Preferred,
}

/// Color policy names accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ColorArg {
    /// Match the mean color of the filled neighbors
    Nearest,
    /// Consume the palette from the back
    Sequential,
    /// Grayscale noise, leaving the palette untouched
    Perlin,
}

/// Preference policy names accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PreferenceArg {
    /// Pull growth toward a wandering goal pixel
    Location,
    /// Score candidates by the noise field
    Perlin,
}

impl From<LocationArg> for LocationPolicy {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::Random => Self::Random,
            LocationArg::Snaking => Self::Snaking,
            LocationArg::Sequential => Self::Sequential,
            LocationArg::Preferred => Self::Preferred,
        }
    }
}

impl From<ColorArg> for ColorPolicy {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Nearest => Self::Nearest,
            ColorArg::Sequential => Self::Sequential,
            ColorArg::Perlin => Self::Perlin,
        }
    }
}

impl From<PreferenceArg> for PreferencePolicy {
    fn from(arg: PreferenceArg) -> Self {
        match arg {
            PreferenceArg::Location => Self::Location,
            PreferenceArg::Perlin => Self::Perlin,
        }
    }
}

#[derive(Parser)]
#[command(name = "pixelbloom")]
#[command(
    author,
    version,
    about = "Grow an image where every pixel carries a unique palette color"
)]
/// Command-line arguments for the growth image generator
pub struct Cli {
    /// Output width in pixels
    #[arg(short = 'W', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed; 0 derives one from the wall clock
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// How the next pixel is chosen
    #[arg(short, long, value_enum, default_value = "random")]
    pub location: LocationArg,

    /// How the next color is chosen
    #[arg(short, long, value_enum, default_value = "nearest")]
    pub color: ColorArg,

    /// How frontier candidates are scored
    #[arg(short, long, value_enum, default_value = "location")]
    pub preference: PreferenceArg,

    /// Perlin octave count
    #[arg(long, default_value_t = DEFAULT_PERLIN_OCTAVES)]
    pub octaves: usize,

    /// Perlin feature size in pixels
    #[arg(long, default_value_t = DEFAULT_PERLIN_GRID_SIZE)]
    pub grid_size: f64,

    /// Frontier samples examined by the preferred-location policy
    #[arg(long, default_value_t = DEFAULT_PREFERRED_LOCATION_ITERATIONS)]
    pub preferred_iterations: usize,

    /// Closest-color tolerance
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    pub epsilon: f64,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Drives one full generation run from parsed arguments
pub struct GenerationRunner {
    cli: Cli,
}

impl GenerationRunner {
    /// Create a runner from parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate the image and write it to the output path
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the export
    /// fails.
    pub fn run(&self) -> Result<()> {
        let config = self.growth_config();
        let mut driver = GrowthDriver::new(config)?;

        let total = config.width * config.height;
        let progress = (!self.cli.quiet).then(|| GrowthProgress::new(total));

        let mut body = 0_usize;
        while driver.frontier_len() > 0 {
            driver.iterate();
            body += 1;
            if body % PROGRESS_UPDATE_INTERVAL == 0 {
                if let Some(ref bar) = progress {
                    bar.update(body, driver.frontier_len());
                }
            }
        }

        if let Some(ref bar) = progress {
            bar.finish();
        }

        export_raster_as_png(driver.raster(), &self.cli.output)
    }

    fn growth_config(&self) -> GrowthConfig {
        GrowthConfig {
            width: self.cli.width,
            height: self.cli.height,
            seed: resolve_seed(self.cli.seed),
            location: self.cli.location.into(),
            color: self.cli.color.into(),
            preference: self.cli.preference.into(),
            perlin_octaves: self.cli.octaves,
            perlin_grid_size: self.cli.grid_size,
            preferred_location_iterations: self.cli.preferred_iterations,
            epsilon: self.cli.epsilon,
        }
    }
}

/// Map the seed-zero convenience onto a concrete seed
///
/// Zero means "derive from the wall clock"; the core only ever sees
/// concrete seeds.
pub fn resolve_seed(seed: u64) -> u64 {
    if seed != 0 {
        return seed;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(1, |elapsed| elapsed.as_secs().max(1))
}
