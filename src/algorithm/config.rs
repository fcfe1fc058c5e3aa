//! Growth policies and validated run configuration

use crate::io::configuration::{
    DEFAULT_EPSILON, DEFAULT_HEIGHT, DEFAULT_PERLIN_GRID_SIZE, DEFAULT_PERLIN_OCTAVES,
    DEFAULT_PREFERRED_LOCATION_ITERATIONS, DEFAULT_WIDTH,
};
use crate::io::error::{Result, invalid_parameter};

/// How the next pixel is selected each iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationPolicy {
    /// Uniformly random frontier pop
    Random,
    /// Prefer a diagonal continuation of the previously filled pixel
    Snaking,
    /// Raster-scan order, bypassing the frontier
    Sequential,
    /// Best preference among sampled frontier candidates
    Preferred,
}

/// How the next color is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorPolicy {
    /// Pop the palette color nearest the mean of the filled neighbors
    Nearest,
    /// Pop palette colors from the back of the enumeration
    Sequential,
    /// Grayscale from the noise field; the palette is not consumed
    Perlin,
}

/// How frontier candidates are scored for the preferred-location policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencePolicy {
    /// Negated squared distance to a wandering goal pixel
    Location,
    /// Noise field value at the candidate
    Perlin,
}

/// Validated parameters for a growth run
#[derive(Debug, Clone, Copy)]
pub struct GrowthConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// PRNG seed; equal seeds reproduce rasters byte for byte
    pub seed: u64,
    /// Pixel selection policy
    pub location: LocationPolicy,
    /// Color selection policy
    pub color: ColorPolicy,
    /// Frontier scoring policy
    pub preference: PreferencePolicy,
    /// Octave count for the Perlin field
    pub perlin_octaves: usize,
    /// Pixels per noise-space unit of the Perlin field
    pub perlin_grid_size: f64,
    /// Frontier samples examined by the preferred-location policy
    pub preferred_location_iterations: usize,
    /// Closest-color tolerance hook
    pub epsilon: f64,
}

impl Default for GrowthConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            location: LocationPolicy::Random,
            color: ColorPolicy::Nearest,
            preference: PreferencePolicy::Location,
            perlin_octaves: DEFAULT_PERLIN_OCTAVES,
            perlin_grid_size: DEFAULT_PERLIN_GRID_SIZE,
            preferred_location_iterations: DEFAULT_PREFERRED_LOCATION_ITERATIONS,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl GrowthConfig {
    /// Check every parameter, reporting the first violation
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for a zero dimension, a zero octave count,
    /// a non-positive or non-finite grid size, fewer than one
    /// preferred-location sample, or a negative or non-finite epsilon.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(invalid_parameter("width", &self.width, &"must be positive"));
        }
        if self.height == 0 {
            return Err(invalid_parameter(
                "height",
                &self.height,
                &"must be positive",
            ));
        }
        if self.perlin_octaves == 0 {
            return Err(invalid_parameter(
                "perlin_octaves",
                &self.perlin_octaves,
                &"must be at least 1",
            ));
        }
        if !self.perlin_grid_size.is_finite() || self.perlin_grid_size <= 0.0 {
            return Err(invalid_parameter(
                "perlin_grid_size",
                &self.perlin_grid_size,
                &"must be positive and finite",
            ));
        }
        if self.preferred_location_iterations < 1 {
            return Err(invalid_parameter(
                "preferred_location_iterations",
                &self.preferred_location_iterations,
                &"must be at least 1",
            ));
        }
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(invalid_parameter(
                "epsilon",
                &self.epsilon,
                &"must be non-negative and finite",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        assert!(GrowthConfig::default().validate().is_ok());
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        let config = GrowthConfig {
            width: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_preferred_samples_is_rejected() {
        let config = GrowthConfig {
            preferred_location_iterations: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_negative_epsilon_is_rejected() {
        let config = GrowthConfig {
            epsilon: -0.5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
