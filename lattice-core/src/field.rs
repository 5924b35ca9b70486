//! Seed-bound noise field.
//!
//! A [`NoiseField`] pairs a [`PerlinNoise`] generator with validated [`NoiseSettings`]
//! so callers sample by world coordinate without threading octave parameters around.
//! The generator is read-only after construction, so grid rows are sampled in parallel.

use lattice_utils::noise::PerlinNoise;
use rayon::prelude::*;

use crate::config::NoiseSettings;
use crate::error::ConfigError;

/// A `width` x `height` block of unit-spaced sample points starting at `(x, y)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridRegion {
    /// X coordinate of the first column.
    pub x: f64,
    /// Y coordinate of the first row.
    pub y: f64,
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
}

/// Fractal noise sampled with fixed settings.
#[derive(Debug, Clone)]
pub struct NoiseField {
    settings: NoiseSettings,
    noise: PerlinNoise,
}

impl NoiseField {
    /// Validate `settings` and seed a generator from them.
    pub fn new(settings: NoiseSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let noise = PerlinNoise::from_seed(settings.seed);
        tracing::debug!(
            seed = settings.seed,
            octaves = settings.octaves,
            persistence = settings.persistence,
            frequency = settings.frequency,
            "noise field created"
        );
        Ok(Self { settings, noise })
    }

    /// Settings this field was built with.
    #[must_use]
    pub const fn settings(&self) -> &NoiseSettings {
        &self.settings
    }

    /// Underlying generator.
    #[must_use]
    pub const fn noise(&self) -> &PerlinNoise {
        &self.noise
    }

    /// Sample the field at `(x, y)`.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let NoiseSettings {
            octaves,
            persistence,
            frequency,
            ..
        } = self.settings;
        self.noise
            .fractal(x * frequency, y * frequency, octaves, persistence)
    }

    /// Sample every point of `region`, row-major.
    ///
    /// The value for column `c` of row `r` is at index `r * width + c` and equals
    /// `sample(region.x + c, region.y + r)` exactly.
    #[must_use]
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn sample_grid(&self, region: &GridRegion) -> Vec<f64> {
        let mut values = vec![0.0; region.width * region.height];
        if region.width == 0 {
            return values;
        }

        values
            .par_chunks_mut(region.width)
            .enumerate()
            .for_each(|(row, out)| {
                let y = region.y + row as f64;
                for (column, value) in out.iter_mut().enumerate() {
                    *value = self.sample(region.x + column as f64, y);
                }
            });

        values
    }
}
