//! Noise settings.
//!
//! Settings are plain data, usually read from a JSON5 file:
//!
//! ```json5
//! {
//!     // Unsigned 64-bit seed
//!     seed: 42,
//!     octaves: 6,
//!     persistence: 0.5,
//!     frequency: 0.015625,
//! }
//! ```
//!
//! Missing fields fall back to [`NoiseSettings::default`].

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Parameters for a [`NoiseField`](crate::NoiseField).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NoiseSettings {
    /// Seed for the gradient table.
    pub seed: u64,
    /// Number of layers summed per sample.
    pub octaves: u32,
    /// Per-octave amplitude factor. Coordinates are divided by it between octaves.
    pub persistence: f64,
    /// Scale applied to sample coordinates before the first octave.
    pub frequency: f64,
}

impl Default for NoiseSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            persistence: 0.5,
            frequency: 1.0 / 32.0,
        }
    }
}

impl NoiseSettings {
    /// Parse settings from JSON5 text. Does not validate.
    pub fn from_json5(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json5::from_str(text)?)
    }

    /// Read and parse a settings file. Does not validate.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json5(&text)
    }

    /// Reject settings whose samples would be NaN or infinite everywhere.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.octaves == 0 {
            return Err(ConfigError::NoOctaves);
        }
        if !self.persistence.is_finite() || self.persistence <= 0.0 {
            return Err(ConfigError::InvalidPersistence(self.persistence));
        }
        if !self.frequency.is_finite() || self.frequency <= 0.0 {
            return Err(ConfigError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }
}
