//! Errors raised while loading or validating noise settings.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`NoiseField`](crate::NoiseField) from settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The settings file could not be read.
    #[error("Failed to read settings from {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The settings text is not valid JSON5 or does not match the schema.
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json5::Error),
    /// Zero octaves would make every sample NaN.
    #[error("Octave count must be at least 1")]
    NoOctaves,
    /// Persistence must be finite and positive.
    #[error("Persistence must be finite and positive, got {0}")]
    InvalidPersistence(f64),
    /// Frequency must be finite and positive.
    #[error("Frequency must be finite and positive, got {0}")]
    InvalidFrequency(f64),
}
