//! Seed-bound noise sampling built on [`lattice_utils::noise`].
//!
//! # Key Types
//!
//! - [`NoiseSettings`] - Seed and octave parameters, loadable from JSON5
//! - [`NoiseField`] - A validated generator that samples points and grids
//! - [`ConfigError`] - Everything that can go wrong building a field

pub mod config;
pub mod error;
pub mod field;

pub use config::NoiseSettings;
pub use error::ConfigError;
pub use field::{GridRegion, NoiseField};
