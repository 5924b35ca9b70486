//! Deterministic, seed-reproducible 2D gradient noise.
//!
//! - [`random`] - Seeded random sources, including the 48-bit [`LegacyRandom`](random::legacy_random::LegacyRandom)
//! - [`math`] - Interpolation and easing helpers
//! - [`noise`] - The lattice gradient table and the single/multi-octave evaluator

pub mod math;
pub mod noise;
pub mod random;
