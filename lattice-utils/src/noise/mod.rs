//! 2D gradient noise.
//!
//! - [`GradientTable`] - Seeded byte table mapping lattice points to gradient vectors
//! - [`PerlinNoise`] - Single-octave evaluation and octave-summed fractal noise

mod gradient_table;
mod perlin_noise;

pub use gradient_table::GradientTable;
pub use perlin_noise::PerlinNoise;

use glam::DVec2;

/// Number of bytes in a [`GradientTable`].
///
/// Lattice hashes are reduced with `& (TABLE_SIZE - 1)`, so this must stay a power of two.
pub const TABLE_SIZE: usize = 1 << 10;

const _: () = assert!(TABLE_SIZE.is_power_of_two());

/// The four axis-aligned unit gradients, selected by the low two bits of a table byte.
pub(crate) const GRADIENTS: [DVec2; 4] = [DVec2::X, DVec2::NEG_X, DVec2::Y, DVec2::NEG_Y];
