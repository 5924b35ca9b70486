//! Classic 2D gradient noise over an integer lattice.
//!
//! A point is shaded by the four lattice corners around it: each corner's gradient is
//! dotted with the displacement from that corner, and the four products are blended with
//! the quintic [`smoothstep`] curve. [`PerlinNoise::fractal`] sums several such layers
//! at growing frequency and shrinking amplitude. It is sometimes called "simplex" noise
//! by its users, but no simplex skewing is involved.

use glam::DVec2;

use crate::math::{lerp, smoothstep};
use crate::noise::GradientTable;
use crate::random::Random;
use crate::random::legacy_random::LegacyRandom;

/// Seeded gradient noise generator.
///
/// Owns the random source it was built from and the gradient table filled from it.
/// Queries take `&self` and never touch the random source, so a built generator can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct PerlinNoise<R = LegacyRandom> {
    random: R,
    table: GradientTable,
}

impl PerlinNoise<LegacyRandom> {
    /// Create a generator seeded with a [`LegacyRandom`].
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(LegacyRandom::from_seed(seed))
    }
}

impl<R: Random> PerlinNoise<R> {
    /// Create a generator from an injected random source.
    ///
    /// Fills the gradient table from `random`, advancing it by one table's worth of bytes.
    pub fn new(mut random: R) -> Self {
        let table = GradientTable::new(&mut random);
        tracing::trace!("gradient table filled");
        Self { random, table }
    }

    /// The random source, positioned just past the table fill.
    ///
    /// Draws taken from here continue the seeded stream and do not affect the noise.
    pub const fn random(&mut self) -> &mut R {
        &mut self.random
    }

    /// Consume the generator, returning its random source.
    #[must_use]
    pub fn into_random(self) -> R {
        self.random
    }
}

impl<R> PerlinNoise<R> {
    /// The gradient table backing this generator.
    #[must_use]
    pub const fn table(&self) -> &GradientTable {
        &self.table
    }

    /// Sample single-octave noise at `(x, y)`.
    ///
    /// Returns `0` on every lattice point. Non-negative inputs stay well inside `[-1, 1]`.
    ///
    /// Lattice cells are found by truncating toward zero, not flooring. For negative
    /// coordinates the local offsets land in `(-1, 0]`, the ease curve extrapolates, and
    /// the output can leave `[-1, 1]`.
    #[must_use]
    pub fn evaluate(&self, x: f64, y: f64) -> f64 {
        // `as` truncates toward zero, saturates, and maps NaN to 0
        let left = x as i32;
        let top = y as i32;
        let right = left.wrapping_add(1);
        let bottom = top.wrapping_add(1);

        let local = DVec2::new(x - f64::from(left), y - f64::from(top));

        let top_left = self.table.gradient_at(left, top).dot(local);
        let top_right = self.table.gradient_at(right, top).dot(local - DVec2::X);
        let bottom_left = self.table.gradient_at(left, bottom).dot(local - DVec2::Y);
        let bottom_right = self
            .table
            .gradient_at(right, bottom)
            .dot(local - DVec2::ONE);

        let fade_x = smoothstep(local.x);
        let fade_y = smoothstep(local.y);

        let upper = lerp(fade_x, top_left, top_right);
        let lower = lerp(fade_x, bottom_left, bottom_right);
        lerp(fade_y, upper, lower)
    }

    /// Sample `octaves` layers of noise summed together.
    ///
    /// Each layer's amplitude is multiplied by `persistence` and its coordinates divided
    /// by it. The sum is divided by the total of `amplitude * persistence` over all
    /// layers, so a single octave returns `evaluate(x, y) / persistence`.
    ///
    /// No inputs are rejected: `octaves == 0` returns NaN (`0 / 0`), and
    /// `persistence == 0` feeds infinite coordinates into [`Self::evaluate`].
    #[must_use]
    pub fn fractal(&self, mut x: f64, mut y: f64, octaves: u32, persistence: f64) -> f64 {
        let mut amplitude = 1.0;
        let mut total = 0.0;
        let mut max = 0.0;

        for _ in 0..octaves {
            max += amplitude * persistence;
            total += self.evaluate(x, y) * amplitude;
            amplitude *= persistence;
            x /= persistence;
            y /= persistence;
        }

        total / max
    }
}
