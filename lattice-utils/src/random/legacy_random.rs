//! 48-bit linear congruential generator.
//!
//! Bit-compatible with the classic `seed * 0x5DEECE66D + 0xB mod 2^48` generator, so a
//! given 64-bit seed yields the same byte stream (and therefore the same gradient tables)
//! as any other implementation of that generator.

use crate::random::Random;

const MULTIPLIER: i64 = 0x5_DEEC_E66D;
const INCREMENT: i64 = 0xB;
const MODULUS_MASK: i64 = (1 << 48) - 1;
/// `2^-53`, the spacing of `f64` values in `[0.5, 1)`.
const DOUBLE_UNIT: f64 = 1.0 / (1_u64 << 53) as f64;

/// Seeded 48-bit LCG.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyRandom {
    seed: i64,
}

impl LegacyRandom {
    /// Create a generator from a 64-bit seed.
    ///
    /// The seed is scrambled with the multiplier before use, so seed `0` is not degenerate.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self {
            seed: scramble(seed),
        }
    }

    /// Reset the generator to the state `from_seed(seed)` would produce.
    pub const fn set_seed(&mut self, seed: u64) {
        self.seed = scramble(seed);
    }

    /// Advance the state and return its top `bits` bits.
    #[inline]
    fn next(&mut self, bits: u32) -> i32 {
        self.seed = self
            .seed
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT)
            & MODULUS_MASK;
        (self.seed >> (48 - bits)) as i32
    }
}

const fn scramble(seed: u64) -> i64 {
    (seed as i64 ^ MULTIPLIER) & MODULUS_MASK
}

impl Random for LegacyRandom {
    fn next_i32(&mut self) -> i32 {
        self.next(32)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        assert!(bound > 0, "bound must be positive, got {bound}");

        let m = bound - 1;
        let r = self.next(31);
        if bound & m == 0 {
            // Power of two: take the high bits, the low bits of an LCG are weak
            return ((i64::from(bound) * i64::from(r)) >> 31) as i32;
        }

        let mut u = r;
        loop {
            let r = u % bound;
            // Reject the incomplete bucket at the top of the range
            if u.wrapping_sub(r).wrapping_add(m) >= 0 {
                return r;
            }
            u = self.next(31);
        }
    }

    fn next_i64(&mut self) -> i64 {
        let high = i64::from(self.next(32));
        let low = i64::from(self.next(32));
        (high << 32).wrapping_add(low)
    }

    fn next_f64(&mut self) -> f64 {
        let high = i64::from(self.next(26));
        let low = i64::from(self.next(27));
        ((high << 27) + low) as f64 * DOUBLE_UNIT
    }

    fn next_bool(&mut self) -> bool {
        self.next(1) != 0
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_next_i32_matches_reference_stream() {
        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_i32(), -1_170_105_035);
        assert_eq!(rng.next_i32(), 234_785_527);

        let mut rng = LegacyRandom::from_seed(0);
        assert_eq!(rng.next_i32(), -1_155_484_576);
    }

    #[test]
    fn test_next_i32_bounded_matches_reference_stream() {
        let mut rng = LegacyRandom::from_seed(42);
        let values: Vec<i32> = (0..5).map(|_| rng.next_i32_bounded(10)).collect();
        assert_eq!(values, [0, 3, 8, 4, 0]);
    }

    #[test]
    fn test_next_i32_bounded_power_of_two_stays_in_range() {
        let mut rng = LegacyRandom::from_seed(7);
        for _ in 0..1000 {
            let v = rng.next_i32_bounded(16);
            assert!((0..16).contains(&v), "out of range: {v}");
        }
    }

    #[test]
    #[should_panic(expected = "bound must be positive")]
    fn test_next_i32_bounded_rejects_zero() {
        LegacyRandom::from_seed(0).next_i32_bounded(0);
    }

    #[test]
    fn test_next_i64_and_f64_match_reference_stream() {
        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_i64(), -5_025_562_857_975_149_833);

        let mut rng = LegacyRandom::from_seed(42);
        assert_eq!(rng.next_f64(), 0.727_563_680_032_868_1);
        assert_eq!(rng.next_f64(), 0.683_223_471_759_845_4);
    }

    #[test]
    fn test_next_bytes_packs_little_endian() {
        let mut rng = LegacyRandom::from_seed(42);
        let mut bytes = [0u8; 8];
        rng.next_bytes(&mut bytes);
        assert_eq!(bytes, [53, 157, 65, 186, 247, 138, 254, 13]);

        // Partial trailing chunk consumes a whole draw
        let mut rng = LegacyRandom::from_seed(12345);
        let mut bytes = [0u8; 6];
        rng.next_bytes(&mut bytes);
        assert_eq!(bytes, [214, 32, 159, 92, 49, 179]);
    }

    #[test]
    fn test_consume_count_skips_draws() {
        let mut rng = LegacyRandom::from_seed(42);
        rng.consume_count(2);
        assert_eq!(rng.next_i32(), -1_360_544_799);
    }

    #[test]
    fn test_set_seed_restarts_stream() {
        let mut rng = LegacyRandom::from_seed(42);
        rng.next_i64();
        rng.set_seed(42);
        assert_eq!(rng, LegacyRandom::from_seed(42));
    }
}
