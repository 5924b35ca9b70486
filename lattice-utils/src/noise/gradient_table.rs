//! Seeded lattice gradient table.

use glam::DVec2;

use crate::noise::{GRADIENTS, TABLE_SIZE};
use crate::random::Random;

const TABLE_MASK: i32 = TABLE_SIZE as i32 - 1;

/// Fixed table of random bytes, written once at construction and read-only afterwards.
///
/// Each integer lattice point hashes to one byte; the low two bits of that byte pick
/// one of four axis-aligned unit gradients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientTable {
    bytes: [u8; TABLE_SIZE],
}

impl GradientTable {
    /// Fill a new table from `random`, consuming exactly `TABLE_SIZE` bytes of the stream.
    pub fn new<R: Random>(random: &mut R) -> Self {
        let mut bytes = [0u8; TABLE_SIZE];
        random.next_bytes(&mut bytes);
        Self { bytes }
    }

    /// Raw table contents.
    #[must_use]
    pub const fn bytes(&self) -> &[u8; TABLE_SIZE] {
        &self.bytes
    }

    /// Table index for lattice point `(x, y)`.
    ///
    /// Frozen bit-mixing hash; changing any constant changes every seed's output.
    #[inline]
    #[must_use]
    pub const fn index_of(x: i32, y: i32) -> usize {
        let spread = (x.wrapping_mul(56_747_323) >> 7) | 652_363_673_i32.wrapping_mul(y << 4);
        let mixed =
            spread.wrapping_sub(12_245_232_i32.wrapping_mul(x ^ y)) & (102_383_002 | (x >> 5));
        (mixed & TABLE_MASK) as usize
    }

    /// Unit gradient anchored at lattice point `(x, y)`.
    #[inline]
    #[must_use]
    pub fn gradient_at(&self, x: i32, y: i32) -> DVec2 {
        GRADIENTS[usize::from(self.bytes[Self::index_of(x, y)] & 3)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::legacy_random::LegacyRandom;

    #[test]
    fn test_table_consumes_one_fill_of_draws() {
        let mut rng = LegacyRandom::from_seed(42);
        GradientTable::new(&mut rng);

        let mut expected = LegacyRandom::from_seed(42);
        expected.consume_count((TABLE_SIZE / 4) as u32);
        assert_eq!(rng, expected);
    }

    #[test]
    fn test_table_starts_with_stream_bytes() {
        let table = GradientTable::new(&mut LegacyRandom::from_seed(42));
        assert_eq!(table.bytes()[..8], [53, 157, 65, 186, 247, 138, 254, 13]);
    }

    #[test]
    fn test_index_stays_in_table() {
        for x in [-100_000, -33, -1, 0, 1, 7, 1023, 1024, i32::MAX, i32::MIN] {
            for y in [-100_000, -1, 0, 1, 511, 99_999, i32::MAX, i32::MIN] {
                assert!(GradientTable::index_of(x, y) < TABLE_SIZE);
            }
        }
    }

    #[test]
    fn test_every_gradient_appears_in_a_block() {
        let table = GradientTable::new(&mut LegacyRandom::from_seed(42));
        let mut counts = [0u32; 4];
        for x in 0..64 {
            for y in 0..64 {
                let g = table.gradient_at(x, y);
                let slot = GRADIENTS.iter().position(|&candidate| candidate == g);
                if let Some(slot) = slot {
                    counts[slot] += 1;
                }
            }
        }
        assert_eq!(counts, [732, 1232, 1004, 1128]);
    }

    #[test]
    fn test_gradients_are_axis_aligned_units() {
        let table = GradientTable::new(&mut LegacyRandom::from_seed(3));
        for x in -20..20 {
            for y in -20..20 {
                let g = table.gradient_at(x, y);
                assert!(GRADIENTS.contains(&g), "unexpected gradient {g}");
                assert!((g.length() - 1.0).abs() < f64::EPSILON);
            }
        }
    }
}
