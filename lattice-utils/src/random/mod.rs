//! Seeded pseudo-random sources.
//!
//! Noise generators take their randomness through the [`Random`] trait so callers can
//! inject any deterministic stream. [`legacy_random::LegacyRandom`] is the default source.

pub mod legacy_random;

/// A deterministic stream of pseudo-random values.
pub trait Random {
    /// Next uniformly distributed `i32` over the full range.
    fn next_i32(&mut self) -> i32;

    /// Next `i32` in `[0, bound)`.
    ///
    /// # Panics
    /// Panics if `bound` is not positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Next uniformly distributed `i64` over the full range.
    fn next_i64(&mut self) -> i64;

    /// Next `f64` in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Next uniformly distributed `bool`.
    fn next_bool(&mut self) -> bool;

    /// Fill `bytes` with random bytes.
    ///
    /// Each `next_i32` draw supplies four bytes, least significant first. A trailing
    /// partial chunk takes the low bytes of one extra draw.
    fn next_bytes(&mut self, bytes: &mut [u8]) {
        for chunk in bytes.chunks_mut(4) {
            let draw = self.next_i32().to_le_bytes();
            chunk.copy_from_slice(&draw[..chunk.len()]);
        }
    }

    /// Advance the stream by `count` `next_i32` draws.
    fn consume_count(&mut self, count: u32) {
        for _ in 0..count {
            self.next_i32();
        }
    }
}
