//! Scalar interpolation helpers shared by the noise evaluators.

/// Linear interpolation from `start` to `end` by `delta`.
///
/// `delta` is not clamped.
#[inline]
#[must_use]
pub fn lerp(delta: f64, start: f64, end: f64) -> f64 {
    start + delta * (end - start)
}

/// Quintic ease curve `6t^5 - 15t^4 + 10t^3`.
///
/// Maps `0 -> 0` and `1 -> 1` with zero first and second derivatives at both ends.
/// Inputs outside `[0, 1]` are extrapolated, not clamped.
#[inline]
#[must_use]
pub fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}
