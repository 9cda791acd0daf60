//! Tolerances and numerically safe helpers shared by every query.
//!
//! Tolerant float comparisons in the crate go through [`approx_eq`].
//! Near-zero divisors and zero-length normalization are
//! resolved here so that no query produces infinities or NaNs on
//! degenerate input.

use glam::Vec3;

/// Machine epsilon for the scalar type used throughout the crate.
pub const EPSILON: f32 = f32::EPSILON;

/// Divisor substituted for a (near-)zero denominator.
///
/// Slab tests divide by ray direction components; a ray parallel to a slab
/// would otherwise divide by zero.
pub const PARALLEL_DIVISOR: f32 = 0.00001;

/// Tolerance used when validating that a basis is orthonormal.
///
/// Rotation matrices built from quaternions carry a few ulps of error per
/// entry, which the scale-relative [`approx_eq`] would reject.
pub const BASIS_TOLERANCE: f32 = 1.0e-4;

/// Direction returned by [`safe_normalize`] for a zero-length vector.
pub const FALLBACK_DIRECTION: Vec3 = Vec3::X;

/// Scale-relative approximate equality.
///
/// True iff `|x - y| <= EPSILON * max(1, |x|, |y|)`. The tolerance grows with
/// the magnitude of the operands, so the same test works for tiny shapes and
/// for large world coordinates.
#[inline]
pub fn approx_eq(x: f32, y: f32) -> bool {
    (x - y).abs() <= EPSILON * 1.0f32.max(x.abs().max(y.abs()))
}

/// Approximate zero test, `approx_eq(x, 0.0)`.
#[inline]
pub fn approx_zero(x: f32) -> bool {
    approx_eq(x, 0.0)
}

/// Return `x`, or [`PARALLEL_DIVISOR`] when `x` is approximately zero.
#[inline]
pub fn safe_divisor(x: f32) -> f32 {
    if approx_zero(x) {
        PARALLEL_DIVISOR
    } else {
        x
    }
}

/// Normalize `v`, falling back to [`FALLBACK_DIRECTION`] for a zero vector.
///
/// Only a vector that cannot be normalized at all (zero length, or a length
/// that overflows to infinity) takes the fallback. Short vectors keep their
/// direction. The result is always a finite unit vector.
#[inline]
pub fn safe_normalize(v: Vec3) -> Vec3 {
    v.normalize_or(FALLBACK_DIRECTION)
}
