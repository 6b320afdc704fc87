use crate::math::{Real, DEFAULT_EPSILON};

/// Tolerant scalar comparison mixing an absolute and a relative bound.
///
/// Returns `true` if `|a - b| <= DEFAULT_EPSILON * max(1, |a|, |b|)`. Values that are
/// exactly equal (including matching infinities) always compare equal.
#[inline]
pub fn hybrid_eq(a: Real, b: Real) -> bool {
    a == b || (a - b).abs() <= DEFAULT_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Applies [`hybrid_eq`] component-wise to two slices of the same length.
///
/// Slices of different lengths never compare equal.
#[inline]
pub fn hybrid_eq_slices(a: &[Real], b: &[Real]) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(a, b)| hybrid_eq(*a, *b))
}
