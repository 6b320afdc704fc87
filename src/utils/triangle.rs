//! Free functions on triangles given as three independent points.

use crate::math::{Point, Real, Vector};
use crate::utils;

/// The non-normalized normal `(b - a) × (c - a)` of the triangle `abc`.
///
/// Its norm is twice the triangle area. It is zero for degenerate triangles.
#[inline]
pub fn triangle_scaled_normal(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Vector<Real> {
    let ab = b - a;
    let ac = c - a;
    ab.cross(&ac)
}

/// The unit normal of the counter-clockwise triangle `abc`.
///
/// A degenerate triangle (collinear or coincident vertices) yields the zero vector;
/// callers must check for it before relying on a unit length.
#[inline]
pub fn triangle_normal(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Vector<Real> {
    triangle_scaled_normal(a, b, c)
        .try_normalize(0.0)
        .unwrap_or_else(Vector::zeros)
}

/// The centroid of the triangle `abc`.
#[inline]
pub fn triangle_center(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Point<Real> {
    utils::center(&[*a, *b, *c])
}

/// The area of the triangle `abc`.
#[inline]
pub fn triangle_area(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Real {
    triangle_scaled_normal(a, b, c).norm() * 0.5
}
