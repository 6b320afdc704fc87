//! Planes given by a normal and a constant.

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON};
use crate::utils;

/// A plane, set of the points `p` such that `normal · p + constant = 0`.
///
/// The normal is not required to be unit-length. When it is not, [`Plane::distance_to_point`]
/// returns a signed distance scaled by the norm of `normal`.
#[derive(PartialEq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Plane {
    /// The plane normal.
    pub normal: Vector<Real>,
    /// The signed offset of the plane along its normal.
    pub constant: Real,
}

impl Plane {
    /// Builds a new plane from its normal and constant.
    #[inline]
    pub fn new(normal: Vector<Real>, constant: Real) -> Plane {
        Plane { normal, constant }
    }

    /// Builds the plane with the given normal, passing through `point`.
    #[inline]
    pub fn from_normal_and_point(normal: Vector<Real>, point: &Point<Real>) -> Plane {
        Plane::new(normal, -normal.dot(&point.coords))
    }

    /// Builds the plane passing through the counter-clockwise triangle `abc`, with a unit
    /// normal.
    ///
    /// Returns `None` if the triangle is degenerate.
    pub fn from_coplanar_points(
        a: &Point<Real>,
        b: &Point<Real>,
        c: &Point<Real>,
    ) -> Option<Plane> {
        let normal = utils::triangle_normal(a, b, c);

        if normal == Vector::zeros() {
            None
        } else {
            Some(Plane::from_normal_and_point(normal, a))
        }
    }

    /// The signed distance from this plane to `point`: `normal · point + constant`.
    #[inline]
    pub fn distance_to_point(&self, point: &Point<Real>) -> Real {
        self.normal.dot(&point.coords) + self.constant
    }

    /// The same plane, with a unit normal.
    ///
    /// Returns `None` if the normal is zero.
    #[inline]
    pub fn normalized(&self) -> Option<Plane> {
        let norm = self.normal.norm();

        if norm == 0.0 {
            None
        } else {
            Some(Plane::new(self.normal / norm, self.constant / norm))
        }
    }

    /// Orthogonal projection of `point` on this plane.
    ///
    /// A plane with a zero normal leaves the point unchanged.
    #[inline]
    pub fn project_point(&self, point: &Point<Real>) -> Point<Real> {
        let sq_norm = self.normal.norm_squared();

        if sq_norm == 0.0 {
            *point
        } else {
            point - self.normal * (self.distance_to_point(point) / sq_norm)
        }
    }
}

/// Computes the single point shared by three planes.
///
/// Returns `None` if the planes normals are linearly dependent (two of them are parallel,
/// or all three contain a common direction), in which case the planes meet along a line,
/// on a plane, or nowhere.
pub fn intersect_three_planes(p1: &Plane, p2: &Plane, p3: &Plane) -> Option<Point<Real>> {
    let n23 = p2.normal.cross(&p3.normal);
    let denom = p1.normal.dot(&n23);

    if denom.abs() <= DEFAULT_EPSILON {
        log::debug!("Plane normals are linearly dependent: no unique intersection point.");
        return None;
    }

    let n31 = p3.normal.cross(&p1.normal);
    let n12 = p1.normal.cross(&p2.normal);
    let sum = n23 * p1.constant + n31 * p2.constant + n12 * p3.constant;

    Some(Point::from(sum / -denom))
}
