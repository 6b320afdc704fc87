//! Traits and structure needed to cast rays.

use crate::math::{Isometry, Point, Real, Vector};

/// A bounded ray for ray-casting queries.
///
/// A ray starts at `origin` and extends along `dir` up to the parameter `length`: the points
/// of the ray are `origin + dir * t` for `t` in `[0, length]`.
///
/// # Direction Vector
///
/// The direction does not need to be normalized for the boolean tests to be correct. The
/// parameters returned by casts are expressed in units of `dir`, so with a unit direction they
/// are world-space distances and `length` is the length of the ray segment.
///
/// # Example
///
/// ```rust
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvkit3d::bounding_volume::Aabb;
/// use bvkit3d::query::{Ray, RayCast};
/// use nalgebra::{Point3, Vector3};
///
/// let aabb = Aabb::new(Point3::new(-1.0, -1.0, 2.0), Point3::new(1.0, 1.0, 4.0));
///
/// let long = Ray::new(Point3::origin(), Vector3::z(), 10.0);
/// assert_eq!(aabb.cast_local_ray(&long), Some(2.0));
///
/// // The box starts exactly where this ray stops.
/// let short = Ray::new(Point3::origin(), Vector3::z(), 2.0);
/// assert!(!aabb.intersects_local_ray(&short));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
    /// The largest parameter along `dir` that is still part of the ray.
    pub length: Real,
}

impl Default for Ray {
    /// A unit ray starting at the origin and pointing toward `+z`.
    fn default() -> Self {
        Ray::new(Point::origin(), Vector::z(), 1.0)
    }
}

impl Ray {
    /// Creates a new ray from an origin point, a direction vector, and a length.
    pub fn new(origin: Point<Real>, dir: Vector<Real>, length: Real) -> Ray {
        Ray {
            origin,
            dir,
            length,
        }
    }

    /// Creates the ray covering the segment `[a, b]`.
    ///
    /// The direction is normalized and `length` is set to the segment length, so that the ray
    /// ends exactly at `b`. A zero-length segment yields a ray with a zero direction and a
    /// zero length located at `a`.
    pub fn from_segment(a: &Point<Real>, b: &Point<Real>) -> Ray {
        let ab = b - a;
        let length = ab.norm();

        if length == 0.0 {
            log::debug!("Ray built from a zero-length segment.");
            Ray::new(*a, Vector::zeros(), 0.0)
        } else {
            Ray::new(*a, ab / length, length)
        }
    }

    /// Transforms this ray by the given isometry.
    ///
    /// Both the origin and direction are transformed, the length is preserved.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(m * self.origin, m * self.dir, self.length)
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This is equivalent to transforming the ray to the local space of an object.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m.inverse_transform_point(&self.origin),
            m.inverse_transform_vector(&self.dir),
            self.length,
        )
    }

    /// Translates this ray by the given vector.
    #[inline]
    pub fn translate_by(&self, v: Vector<Real>) -> Self {
        Self::new(self.origin + v, self.dir, self.length)
    }

    /// Computes the point `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// The last point of this ray, at parameter `length`.
    #[inline]
    pub fn end(&self) -> Point<Real> {
        self.point_at(self.length)
    }
}

/// Traits of objects which can be intersected by a ray.
pub trait RayCast {
    /// Computes the parameter of the first point of `ray` inside this shape, given in the
    /// local-space of the shape.
    ///
    /// Returns `Some(0.0)` if the ray starts inside the shape.
    fn cast_local_ray(&self, ray: &Ray) -> Option<Real>;

    /// Tests whether a ray, given in the local-space of the shape, intersects this shape.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray) -> bool {
        self.cast_local_ray(ray).is_some()
    }

    /// Computes the parameter of the first point of `ray` inside this shape transformed by `m`.
    #[inline]
    fn cast_ray(&self, m: &Isometry<Real>, ray: &Ray) -> Option<Real> {
        let ls_ray = ray.inverse_transform_by(m);
        self.cast_local_ray(&ls_ray)
    }

    /// Tests whether a ray intersects this shape transformed by `m`.
    #[inline]
    fn intersects_ray(&self, m: &Isometry<Real>, ray: &Ray) -> bool {
        let ls_ray = ray.inverse_transform_by(m);
        self.intersects_local_ray(&ls_ray)
    }
}
