//! Axis Aligned Bounding Box.

use crate::bounding_volume::{BoundingSphere, BoundingVolume};
use crate::math::{HomogeneousMatrix, Isometry, Point, Real, Vector, DIM};
use crate::query::details::{
    intersection_test_aabb_plane, intersection_test_aabb_sphere, intersection_test_aabb_triangle,
};
use crate::shape::Plane;
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};

/// An Axis-Aligned Bounding Box (AABB).
///
/// An AABB is the simplest bounding volume, defined by its minimum and maximum corners.
/// Its edges are always parallel to the coordinate axes, making it very fast to test and
/// compute.
///
/// # Structure
///
/// - **mins**: The point with the smallest coordinates on each axis.
/// - **maxs**: The point with the largest coordinates on each axis.
/// - **Invariant**: `mins.x ≤ maxs.x`, `mins.y ≤ maxs.y` and `mins.z ≤ maxs.z` for a
///   non-empty box.
///
/// # Empty boxes
///
/// The canonical empty box, returned by [`Aabb::new_empty`], has `mins = +∞` and
/// `maxs = -∞`. It is the identity element of [`BoundingVolume::merge`] and
/// [`Aabb::take_point`]. Every containment and intersection predicate returns `false` when
/// one of its boxes is empty.
///
/// # Boundaries
///
/// All predicates are inclusive: two boxes sharing a face intersect, and a point lying on
/// a face is contained.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvkit3d::bounding_volume::{Aabb, BoundingVolume};
/// use bvkit3d::math::Point;
///
/// let a = Aabb::new(Point::new(0.0, 0.0, 0.0), Point::new(1.0, 1.0, 1.0));
/// let b = Aabb::new(Point::new(1.0, 0.0, 0.0), Point::new(2.0, 1.0, 1.0));
///
/// // Touching boxes intersect.
/// assert!(a.intersects(&b));
/// assert_eq!(a.merged(&b).extents().x, 2.0);
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[derive(Debug, PartialEq, Copy, Clone)]
#[repr(C)]
pub struct Aabb {
    /// The point with minimum coordinates.
    pub mins: Point<Real>,
    /// The point with maximum coordinates.
    pub maxs: Point<Real>,
}

impl Aabb {
    /// Creates a new AABB from its minimum and maximum corners.
    ///
    /// No check is made that `mins ≤ maxs`.
    #[inline]
    pub fn new(mins: Point<Real>, maxs: Point<Real>) -> Aabb {
        Aabb { mins, maxs }
    }

    /// Creates the canonical empty AABB, `[+∞, +∞, +∞, -∞, -∞, -∞]`.
    ///
    /// This is mostly used as the starting point of point accumulation with
    /// [`Aabb::take_point`] or of a fold with [`BoundingVolume::merge`].
    #[inline]
    pub fn new_empty() -> Self {
        Self::new(
            Vector::repeat(Real::INFINITY).into(),
            Vector::repeat(-Real::INFINITY).into(),
        )
    }

    /// Creates a new AABB from its center and its half-extents.
    #[inline]
    pub fn from_half_extents(center: Point<Real>, half_extents: Vector<Real>) -> Self {
        Self::new(center - half_extents, center + half_extents)
    }

    /// Creates the smallest AABB enclosing all the given points.
    ///
    /// The AABB of zero points is the empty AABB.
    pub fn from_points<I>(pts: I) -> Self
    where
        I: IntoIterator<Item = Point<Real>>,
    {
        let mut result = Self::new_empty();
        for pt in pts {
            result.take_point(pt);
        }
        result
    }

    /// Does this AABB contain no point at all?
    ///
    /// This is the case whenever `mins > maxs` on at least one axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        (0..DIM).any(|i| self.mins[i] > self.maxs[i])
    }

    /// The center of this AABB.
    ///
    /// The center of an empty AABB is not a number.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// The half-extents of this AABB, i.e., half its size along each axis.
    #[inline]
    pub fn half_extents(&self) -> Vector<Real> {
        (self.maxs - self.mins) * 0.5
    }

    /// The extents of this AABB, i.e., its full size along each axis.
    #[inline]
    pub fn extents(&self) -> Vector<Real> {
        self.maxs - self.mins
    }

    /// The size of this AABB along each axis. Same as [`Aabb::extents`].
    #[inline]
    pub fn size(&self) -> Vector<Real> {
        self.extents()
    }

    /// The volume of this AABB.
    #[inline]
    pub fn volume(&self) -> Real {
        let extents = self.extents();
        extents.x * extents.y * extents.z
    }

    /// The total area of the six faces of this AABB.
    #[inline]
    pub fn surface_area(&self) -> Real {
        let extents = self.extents();
        2.0 * (extents.x * extents.y + extents.y * extents.z + extents.z * extents.x)
    }

    /// Enlarges this AABB so it also contains the point `pt`.
    pub fn take_point(&mut self, pt: Point<Real>) {
        self.mins = self.mins.coords.inf(&pt.coords).into();
        self.maxs = self.maxs.coords.sup(&pt.coords).into();
    }

    /// Returns an AABB enlarged by `half_extents` on both sides of each axis.
    #[inline]
    #[must_use]
    pub fn add_half_extents(&self, half_extents: &Vector<Real>) -> Self {
        Self {
            mins: self.mins - half_extents,
            maxs: self.maxs + half_extents,
        }
    }

    /// Translates this AABB by the given vector.
    #[inline]
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        if self.is_empty() {
            return Self::new_empty();
        }

        self.mins += translation;
        self.maxs += translation;
        self
    }

    /// Returns an AABB whose coordinates are multiplied component-wise by `scale`.
    ///
    /// A negative scale component mirrors the box on that axis: its resulting min and
    /// max are swapped so the box remains valid. Scaling an empty box yields the empty
    /// box.
    #[inline]
    #[must_use]
    pub fn scaled(self, scale: &Vector<Real>) -> Self {
        if self.is_empty() {
            return Self::new_empty();
        }

        let a = self.mins.coords.component_mul(scale);
        let b = self.maxs.coords.component_mul(scale);
        Self {
            mins: a.inf(&b).into(),
            maxs: a.sup(&b).into(),
        }
    }

    /// Computes the AABB bounding this AABB transformed by the rigid motion `m`.
    ///
    /// The result is the same as [`Aabb::transform_by_matrix`] with the homogeneous
    /// matrix of `m`, computed from the rotated half-extents instead of the eight corners.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        if self.is_empty() {
            return Self::new_empty();
        }

        let center = m * self.center();
        let abs_rotation = m.rotation.to_rotation_matrix().into_inner().abs();
        let ws_half_extents = abs_rotation * self.half_extents();

        Aabb::new(center - ws_half_extents, center + ws_half_extents)
    }

    /// Computes the AABB bounding this AABB transformed by the affine matrix `m`.
    ///
    /// The eight corners are transformed and a new axis-aligned box is built around
    /// them, which is correct under rotation and shear. Transforming an empty box
    /// yields the empty box.
    pub fn transform_by_matrix(&self, m: &HomogeneousMatrix<Real>) -> Self {
        if self.is_empty() {
            return Self::new_empty();
        }

        Self::from_points(self.vertices().iter().map(|pt| m.transform_point(pt)))
    }

    /// The eight corners of this AABB.
    ///
    /// The first four vertices lie on the `z = mins.z` face, in counter-clockwise order
    /// when seen from `-z`; the last four are their counterparts on `z = maxs.z`.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 8] {
        [
            Point::new(self.mins.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.mins.y, self.mins.z),
            Point::new(self.maxs.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.maxs.y, self.mins.z),
            Point::new(self.mins.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.mins.y, self.maxs.z),
            Point::new(self.maxs.x, self.maxs.y, self.maxs.z),
            Point::new(self.mins.x, self.maxs.y, self.maxs.z),
        ]
    }

    /// Does this AABB contain the given point? Points on the boundary are contained.
    #[inline]
    pub fn contains_local_point(&self, point: &Point<Real>) -> bool {
        for i in 0..DIM {
            if point[i] < self.mins[i] || point[i] > self.maxs[i] {
                return false;
            }
        }

        true
    }

    /// The point of this AABB closest to `point`.
    ///
    /// Returns `point` itself if it is already inside.
    #[inline]
    pub fn clamp_point(&self, point: &Point<Real>) -> Point<Real> {
        point.coords.sup(&self.mins.coords).inf(&self.maxs.coords).into()
    }

    /// Computes the intersection of this AABB and another one.
    ///
    /// Returns `None` if they do not overlap. Boxes that only touch have a flat intersection.
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let result = Aabb::new(
            self.mins.coords.sup(&other.mins.coords).into(),
            self.maxs.coords.inf(&other.maxs.coords).into(),
        );

        if result.is_empty() {
            None
        } else {
            Some(result)
        }
    }

    /// Tests if the triangle `abc` intersects this AABB, using the separating axis
    /// theorem.
    #[inline]
    pub fn intersects_triangle(&self, a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> bool {
        intersection_test_aabb_triangle(self, a, b, c)
    }

    /// Tests if the given sphere intersects this AABB.
    #[inline]
    pub fn intersects_sphere(&self, sphere: &BoundingSphere) -> bool {
        intersection_test_aabb_sphere(self, sphere)
    }

    /// Tests if the given plane crosses or touches this AABB.
    #[inline]
    pub fn intersects_plane(&self, plane: &Plane) -> bool {
        intersection_test_aabb_plane(self, plane)
    }

    /// Tolerant comparison of two AABBs.
    ///
    /// Each of the six coordinates are compared with [`utils::hybrid_eq`].
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        utils::hybrid_eq_slices(self.mins.coords.as_slice(), other.mins.coords.as_slice())
            && utils::hybrid_eq_slices(self.maxs.coords.as_slice(), other.maxs.coords.as_slice())
    }

    /// Exact comparison of the six coordinates of two AABBs.
    #[inline]
    pub fn exact_equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl BoundingVolume for Aabb {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center()
    }

    #[inline]
    fn intersects(&self, other: &Aabb) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && na::partial_le(&self.mins, &other.maxs)
            && na::partial_ge(&self.maxs, &other.mins)
    }

    #[inline]
    fn contains(&self, other: &Aabb) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && na::partial_le(&self.mins, &other.mins)
            && na::partial_ge(&self.maxs, &other.maxs)
    }

    #[inline]
    fn merge(&mut self, other: &Aabb) {
        self.mins = self.mins.inf(&other.mins);
        self.maxs = self.maxs.sup(&other.maxs);
    }

    #[inline]
    fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            mins: self.mins.inf(&other.mins),
            maxs: self.maxs.sup(&other.maxs),
        }
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        self.mins += Vector::repeat(-amount);
        self.maxs += Vector::repeat(amount);
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Aabb {
        Aabb {
            mins: self.mins + Vector::repeat(-amount),
            maxs: self.maxs + Vector::repeat(amount),
        }
    }
}

impl AbsDiffEq for Aabb {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.mins.abs_diff_eq(&other.mins, epsilon) && self.maxs.abs_diff_eq(&other.maxs, epsilon)
    }
}

impl RelativeEq for Aabb {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.mins.relative_eq(&other.mins, epsilon, max_relative)
            && self.maxs.relative_eq(&other.maxs, epsilon, max_relative)
    }
}
