//! Oriented Bounding Box.

use crate::bounding_volume::Aabb;
use crate::math::{
    HomogeneousMatrix, Isometry, Matrix, Point, Real, Rotation, Vector, DEFAULT_EPSILON, DIM,
};
use crate::query::details::intersection_test_obb_obb;
use crate::utils;
use approx::{AbsDiffEq, RelativeEq};

/// Tolerance used by [`Obb::try_new`] to decide if a rotation basis is orthonormal.
const ORTHONORMALITY_TOLERANCE: Real = 1.0e-4;

/// Reasons for [`Obb::try_new`] to reject its inputs.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ObbError {
    /// A half-extent is negative, infinite, or not a number.
    #[error("the half-extents must be finite and non-negative")]
    InvalidHalfExtents,
    /// The columns of the rotation are not unit and mutually orthogonal.
    #[error("the rotation basis is not orthonormal")]
    NonOrthonormalRotation,
    /// The rotation basis is orthonormal but left-handed (it contains a reflection).
    #[error("the rotation basis is left-handed")]
    LeftHandedRotation,
}

/// An Oriented Bounding Box (OBB).
///
/// An OBB is a box with arbitrary orientation. Its local frame is given by the
/// three columns of `rotation`, which must stay orthonormal and right-handed: the
/// separating axis test and the point queries rely on `rotation.transpose()` being
/// the inverse rotation.
///
/// Boundaries are closed, like [`Aabb`]'s: touching boxes intersect.
///
/// # Example
///
/// ```
/// # #[cfg(all(feature = "dim3", feature = "f32"))] {
/// use bvkit3d::bounding_volume::Obb;
/// use bvkit3d::math::{Point, Vector};
/// use bvkit3d::na::UnitQuaternion;
///
/// let rot = UnitQuaternion::from_axis_angle(&Vector::y_axis(), std::f32::consts::FRAC_PI_4);
/// let obb = Obb::from_center_half_extents_orientation(
///     Point::origin(),
///     Vector::new(1.0, 2.0, 3.0),
///     &rot,
/// );
///
/// assert!(obb.contains_point(&Point::origin()));
/// # }
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The center of the box.
    pub center: Point<Real>,
    /// Half of the box size along each of its local axes. Each component is non-negative.
    pub half_extents: Vector<Real>,
    /// The orthonormal basis of the box: column `i` is its `i`-th local axis.
    pub rotation: Matrix<Real>,
}

impl Default for Obb {
    fn default() -> Self {
        Self::identity()
    }
}

impl Obb {
    /// Creates a new OBB without checking that `rotation` is orthonormal.
    #[inline]
    pub fn new(center: Point<Real>, half_extents: Vector<Real>, rotation: Matrix<Real>) -> Self {
        Obb {
            center,
            half_extents,
            rotation,
        }
    }

    /// Creates a new OBB after checking its half-extents and rotation basis.
    pub fn try_new(
        center: Point<Real>,
        half_extents: Vector<Real>,
        rotation: Matrix<Real>,
    ) -> Result<Self, ObbError> {
        if half_extents.iter().any(|e| !e.is_finite() || *e < 0.0) {
            return Err(ObbError::InvalidHalfExtents);
        }

        if !rotation.tr_mul(&rotation).relative_eq(
            &Matrix::identity(),
            ORTHONORMALITY_TOLERANCE,
            ORTHONORMALITY_TOLERANCE,
        ) {
            return Err(ObbError::NonOrthonormalRotation);
        }

        if rotation.determinant() < 0.0 {
            return Err(ObbError::LeftHandedRotation);
        }

        Ok(Self::new(center, half_extents, rotation))
    }

    /// The box of half-extents 1 centered at the origin, aligned with the coordinate axes.
    #[inline]
    pub fn identity() -> Self {
        Self::new(Point::origin(), Vector::repeat(1.0), Matrix::identity())
    }

    /// The OBB occupying exactly the same space as the given AABB.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(aabb.center(), aabb.half_extents(), Matrix::identity())
    }

    /// Creates an OBB from its center, half-extents, and orientation.
    #[inline]
    pub fn from_center_half_extents_orientation(
        center: Point<Real>,
        half_extents: Vector<Real>,
        orientation: &Rotation<Real>,
    ) -> Self {
        Self::new(
            center,
            half_extents,
            orientation.to_rotation_matrix().into_inner(),
        )
    }

    /// The `i`-th local axis of this box, in world-space.
    #[inline]
    pub fn axis(&self, i: usize) -> Vector<Real> {
        self.rotation.column(i).into_owned()
    }

    /// The eight world-space corners of this box.
    ///
    /// They follow the same ordering as [`Aabb::vertices`] in the box's local frame.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let local = Aabb::from_half_extents(Point::origin(), self.half_extents);
        local
            .vertices()
            .map(|pt| self.center + self.rotation * pt.coords)
    }

    /// The smallest AABB enclosing this box.
    #[inline]
    pub fn to_aabb(&self) -> Aabb {
        let ws_half_extents = self.rotation.abs() * self.half_extents;
        Aabb::from_half_extents(self.center, ws_half_extents)
    }

    /// Expresses `point` in the local frame of this box.
    ///
    /// `rotation` being orthonormal, its transpose is its inverse.
    #[inline]
    fn local_point(&self, point: &Point<Real>) -> Vector<Real> {
        self.rotation.tr_mul(&(point - self.center))
    }

    /// Does this box contain `point`? Points on the boundary are contained.
    #[inline]
    pub fn contains_point(&self, point: &Point<Real>) -> bool {
        let local = self.local_point(point);
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    /// The point of this box closest to `point`.
    ///
    /// Returns `point` itself (up to rounding) if it is already inside.
    pub fn clamp_point(&self, point: &Point<Real>) -> Point<Real> {
        let local = self.local_point(point);
        let mut result = self.center;

        for i in 0..DIM {
            let dist = local[i].max(-self.half_extents[i]).min(self.half_extents[i]);
            result += self.axis(i) * dist;
        }

        result
    }

    /// Tests if two oriented boxes intersect, using the separating axis theorem.
    ///
    /// Uses [`DEFAULT_EPSILON`] to guard the edge-edge axes of nearly parallel boxes.
    #[inline]
    pub fn intersects_obb(&self, other: &Obb) -> bool {
        intersection_test_obb_obb(self, other, DEFAULT_EPSILON)
    }

    /// Tests if two oriented boxes intersect, with an explicit parallel-axes guard.
    ///
    /// `epsilon` is added to the absolute values of the relative rotation entries so that
    /// the cross-product axes of nearly parallel edges never report a false separation.
    #[inline]
    pub fn intersects_obb_with_epsilon(&self, other: &Obb, epsilon: Real) -> bool {
        intersection_test_obb_obb(self, other, epsilon)
    }

    /// Tests if this box intersects the given AABB.
    ///
    /// The AABB is handled as an OBB with an identity rotation, after being clipped by the
    /// bounds of this box so that unbounded AABBs are supported. An empty AABB never
    /// intersects.
    #[inline]
    pub fn intersects_aabb(&self, aabb: &Aabb) -> bool {
        self.to_aabb()
            .intersection(aabb)
            .is_some_and(|clipped| self.intersects_obb(&Obb::from_aabb(&clipped)))
    }

    /// Transforms this box by the rigid motion `m`.
    ///
    /// The rotation of `m` is applied in world-space, after the box's own rotation.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<Real>) -> Self {
        Self::new(
            m * self.center,
            self.half_extents,
            m.rotation.to_rotation_matrix().into_inner() * self.rotation,
        )
    }

    /// Transforms this box by the affine matrix `m`.
    ///
    /// `m` is decomposed into the column norms `(sx, sy, sz)` of its linear part and
    /// the rotation left once those scales are divided out. A negative determinant
    /// flips the sign of `sx` so the extracted rotation stays right-handed.
    ///
    /// The extracted rotation is composed on the left of the box's rotation, i.e., it
    /// acts in world-space after the box's local rotation:
    /// `new_rotation = extracted_rotation * rotation`. The half-extents are multiplied
    /// by `(|sx|, |sy|, |sz|)` and the center goes through the whole matrix.
    ///
    /// Only the scales along the columns of `m` are tracked: for a non-uniform scale
    /// applied to a rotated box, or for a shear, the result is an approximation of the
    /// true image of the box. The scaled-out columns of a shear are not orthogonal, so
    /// they are orthonormalized (Gram-Schmidt, starting from the first column) to keep
    /// the rotation of the box a pure rotation.
    ///
    /// If one column of `m` has a zero norm it is rebuilt as the cross product of the
    /// two others. If several columns vanish, or the remaining ones are parallel, the
    /// rotation of the box is kept as is.
    pub fn transform_by_matrix(&self, m: &HomogeneousMatrix<Real>) -> Self {
        let linear: Matrix<Real> = m.fixed_view::<3, 3>(0, 0).into_owned();
        let mut scale = Vector::new(
            linear.column(0).norm(),
            linear.column(1).norm(),
            linear.column(2).norm(),
        );

        if linear.determinant() < 0.0 {
            scale.x = -scale.x;
        }

        let rotation = match extract_rotation(&linear, &scale) {
            Some(extracted) => extracted * self.rotation,
            None => {
                log::debug!("Transform matrix has rank < 2; keeping the OBB rotation.");
                self.rotation
            }
        };

        Self::new(
            m.transform_point(&self.center),
            self.half_extents.component_mul(&scale.abs()),
            rotation,
        )
    }

    /// Tolerant comparison of two boxes, component by component.
    ///
    /// See [`utils::hybrid_eq`].
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        utils::hybrid_eq_slices(self.center.coords.as_slice(), other.center.coords.as_slice())
            && utils::hybrid_eq_slices(self.half_extents.as_slice(), other.half_extents.as_slice())
            && utils::hybrid_eq_slices(self.rotation.as_slice(), other.rotation.as_slice())
    }

    /// Exact comparison of all the components of two boxes.
    #[inline]
    pub fn exact_equals(&self, other: &Self) -> bool {
        self == other
    }
}

/// Divides each column of `linear` by the matching entry of `scale` and orthonormalizes
/// the result into a right-handed basis.
///
/// Returns `None` if more than one column has a (near) zero scale, or if no basis can be
/// built from the remaining columns.
fn extract_rotation(linear: &Matrix<Real>, scale: &Vector<Real>) -> Option<Matrix<Real>> {
    let mut columns = [Vector::zeros(); DIM];
    let mut degenerate = None;

    for i in 0..DIM {
        if scale[i].abs() <= DEFAULT_EPSILON {
            if degenerate.is_some() {
                return None;
            }
            degenerate = Some(i);
        } else {
            columns[i] = linear.column(i) / scale[i];
        }
    }

    if let Some(i) = degenerate {
        log::debug!("Transform matrix collapses axis {i}; rebuilding it from the other two.");
        let (j, k) = ((i + 1) % DIM, (i + 2) % DIM);
        columns[i] = columns[j].cross(&columns[k]);
    }

    let x = columns[0].try_normalize(DEFAULT_EPSILON)?;
    let y = (columns[1] - x * x.dot(&columns[1])).try_normalize(DEFAULT_EPSILON)?;

    Some(Matrix::from_columns(&[x, y, x.cross(&y)]))
}

impl AbsDiffEq for Obb {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        Real::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.center.abs_diff_eq(&other.center, epsilon)
            && self.half_extents.abs_diff_eq(&other.half_extents, epsilon)
            && self.rotation.abs_diff_eq(&other.rotation, epsilon)
    }
}

impl RelativeEq for Obb {
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
        self.center.relative_eq(&other.center, epsilon, max_relative)
            && self
                .half_extents
                .relative_eq(&other.half_extents, epsilon, max_relative)
            && self
                .rotation
                .relative_eq(&other.rotation, epsilon, max_relative)
    }
}
