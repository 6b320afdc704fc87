//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};

/// A sphere given by its center and radius.
///
/// Like the other bounding volumes of this crate, its boundary is closed.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct BoundingSphere {
    /// The sphere center.
    pub center: Point<Real>,
    /// The sphere radius.
    pub radius: Real,
}

impl BoundingSphere {
    /// Creates a new bounding sphere.
    pub fn new(center: Point<Real>, radius: Real) -> BoundingSphere {
        BoundingSphere { center, radius }
    }
}

impl BoundingVolume for BoundingSphere {
    #[inline]
    fn center(&self) -> Point<Real> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &BoundingSphere) -> bool {
        let reach = self.radius + other.radius;
        na::distance_squared(&self.center, &other.center) <= reach * reach
    }

    #[inline]
    fn contains(&self, other: &BoundingSphere) -> bool {
        na::distance(&self.center, &other.center) + other.radius <= self.radius
    }

    fn merge(&mut self, other: &BoundingSphere) {
        let delta = other.center - self.center;
        let dist = delta.norm();

        if dist + other.radius <= self.radius {
            return;
        }

        if dist + self.radius <= other.radius {
            *self = *other;
            return;
        }

        // Neither sphere contains the other, so `dist > 0`. The merged sphere spans the
        // segment from the far side of `self` to the far side of `other`.
        let radius = (dist + self.radius + other.radius) * 0.5;
        self.center += delta * ((radius - self.radius) / dist);
        self.radius = radius;
    }

    #[inline]
    fn merged(&self, other: &BoundingSphere) -> BoundingSphere {
        let mut res = *self;
        res.merge(other);
        res
    }

    #[inline]
    fn loosen(&mut self, amount: Real) {
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: Real) -> BoundingSphere {
        BoundingSphere::new(self.center, self.radius + amount)
    }
}
