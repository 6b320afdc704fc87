use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, DIM};

impl Aabb {
    /// Computes the [`Aabb`] of the triangle `abc`.
    #[inline]
    pub fn from_triangle(a: &Point<Real>, b: &Point<Real>, c: &Point<Real>) -> Aabb {
        let mut min = Point::origin();
        let mut max = Point::origin();

        for d in 0..DIM {
            min[d] = a[d].min(b[d]).min(c[d]);
            max[d] = a[d].max(b[d]).max(c[d]);
        }

        Aabb::new(min, max)
    }
}
