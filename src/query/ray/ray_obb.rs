use crate::bounding_volume::{Aabb, Obb};
use crate::math::{Point, Real};
use crate::query::{Ray, RayCast};

impl RayCast for Obb {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray) -> Option<Real> {
        // Express the ray in the box frame, where the box is an AABB centered at the origin.
        let box_ray = Ray::new(
            Point::from(self.rotation.tr_mul(&(ray.origin - self.center))),
            self.rotation.tr_mul(&ray.dir),
            ray.length,
        );
        let local_aabb = Aabb::from_half_extents(Point::origin(), self.half_extents);

        local_aabb.cast_local_ray(&box_ray)
    }
}
