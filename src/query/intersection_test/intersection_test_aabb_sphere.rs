use crate::bounding_volume::{Aabb, BoundingSphere};

/// Tests if an AABB intersects a sphere.
///
/// Touching shapes are intersecting. An empty AABB intersects nothing.
#[inline]
pub fn intersection_test_aabb_sphere(aabb: &Aabb, sphere: &BoundingSphere) -> bool {
    if aabb.is_empty() {
        return false;
    }

    let closest = aabb.clamp_point(&sphere.center);
    na::distance_squared(&closest, &sphere.center) <= sphere.radius * sphere.radius
}
