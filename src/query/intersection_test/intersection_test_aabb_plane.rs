use crate::bounding_volume::Aabb;
use crate::math::DIM;
use crate::shape::Plane;

/// Tests if an AABB intersects a plane.
///
/// The box intersects the plane if its vertices are not all strictly on the same side of
/// it. An empty AABB intersects nothing.
#[inline]
pub fn intersection_test_aabb_plane(aabb: &Aabb, plane: &Plane) -> bool {
    if aabb.is_empty() {
        return false;
    }

    // Range of `normal · p` for `p` in the box.
    let mut min = 0.0;
    let mut max = 0.0;

    for i in 0..DIM {
        let n = plane.normal[i];

        if n > 0.0 {
            min += n * aabb.mins[i];
            max += n * aabb.maxs[i];
        } else if n < 0.0 {
            min += n * aabb.maxs[i];
            max += n * aabb.mins[i];
        }
    }

    min <= -plane.constant && max >= -plane.constant
}
