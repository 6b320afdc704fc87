use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, DIM};
use crate::query::{Ray, RayCast};

/// Direction components with a magnitude below this threshold are treated as parallel to the
/// corresponding pair of slabs.
pub const RAY_PARALLEL_EPSILON: Real = 1.0e-10;

impl RayCast for Aabb {
    fn cast_local_ray(&self, ray: &Ray) -> Option<Real> {
        if self.is_empty() {
            return None;
        }

        let mut tmin: Real = 0.0;
        let mut tmax: Real = ray.length;

        for i in 0usize..DIM {
            if ray.dir[i].abs() < RAY_PARALLEL_EPSILON {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) / ray.dir[i];
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) / ray.dir[i];

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmax < tmin {
                    // This covers the case where the box is behind the origin because tmin
                    // is initialized at zero.
                    return None;
                }
            }
        }

        // The end of a ray of non-zero length is not part of it: a box entered exactly
        // at `length` is missed. Rays starting inside the box always hit.
        if tmin > 0.0 && tmin >= ray.length {
            return None;
        }

        Some(tmin)
    }
}
