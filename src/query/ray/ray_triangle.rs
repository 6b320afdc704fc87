use crate::math::{Point, Real};
use crate::query::Ray;

/// The result of a successful ray/triangle intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayTriangleHit {
    /// The ray parameter `t` of the hit point `ray.origin + ray.dir * t`.
    pub time_of_impact: Real,
    /// `time_of_impact` normalized by the ray length, in `[0, 1]`.
    pub fraction: Real,
    /// Whether the ray hit the side of the triangle its geometric normal `(b - a) × (c - a)`
    /// points to, i.e., whether the ray direction and that normal have a negative dot product.
    pub front_facing: bool,
}

/// Computes the intersection between the triangle `abc` and a bounded ray.
///
/// When `backface_culling` is `true`, hits on the back side of the triangle (the ray travels
/// along its normal `(b - a) × (c - a)`) are discarded.
///
/// A ray parallel to the plane of the triangle never hits it, even if it lies in that plane.
/// Degenerate triangles are never hit either.
pub fn ray_triangle_intersection(
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
    ray: &Ray,
    backface_culling: bool,
) -> Option<RayTriangleHit> {
    let ab = *b - *a;
    let ac = *c - *a;
    let n = ab.cross(&ac);

    let mut d = ray.dir.dot(&n);
    let sign: Real;

    if d > 0.0 {
        if backface_culling {
            return None;
        }
        sign = 1.0;
    } else if d < 0.0 {
        sign = -1.0;
        d = -d;
    } else {
        // The ray is parallel to the triangle plane.
        return None;
    }

    let ap = ray.origin - *a;

    // Barycentric coordinates of the hit point, scaled by `d`.
    let v = sign * ray.dir.dot(&ap.cross(&ac));
    if v < 0.0 {
        return None;
    }

    let w = sign * ray.dir.dot(&ab.cross(&ap));
    if w < 0.0 || v + w > d {
        return None;
    }

    let q = -sign * ap.dot(&n);
    if q < 0.0 {
        // The triangle is behind the ray origin.
        return None;
    }

    let time_of_impact = q / d;
    if time_of_impact > ray.length {
        return None;
    }

    let fraction = if ray.length > 0.0 {
        time_of_impact / ray.length
    } else {
        0.0
    };

    Some(RayTriangleHit {
        time_of_impact,
        fraction,
        front_facing: sign < 0.0,
    })
}
