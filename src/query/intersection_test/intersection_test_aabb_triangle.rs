use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector, DIM};
use num::Zero;

/// Tests if a triangle intersects an AABB.
///
/// This is a separating-axis test on the 13 candidate axes of a box/triangle pair: the 3 face
/// normals of the box, the normal of the triangle, and the 9 cross products between a box
/// axis and a triangle edge. Axes that vanish (degenerate triangles, edges parallel to a box
/// axis) are skipped, so a triangle collapsed to a segment or a point is tested against the
/// remaining axes only.
///
/// Touching shapes are intersecting. An empty AABB intersects nothing. The AABB may be
/// unbounded: it is first clipped by the bounds of the triangle, which leaves their
/// intersection unchanged.
pub fn intersection_test_aabb_triangle(
    aabb: &Aabb,
    a: &Point<Real>,
    b: &Point<Real>,
    c: &Point<Real>,
) -> bool {
    let Some(aabb) = aabb.intersection(&Aabb::from_triangle(a, b, c)) else {
        return false;
    };

    let center = aabb.center();
    let half_extents = aabb.half_extents();

    // Triangle vertices relative to the box center.
    let vertices = [a - center, b - center, c - center];
    let edges = [
        vertices[1] - vertices[0],
        vertices[2] - vertices[1],
        vertices[0] - vertices[2],
    ];

    for i in 0..DIM {
        for edge in &edges {
            let axis = Vector::ith(i, 1.0).cross(edge);

            if is_separating_axis(&axis, &half_extents, &vertices) {
                return false;
            }
        }
    }

    for i in 0..DIM {
        let min = vertices[0][i].min(vertices[1][i]).min(vertices[2][i]);
        let max = vertices[0][i].max(vertices[1][i]).max(vertices[2][i]);

        if max < -half_extents[i] || min > half_extents[i] {
            return false;
        }
    }

    let normal = edges[0].cross(&edges[1]);
    !is_separating_axis(&normal, &half_extents, &vertices)
}

/// Projects the triangle and the box centered at the origin on `axis` and checks if the
/// projections are disjoint.
fn is_separating_axis(
    axis: &Vector<Real>,
    half_extents: &Vector<Real>,
    vertices: &[Vector<Real>; 3],
) -> bool {
    if axis.is_zero() {
        return false;
    }

    let p0 = vertices[0].dot(axis);
    let p1 = vertices[1].dot(axis);
    let p2 = vertices[2].dot(axis);
    let r = half_extents.dot(&axis.abs());

    p0.max(p1).max(p2) < -r || p0.min(p1).min(p2) > r
}
