use crate::random;
use bvkit3d::bounding_volume::{Aabb, BoundingVolume, Obb};
use bvkit3d::math::{Matrix, Point, Real, Rotation, Vector};

fn scaled(obb: &Obb, factor: Real) -> Obb {
    Obb::new(obb.center, obb.half_extents * factor, obb.rotation)
}

#[test]
fn obb_intersection_is_symmetric() {
    let mut rng = random::rng();
    let mut num_intersections = 0;

    for _ in 0..2000 {
        let a = random::obb(&mut rng);
        let b = random::obb(&mut rng);

        // Skip configurations too close to contact for the result to be robust.
        let tight = scaled(&a, 0.999).intersects_obb(&scaled(&b, 0.999));
        let loose = scaled(&a, 1.001).intersects_obb(&scaled(&b, 1.001));

        if tight == loose {
            assert_eq!(a.intersects_obb(&b), b.intersects_obb(&a), "{a:?} {b:?}");
            assert_eq!(a.intersects_obb(&b), tight);
            num_intersections += tight as usize;
        }
    }

    assert!(num_intersections > 0);
}

#[test]
fn obb_intersection_agrees_with_shared_points() {
    let mut rng = random::rng();

    for _ in 0..1000 {
        let a = random::obb(&mut rng);
        let b = random::obb(&mut rng);

        for _ in 0..20 {
            let pt = random::point_in_obb(&mut rng, &a);

            if b.contains_point(&pt) {
                assert!(a.intersects_obb(&b));
                assert!(b.intersects_obb(&a));
                break;
            }
        }

        // Boxes whose enclosing AABBs are disjoint cannot intersect.
        if !a.to_aabb().loosened(1.0e-4).intersects(&b.to_aabb()) {
            assert!(!a.intersects_obb(&b));
        }
    }
}

#[test]
fn obb_touching_and_separated() {
    for half in [0.5, 1.0, 3.0] {
        for i in 0..3 {
            let a = Obb::new(Point::origin(), Vector::repeat(half), Matrix::identity());
            let touching = Obb::new(
                Point::from(Vector::ith(i, 2.0 * half)),
                Vector::repeat(half),
                Matrix::identity(),
            );
            let separated = Obb::new(
                Point::from(Vector::ith(i, 2.01 * half)),
                Vector::repeat(half),
                Matrix::identity(),
            );

            assert!(a.intersects_obb(&touching));
            assert!(touching.intersects_obb(&a));
            assert!(!a.intersects_obb(&separated));
            assert!(!separated.intersects_obb(&a));
        }
    }
}

#[test]
fn obb_aabb() {
    let aabb = Aabb::new(Point::origin(), Point::new(1.0, 1.0, 1.0));
    let rotation = Rotation::from_axis_angle(&Vector::z_axis(), core::f32::consts::FRAC_PI_4);
    let corner_reach = (0.5 as Real) * (2.0 as Real).sqrt();

    // A rotated cube whose corner points toward the +x face of the box.
    let near = Obb::from_center_half_extents_orientation(
        Point::new(1.0 + corner_reach - 0.05, 0.5, 0.5),
        Vector::repeat(0.5),
        &rotation,
    );
    let far = Obb::from_center_half_extents_orientation(
        Point::new(1.0 + corner_reach + 0.05, 0.5, 0.5),
        Vector::repeat(0.5),
        &rotation,
    );

    assert!(near.intersects_aabb(&aabb));
    assert!(!far.intersects_aabb(&aabb));
    assert!(!near.intersects_aabb(&Aabb::new_empty()));

    // The corner stays above a box lowered below y = 0.
    let lowered = Aabb::new(Point::new(0.0, -1.0, 0.0), Point::new(1.0, 0.0, 1.0));
    assert!(!near.intersects_aabb(&lowered));
}
