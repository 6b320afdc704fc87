use crate::random;
use bvkit3d::bounding_volume::{Aabb, BoundingVolume, Obb};
use bvkit3d::math::{Isometry, Point, Real, Translation, Vector};
use bvkit3d::query::{ray_triangle_intersection, Ray, RayCast};
use bvkit3d::utils;

#[test]
fn ray_hits_backface_of_tilted_triangle() {
    let a = Point::new(1.0, 1.0, 0.0);
    let b = Point::new(0.0, 1.0, 1.0);
    let c = Point::new(1.0, 0.0, 1.0);
    let ray = Ray::new(Point::origin(), Vector::new(1.0, 1.0, 1.0).normalize(), 10.0);

    let hit = ray_triangle_intersection(&a, &b, &c, &ray, false).unwrap();
    let expected_toi = 2.0 / (3.0 as Real).sqrt();

    assert!(!hit.front_facing);
    assert_relative_eq!(hit.time_of_impact, expected_toi, epsilon = 1.0e-5);
    assert_relative_eq!(hit.fraction, expected_toi / 10.0, epsilon = 1.0e-5);
    assert!(ray_triangle_intersection(&a, &b, &c, &ray, true).is_none());

    // The triangle lies beyond the end of a unit ray.
    let unit_ray = Ray::new(ray.origin, ray.dir, 1.0);
    assert!(ray_triangle_intersection(&a, &b, &c, &unit_ray, false).is_none());
}

#[test]
fn ray_aabb_bounded_by_its_length() {
    let aabb = Aabb::new(Point::new(-1.0, -1.0, 2.0), Point::new(1.0, 1.0, 4.0));

    assert!(aabb.intersects_local_ray(&Ray::new(Point::origin(), Vector::z(), 10.0)));
    assert!(!aabb.intersects_local_ray(&Ray::new(Point::origin(), Vector::z(), 2.0)));
}

#[test]
fn rays_toward_a_box_hit_its_boundary() {
    let mut rng = random::rng();

    for _ in 0..1000 {
        let aabb = random::aabb(&mut rng);
        let local_target = random::vector(&mut rng, 0.9).component_mul(&aabb.half_extents());
        let target = aabb.center() + local_target;
        let origin = aabb.center() + random::vector(&mut rng, 1.0).normalize() * 10.0;
        let dir = (target - origin).normalize();
        let ray = Ray::new(origin, dir, 20.0);

        let toi = aabb.cast_local_ray(&ray).unwrap();
        let hit = ray.point_at(toi);

        assert!(aabb.loosened(1.0e-4).contains_local_point(&hit));
        if toi > 0.0 {
            assert!(!aabb.loosened(-1.0e-4).contains_local_point(&hit));
        }

        // A ray stopping before the box, or pointing away from it, misses.
        assert!(!aabb.intersects_local_ray(&Ray::new(origin, dir, toi * 0.99)));
        assert!(!aabb.intersects_local_ray(&Ray::new(origin, -dir, 20.0)));
    }
}

#[test]
fn rays_toward_a_positioned_obb_hit_its_boundary() {
    let mut rng = random::rng();

    for _ in 0..1000 {
        let obb = random::obb(&mut rng);
        let pos = Isometry::from_parts(
            Translation::from(random::vector(&mut rng, 5.0)),
            random::rotation(&mut rng),
        );
        let world_obb = obb.transform_by(&pos);

        let target = random::point_in_obb(&mut rng, &world_obb);
        let origin = world_obb.center + random::vector(&mut rng, 1.0).normalize() * 10.0;
        let ray = Ray::new(origin, (target - origin).normalize(), 30.0);

        let toi = obb.cast_ray(&pos, &ray).unwrap();
        let local_toi = world_obb.cast_local_ray(&ray).unwrap();
        assert_relative_eq!(toi, local_toi, epsilon = 1.0e-3);

        let hit = ray.point_at(toi);
        let grown = Obb::new(
            world_obb.center,
            world_obb.half_extents.add_scalar(1.0e-3),
            world_obb.rotation,
        );
        assert!(grown.contains_point(&hit));
    }
}

#[test]
fn segments_through_triangles() {
    let mut rng = random::rng();
    let mut num_tests = 0;

    for _ in 0..1000 {
        let a = random::point(&mut rng, 3.0);
        let b = random::point(&mut rng, 3.0);
        let c = random::point(&mut rng, 3.0);
        let normal = utils::triangle_normal(&a, &b, &c);

        if utils::triangle_area(&a, &b, &c) < 0.1 {
            continue;
        }

        let u = rng.rand_float() * 0.45 + 0.02;
        let v = rng.rand_float() * 0.45 + 0.02;
        let crossing = a + (b - a) * u + (c - a) * v;

        let offset = random::vector(&mut rng, 2.0);
        if offset.norm() < 0.1 || offset.dot(&normal).abs() < 0.1 * offset.norm() {
            continue;
        }

        let ray = Ray::from_segment(&(crossing + offset), &(crossing - offset));
        let hit = ray_triangle_intersection(&a, &b, &c, &ray, false).unwrap();

        assert_relative_eq!(hit.fraction, 0.5, epsilon = 1.0e-3);
        assert_relative_eq!(ray.point_at(hit.time_of_impact), crossing, epsilon = 1.0e-3);
        assert_eq!(hit.front_facing, offset.dot(&normal) > 0.0);

        let culled = ray_triangle_intersection(&a, &b, &c, &ray, true);
        assert_eq!(culled.is_some(), hit.front_facing);

        // Stopping short of the triangle.
        let half = Ray::from_segment(&(crossing + offset), &(crossing + offset * 0.5));
        assert!(ray_triangle_intersection(&a, &b, &c, &half, false).is_none());

        num_tests += 1;
    }

    assert!(num_tests > 100);
}
