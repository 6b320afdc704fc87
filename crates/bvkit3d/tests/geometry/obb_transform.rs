use crate::random;
use bvkit3d::bounding_volume::Obb;
use bvkit3d::math::{HomogeneousMatrix, Isometry, Matrix, Point, Real, Translation, Vector};

/// Containment test tolerating rounding errors of the transformed box.
fn contains_loosely(obb: &Obb, pt: &Point<Real>) -> bool {
    Obb::new(obb.center, obb.half_extents.add_scalar(1.0e-3), obb.rotation).contains_point(pt)
}

#[test]
fn rigid_and_uniformly_scaled_transforms_map_points_inside() {
    let mut rng = random::rng();

    for _ in 0..300 {
        let obb = random::obb(&mut rng);
        let scale = rng.rand_float() * 3.0 + 0.1;
        let m = HomogeneousMatrix::new_translation(&random::vector(&mut rng, 5.0))
            * random::rotation(&mut rng).to_homogeneous()
            * HomogeneousMatrix::new_scaling(scale);

        let transformed = obb.transform_by_matrix(&m);
        assert_relative_eq!(
            transformed.half_extents,
            obb.half_extents * scale,
            epsilon = 1.0e-4
        );

        for _ in 0..10 {
            let pt = random::point_in_obb(&mut rng, &obb);
            assert!(contains_loosely(&transformed, &m.transform_point(&pt)));
        }
    }
}

#[test]
fn non_uniform_scale_of_axis_aligned_box() {
    let mut rng = random::rng();

    for _ in 0..300 {
        let center = random::point(&mut rng, 3.0);
        let obb = Obb::new(center, random::half_extents(&mut rng), Matrix::identity());
        let scale = random::vector(&mut rng, 2.0);
        let m = random::rotation(&mut rng).to_homogeneous()
            * HomogeneousMatrix::new_nonuniform_scaling(&scale);

        let transformed = obb.transform_by_matrix(&m);

        for _ in 0..10 {
            let pt = random::point_in_obb(&mut rng, &obb);
            assert!(contains_loosely(&transformed, &m.transform_point(&pt)));
        }

        // The transformed box is the exact image: its corners are images of corners.
        if scale.iter().all(|s| s.abs() > 0.1) {
            let inv = m.try_inverse().unwrap();

            for corner in transformed.vertices() {
                assert!(contains_loosely(&obb, &inv.transform_point(&corner)));
            }
        }
    }
}

#[test]
fn isometry_and_matrix_agree() {
    let mut rng = random::rng();

    for _ in 0..300 {
        let obb = random::obb(&mut rng);
        let pos = Isometry::from_parts(
            Translation::from(random::vector(&mut rng, 5.0)),
            random::rotation(&mut rng),
        );

        let by_isometry = obb.transform_by(&pos);
        let by_matrix = obb.transform_by_matrix(&pos.to_homogeneous());

        assert_relative_eq!(by_isometry.center, by_matrix.center, epsilon = 1.0e-4);
        assert_relative_eq!(
            by_isometry.half_extents,
            by_matrix.half_extents,
            epsilon = 1.0e-4
        );
        assert_relative_eq!(by_isometry.rotation, by_matrix.rotation, epsilon = 1.0e-4);

        // Rigid motions preserve intersections.
        let other = random::obb(&mut rng);
        let grown = Obb::new(other.center, other.half_extents * 1.001, other.rotation);
        let shrunk = Obb::new(other.center, other.half_extents * 0.999, other.rotation);

        if grown.intersects_obb(&obb) == shrunk.intersects_obb(&obb) {
            assert_eq!(
                obb.intersects_obb(&other),
                by_isometry.intersects_obb(&other.transform_by(&pos))
            );
        }
    }
}

#[test]
fn composition_order_matters_for_pre_rotated_boxes() {
    let angle = core::f32::consts::FRAC_PI_2;
    let local_rot = na::Rotation3::from_axis_angle(&Vector::z_axis(), angle);
    let obb = Obb::new(
        Point::origin(),
        Vector::new(1.0, 2.0, 3.0),
        local_rot.into_inner(),
    );

    let world_rot = na::Rotation3::from_axis_angle(&Vector::x_axis(), angle);
    let transformed = obb.transform_by_matrix(&world_rot.to_homogeneous());

    // The world rotation applies after the box rotation.
    let expected = world_rot * local_rot;
    let swapped = local_rot * world_rot;

    assert_relative_eq!(transformed.rotation, expected.into_inner(), epsilon = 1.0e-5);
    assert!(!relative_eq!(transformed.rotation, swapped.into_inner(), epsilon = 1.0e-3));
    assert_relative_eq!(transformed.half_extents, obb.half_extents, epsilon = 1.0e-5);
}

#[test]
fn degenerate_scales_keep_a_valid_basis() {
    let obb = Obb::new(Point::new(1.0, 0.0, 0.0), Vector::repeat(1.0), Matrix::identity());

    let flat = obb.transform_by_matrix(&HomogeneousMatrix::new_nonuniform_scaling(
        &Vector::new(1.0, 0.0, 1.0),
    ));
    assert_relative_eq!(flat.half_extents, Vector::new(1.0, 0.0, 1.0));
    assert_relative_eq!(flat.rotation.determinant(), 1.0, epsilon = 1.0e-5);

    let collapsed = obb.transform_by_matrix(&HomogeneousMatrix::new_nonuniform_scaling(
        &Vector::new(0.0, 0.0, 2.0),
    ));
    assert_relative_eq!(collapsed.half_extents, Vector::new(0.0, 0.0, 2.0));
    assert_relative_eq!(collapsed.rotation, obb.rotation);
    assert_relative_eq!(collapsed.center, Point::origin());
}

#[test]
fn sheared_transforms_keep_an_orthonormal_basis() {
    let mut rng = random::rng();

    for _ in 0..300 {
        let obb = random::obb(&mut rng);
        let mut m = HomogeneousMatrix::new_translation(&random::vector(&mut rng, 5.0));
        let linear = Matrix::identity() + Matrix::from_fn(|_, _| random::signed_float(&mut rng));
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&linear);

        if linear.determinant().abs() < 0.1 {
            continue;
        }

        let transformed = obb.transform_by_matrix(&m);
        assert_relative_eq!(
            transformed.rotation.tr_mul(&transformed.rotation),
            Matrix::identity(),
            epsilon = 1.0e-4
        );
        assert_relative_eq!(transformed.rotation.determinant(), 1.0, epsilon = 1.0e-4);
        assert_relative_eq!(transformed.center, m.transform_point(&obb.center), epsilon = 1.0e-4);
    }
}
