use crate::bounding_volume::Obb;
use crate::math::{Real, DIM};

/// Tests if two oriented boxes intersect.
///
/// This is a separating-axis test on the 15 candidate axes of a box pair: the 3 face normals
/// of each box and the 9 cross products between one axis of each box. All computations are
/// done in the frame of `obb1`.
///
/// `epsilon` is added to every absolute entry of the relative rotation matrix. When two edges
/// are nearly parallel their cross product is close to zero and the projections along it are
/// dominated by rounding errors, the added margin keeps such axes from reporting a separation.
///
/// Touching boxes are intersecting.
pub fn intersection_test_obb_obb(obb1: &Obb, obb2: &Obb, epsilon: Real) -> bool {
    let e1 = &obb1.half_extents;
    let e2 = &obb2.half_extents;

    // Rotation of obb2 expressed in the frame of obb1: r[(i, j)] = axis1_i · axis2_j.
    let r = obb1.rotation.tr_mul(&obb2.rotation);
    let abs_r = r.map(|x| x.abs() + epsilon);
    // Translation between the centers, in the frame of obb1.
    let t = obb1.rotation.tr_mul(&(obb2.center - obb1.center));

    // Face normals of obb1.
    for i in 0..DIM {
        let ra = e1[i];
        let rb = e2.dot(&abs_r.row(i).transpose());

        if t[i].abs() > ra + rb {
            return false;
        }
    }

    // Face normals of obb2.
    for j in 0..DIM {
        let ra = e1.dot(&abs_r.column(j));
        let rb = e2[j];
        let dist = t.dot(&r.column(j));

        if dist.abs() > ra + rb {
            return false;
        }
    }

    // Cross products axis1_i × axis2_j.
    for i in 0..DIM {
        let i1 = (i + 1) % DIM;
        let i2 = (i + 2) % DIM;

        for j in 0..DIM {
            let j1 = (j + 1) % DIM;
            let j2 = (j + 2) % DIM;

            let ra = e1[i1] * abs_r[(i2, j)] + e1[i2] * abs_r[(i1, j)];
            let rb = e2[j1] * abs_r[(i, j2)] + e2[j2] * abs_r[(i, j1)];
            let dist = t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)];

            if dist.abs() > ra + rb {
                return false;
            }
        }
    }

    true
}
