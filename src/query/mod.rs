//! Non-persistent geometric queries.
//!
//! Ray-casting is achieved by importing the [`RayCast`] trait, implemented by
//! [`Aabb`](crate::bounding_volume::Aabb) and [`Obb`](crate::bounding_volume::Obb).
//! Rays against triangles given as three points use [`ray_triangle_intersection`].
//!
//! # Specific cases
//! The functions exported by the `details` submodule test one pair of primitives known at
//! compile-time. They have the form `intersection_test_[shape1]_[shape2]()`. Most users
//! reach them through the corresponding methods of the bounding volumes, e.g.,
//! [`Aabb::intersects_triangle`](crate::bounding_volume::Aabb::intersects_triangle).

pub use self::ray::{
    ray_triangle_intersection, Ray, RayCast, RayTriangleHit, RAY_PARALLEL_EPSILON,
};

mod intersection_test;
mod ray;

/// Queries dedicated to specific pairs of shapes.
pub mod details {
    pub use super::intersection_test::*;
}
