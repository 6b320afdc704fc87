//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{Ray, RayCast};
pub use self::ray_aabb::RAY_PARALLEL_EPSILON;
pub use self::ray_triangle::{ray_triangle_intersection, RayTriangleHit};

#[doc(hidden)]
pub mod ray;
mod ray_aabb;
mod ray_obb;
mod ray_triangle;
