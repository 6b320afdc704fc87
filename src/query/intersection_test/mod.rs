//! Boolean intersection tests between pairs of primitives.

pub use self::intersection_test_aabb_plane::intersection_test_aabb_plane;
pub use self::intersection_test_aabb_sphere::intersection_test_aabb_sphere;
pub use self::intersection_test_aabb_triangle::intersection_test_aabb_triangle;
pub use self::intersection_test_obb_obb::intersection_test_obb_obb;

mod intersection_test_aabb_plane;
mod intersection_test_aabb_sphere;
mod intersection_test_aabb_triangle;
mod intersection_test_obb_obb;
