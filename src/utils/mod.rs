//! Various unsorted geometrical and numerical helpers.

pub use self::center::center;
pub use self::hybrid_eq::{hybrid_eq, hybrid_eq_slices};
pub use self::triangle::{triangle_area, triangle_center, triangle_normal, triangle_scaled_normal};

mod center;
mod hybrid_eq;
mod triangle;
