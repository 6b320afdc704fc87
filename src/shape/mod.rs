//! Shapes supported by the intersection tests, beyond the bounding volumes.

pub use self::plane::{intersect_three_planes, Plane};

mod plane;
