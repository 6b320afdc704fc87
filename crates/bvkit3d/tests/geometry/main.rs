#[macro_use]
extern crate approx;
extern crate nalgebra as na;

mod obb_sat;
mod obb_transform;
mod ray_cast;
