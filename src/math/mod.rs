//! Mathematical utilities: coordinates, boxes and curves

pub mod aabb;
pub mod vector;
pub mod spline;

pub use aabb::Aabb;
pub use vector::{Direction, FlipDirection, FACE_OFFSETS};
pub use spline::{KochanekBartels, Node};
