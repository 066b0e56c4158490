pub(crate) mod args;
mod point;
mod shape;
mod vector;

pub use point::Point;
pub use shape::{Geometry, Shape, ShapeTag};
pub use vector::{Vector, Vector2, Vector3, Vector4};
