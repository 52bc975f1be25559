//! Core 2D math: vectors, parametric segment helpers and bounding boxes.
mod base_math;
mod vector2;

pub use base_math::*;
pub use vector2::{Vector2, vec2};
