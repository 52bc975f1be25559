//! This module has all the types and functions for building a buffer ring point by point while
//! cutting off hooklet loops.
mod loop_area;
mod observer;
mod point;
mod ring_builder;
mod ring_source;
mod ring_types;
mod segment_intersect;
mod span_tracker;

pub use loop_area::*;
pub use observer::*;
pub use point::*;
pub use ring_builder::*;
pub use ring_source::*;
pub use ring_types::*;
pub use segment_intersect::*;
pub use span_tracker::*;
