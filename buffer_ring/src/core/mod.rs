//! Core module has the shared numeric traits and 2D math used by the ring builder.
pub mod math;
pub mod traits;
