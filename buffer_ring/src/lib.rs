//! Streaming construction of buffer (offset) polygon rings.
//!
//! A driver generating an offset trace appends points one at a time through
//! [ring::RingBuilder]. Spans of the trace near concave corners are tracked and each new edge is
//! tested against them, loops that fold back over the trace ("hooklets") are cut off the ring as
//! soon as they are closed.
#[macro_use]
mod macros;
pub mod core;
pub mod ring;
