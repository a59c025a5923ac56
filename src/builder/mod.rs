//! Turtle-graphics builders.
//!
//! Two state machines layered over the sketch container:
//! - [`PolygonBuilder`] evaluates motion commands against an implicit current
//!   point and heading, producing a polygon;
//! - [`RepeatBuilder`] replays a command block a fixed number of times along
//!   a baseline, resetting the heading before each repetition.

pub mod polygon;
pub mod repeat;

pub use polygon::{Motion, PolygonBuilder};
pub use repeat::RepeatBuilder;
