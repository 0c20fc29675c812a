//! Route timeline construction.
//!
//! Turns a route's flat segment list into the rows of a vertical timeline
//! with transfer markers. Line colors come from a [`LineColors`] lookup and
//! only affect rendering, never the row layout.

mod colors;
mod rows;

pub use colors::{ColorToken, LineColors, NEUTRAL_COLOR, RailwayPalette};
pub use rows::{TimelineRow, build_timeline};
