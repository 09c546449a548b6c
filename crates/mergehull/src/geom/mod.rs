//! Exact 2D primitives and the orientation oracle.
//!
//! Purpose
//! - Value types for integer points and directed edges.
//! - Zero-tolerance sign tests (`orientation`, `side_of`) used by every
//!   stage of the merge hull.
//!
//! Conventions
//! - y points up; a positive cross product is a counterclockwise turn.
//! - For a directed edge, `Side::Right` is the interior of a clockwise hull,
//!   `Side::Left` is outside.

mod orient;
mod types;

pub use orient::{all_collinear, cross, orientation, side_of};
pub use types::{Edge, Point, Side, Turn, COORD_LIMIT};
