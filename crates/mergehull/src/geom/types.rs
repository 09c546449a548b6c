//! Exact 2D value types: `Point`, `Edge`, and the sign enums `Turn`, `Side`.
//!
//! - `Point` orders lexicographically (x, then y); that is the sort order the
//!   divide-and-conquer driver expects.
//! - Coordinates are `i64` with magnitude below `COORD_LIMIT`; vectors widen to
//!   `i128`, so every cross product of in-range points is exact.

use std::fmt;

use nalgebra::Vector2;

/// Exclusive bound on coordinate magnitude. Differences stay below 2^63, so
/// products stay below 2^126 and a cross product fits in `i128`.
pub const COORD_LIMIT: i64 = 1 << 62;

/// Exact integer point in the plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Both coordinates strictly inside `(-COORD_LIMIT, COORD_LIMIT)`.
    #[inline]
    pub fn in_range(self) -> bool {
        self.x.unsigned_abs() < COORD_LIMIT as u64 && self.y.unsigned_abs() < COORD_LIMIT as u64
    }

    /// Vector from `self` to `other`, widened for exact products.
    #[inline]
    pub fn to(self, other: Point) -> Vector2<i128> {
        Vector2::new(
            other.x as i128 - self.x as i128,
            other.y as i128 - self.y as i128,
        )
    }
}

impl From<(i64, i64)> for Point {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Directed edge `tail → head`; defines a left and a right half-plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    pub tail: Point,
    pub head: Point,
}

impl Edge {
    #[inline]
    pub const fn new(tail: Point, head: Point) -> Self {
        Self { tail, head }
    }
    #[inline]
    pub fn reversed(self) -> Self {
        Self {
            tail: self.head,
            head: self.tail,
        }
    }
}

/// Rotational sense of an ordered point triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Collinear,
}

/// Position of a point relative to a directed edge.
///
/// `Right` is the interior side of every edge of a clockwise hull.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    On,
}
