//! Divide-and-conquer ("merge hull") convex hull over exact integer points.
//!
//! Pipeline
//! - `driver`: recurse over index ranges of one sorted slice.
//! - `base`: hulls of 1, 2 or 3 points.
//! - `tangent`: upper/lower bridges between two clockwise sub-hulls.
//! - `splice`: stitch the outer arcs of both sub-hulls along the bridges.
//!
//! Output conventions
//! - Clockwise vertex order, starting at the lexicographically smallest point.
//! - All-collinear input yields a flat "hull": every point, in sorted order.
//!   Callers should treat this as a line from one extreme to the other, not
//!   as a closed polygon.

mod base;
mod driver;
mod error;
mod splice;
mod tangent;

pub use base::base_case;
pub use driver::{compute_convex_hull, compute_convex_hull_with, merge_hulls};
pub use error::{Bridge, HullError, HullSide};
pub use splice::splice;
pub use tangent::{find_bridges, Bridges};

use crate::geom::{all_collinear, cross, side_of, Edge, Point, Side};

/// Driver configuration.
#[derive(Clone, Copy, Debug)]
pub struct HullCfg {
    /// Run the two halves of large ranges on the rayon pool.
    pub parallel: bool,
    /// Ranges shorter than this recurse sequentially even when `parallel` is set.
    pub min_parallel_len: usize,
}

impl Default for HullCfg {
    fn default() -> Self {
        Self {
            parallel: false,
            min_parallel_len: 4096,
        }
    }
}

/// Ordered hull boundary. Immutable once built.
///
/// Invariants:
/// - no duplicate vertices;
/// - clockwise when the vertices are not all collinear;
/// - flat hulls list their points from one extreme to the other.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Hull {
    vertices: Vec<Point>,
}

impl Hull {
    pub(crate) fn from_vec(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    #[inline]
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.vertices.iter()
    }
    pub fn into_vec(self) -> Vec<Point> {
        self.vertices
    }

    /// Index of `p` among the vertices.
    pub fn position(&self, p: Point) -> Option<usize> {
        self.vertices.iter().position(|&v| v == p)
    }

    /// Clockwise predecessor index (wraps).
    #[inline]
    pub fn pred(&self, i: usize) -> usize {
        (i + self.len() - 1) % self.len()
    }
    /// Clockwise successor index (wraps).
    #[inline]
    pub fn succ(&self, i: usize) -> usize {
        (i + 1) % self.len()
    }

    /// All vertices on one line (always true below three vertices).
    pub fn is_flat(&self) -> bool {
        all_collinear(&self.vertices)
    }

    /// Twice the signed shoelace area; negative for clockwise order.
    pub fn signed_area2(&self) -> i128 {
        let Some(&origin) = self.vertices.first() else {
            return 0;
        };
        self.vertices
            .windows(2)
            .map(|w| cross(origin, w[0], w[1]))
            .sum()
    }

    /// True if `p` is on the boundary or inside.
    ///
    /// Flat hulls contain exactly the points of the segment between their
    /// extremes.
    pub fn encloses(&self, p: Point) -> bool {
        if self.is_flat() {
            let (Some(&a), Some(&b)) = (self.vertices.first(), self.vertices.last()) else {
                return false;
            };
            return cross(a, b, p) == 0
                && p.x >= a.x.min(b.x)
                && p.x <= a.x.max(b.x)
                && p.y >= a.y.min(b.y)
                && p.y <= a.y.max(b.y);
        }
        (0..self.len()).all(|k| {
            let e = Edge::new(self.vertices[k], self.vertices[self.succ(k)]);
            side_of(e, p) != Side::Left
        })
    }
}

impl<'a> IntoIterator for &'a Hull {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

impl From<Hull> for Vec<Point> {
    fn from(h: Hull) -> Self {
        h.vertices
    }
}
