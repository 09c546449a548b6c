//! Bridge (tangent) search between two clockwise hulls split by x.
//!
//! Each hull is walked through a `Cursor`: a current index with wrap-around
//! predecessor/successor. A candidate edge is accepted once no neighbour of
//! either endpoint lies strictly on its outer (left) side.
//!
//! Walk directions, starting from the left hull's greatest and the right
//! hull's smallest vertex:
//! - upper: left cursor counterclockwise, right cursor clockwise;
//! - lower: left cursor clockwise, right cursor counterclockwise.
//!
//! Both searches start from the same extreme pair; the lower search never
//! resumes from the upper bridge.
//!
//! Every cursor may advance at most `hull.len()` times per search; one more
//! step means the inputs were not convex, clockwise, and x-separated, and the
//! search fails with `DegenerateGeometry` instead of cycling.

use super::{Bridge, Hull, HullError, HullSide};
use crate::geom::{side_of, Edge, Point, Side};

/// Upper and lower bridging edges of a merge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bridges {
    /// Tail on the left hull, head on the right hull.
    pub upper: Edge,
    /// Tail on the right hull, head on the left hull.
    pub lower: Edge,
}

struct Cursor<'a> {
    hull: &'a Hull,
    side: HullSide,
    idx: usize,
    steps: usize,
}

impl<'a> Cursor<'a> {
    fn new(hull: &'a Hull, side: HullSide, idx: usize) -> Self {
        Self {
            hull,
            side,
            idx,
            steps: 0,
        }
    }

    #[inline]
    fn current(&self) -> Point {
        self.hull.vertices()[self.idx]
    }

    /// A neighbour of the current vertex lies strictly outside `edge`.
    fn violates(&self, edge: Edge) -> bool {
        if self.hull.len() < 2 {
            return false;
        }
        let v = self.hull.vertices();
        side_of(edge, v[self.hull.pred(self.idx)]) == Side::Left
            || side_of(edge, v[self.hull.succ(self.idx)]) == Side::Left
    }

    fn advance(&mut self, clockwise: bool, bridge: Bridge) -> Result<(), HullError> {
        if self.steps == self.hull.len() {
            return Err(HullError::DegenerateGeometry {
                bridge,
                side: self.side,
            });
        }
        self.idx = if clockwise {
            self.hull.succ(self.idx)
        } else {
            self.hull.pred(self.idx)
        };
        self.steps += 1;
        Ok(())
    }
}

/// Find the upper and lower bridges between `left` and `right`.
///
/// Pre: both hulls non-empty and clockwise (or flat); every vertex of `left`
/// is lexicographically smaller than every vertex of `right`.
pub fn find_bridges(left: &Hull, right: &Hull) -> Result<Bridges, HullError> {
    if left.is_empty() || right.is_empty() {
        return Err(HullError::EmptyInput);
    }
    let l0 = left
        .iter()
        .enumerate()
        .max_by_key(|&(_, p)| *p)
        .map_or(0, |(i, _)| i);
    let r0 = right
        .iter()
        .enumerate()
        .min_by_key(|&(_, p)| *p)
        .map_or(0, |(i, _)| i);
    let upper = search(left, right, l0, r0, Bridge::Upper)?;
    let lower = search(left, right, l0, r0, Bridge::Lower)?;
    Ok(Bridges { upper, lower })
}

fn search(
    left: &Hull,
    right: &Hull,
    l0: usize,
    r0: usize,
    bridge: Bridge,
) -> Result<Edge, HullError> {
    let mut l = Cursor::new(left, HullSide::Left, l0);
    let mut r = Cursor::new(right, HullSide::Right, r0);
    let left_clockwise = bridge == Bridge::Lower;
    loop {
        let edge = match bridge {
            Bridge::Upper => Edge::new(l.current(), r.current()),
            Bridge::Lower => Edge::new(r.current(), l.current()),
        };
        if l.violates(edge) {
            l.advance(left_clockwise, bridge)?;
        } else if r.violates(edge) {
            r.advance(!left_clockwise, bridge)?;
        } else {
            return Ok(edge);
        }
    }
}
