use std::collections::HashSet;

use super::{Bridges, Hull, HullError};
use crate::geom::Point;

/// Stitch `left` and `right` along their bridges into one clockwise hull.
///
/// Walk order: left hull from the lower-bridge head clockwise to the
/// upper-bridge tail, across the upper bridge, right hull from the
/// upper-bridge head clockwise to the lower-bridge tail, and back across the
/// lower bridge. Arcs wrap through index 0 when their end index is smaller
/// than their start index.
///
/// The result is deduplicated (first occurrence wins) and rotated to start
/// at its lexicographically smallest vertex.
pub fn splice(left: &Hull, right: &Hull, bridges: &Bridges) -> Result<Hull, HullError> {
    let upper_tail = locate(left, bridges.upper.tail)?;
    let upper_head = locate(right, bridges.upper.head)?;
    let lower_tail = locate(right, bridges.lower.tail)?;
    let lower_head = locate(left, bridges.lower.head)?;

    let lv = left.vertices();
    let rv = right.vertices();
    let mut seq = Vec::with_capacity(left.len() + right.len());
    match (upper_tail == lower_head, upper_head == lower_tail) {
        // both bridges pinch to a single vertex on each side
        (true, true) => seq.extend([lv[upper_tail], rv[upper_head]]),
        (true, false) => {
            seq.push(lv[upper_tail]);
            seq.extend(arc(right, upper_head, lower_tail));
        }
        (false, true) => {
            seq.extend(arc(left, lower_head, upper_tail));
            seq.push(rv[upper_head]);
        }
        (false, false) => {
            seq.extend(arc(left, lower_head, upper_tail));
            seq.extend(arc(right, upper_head, lower_tail));
        }
    }
    Ok(canonical(dedup(seq)))
}

fn locate(hull: &Hull, p: Point) -> Result<usize, HullError> {
    hull.position(p)
        .ok_or(HullError::DetachedBridge { point: p })
}

/// Vertices `from..=to` walking clockwise, wrapping past the end.
fn arc(hull: &Hull, from: usize, to: usize) -> impl Iterator<Item = Point> + '_ {
    let n = hull.len();
    let len = (to + n - from) % n + 1;
    (0..len).map(move |k| hull.vertices()[(from + k) % n])
}

fn dedup(seq: Vec<Point>) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(seq.len());
    seq.into_iter().filter(|p| seen.insert(*p)).collect()
}

fn canonical(mut vertices: Vec<Point>) -> Hull {
    if let Some(k) = vertices
        .iter()
        .enumerate()
        .min_by_key(|&(_, p)| *p)
        .map(|(i, _)| i)
    {
        vertices.rotate_left(k);
    }
    Hull::from_vec(vertices)
}
