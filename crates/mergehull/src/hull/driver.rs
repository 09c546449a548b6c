use super::{base_case, find_bridges, splice, Hull, HullCfg, HullError};
use crate::geom::{all_collinear, Point};

/// Convex hull of a sorted, deduplicated point set (default configuration).
///
/// Pre: `points` is non-empty, strictly increasing by (x, y), and every
/// coordinate is below `COORD_LIMIT` in magnitude. Violations are reported as
/// errors, not assumed away.
///
/// Post: every vertex is an input point, no vertex repeats, the order is
/// clockwise (flat input: sorted line), and every input point lies on or
/// inside the result.
pub fn compute_convex_hull(points: &[Point]) -> Result<Hull, HullError> {
    compute_convex_hull_with(points, HullCfg::default())
}

/// Like [`compute_convex_hull`], with explicit driver configuration.
pub fn compute_convex_hull_with(points: &[Point], cfg: HullCfg) -> Result<Hull, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyInput);
    }
    if let Some(index) = points.iter().position(|p| !p.in_range()) {
        return Err(HullError::CoordinateOutOfRange { index });
    }
    if let Some(k) = points.windows(2).position(|w| w[0] >= w[1]) {
        return Err(HullError::UnsortedInput { index: k + 1 });
    }
    solve(points, 0, points.len(), cfg)
}

/// Hull of `points[start..end]`; ranges are passed by value over one slice.
fn solve(points: &[Point], start: usize, end: usize, cfg: HullCfg) -> Result<Hull, HullError> {
    let len = end - start;
    if len <= 3 {
        return Ok(base_case(&points[start..end]));
    }
    let mid = start + len / 2;
    let (left, right) = if cfg.parallel && len >= cfg.min_parallel_len {
        rayon::join(
            || solve(points, start, mid, cfg),
            || solve(points, mid, end, cfg),
        )
    } else {
        (
            solve(points, start, mid, cfg),
            solve(points, mid, end, cfg),
        )
    };
    merge_hulls(&left?, &right?)
}

/// Merge two hulls of x-separated point sets (all of `left` lexicographically
/// before all of `right`).
///
/// Collinear unions stay flat: the two sorted lines are concatenated.
pub fn merge_hulls(left: &Hull, right: &Hull) -> Result<Hull, HullError> {
    if left.is_flat() && right.is_flat() && all_collinear(left.iter().chain(right.iter())) {
        let mut line = Vec::with_capacity(left.len() + right.len());
        line.extend_from_slice(left.vertices());
        line.extend_from_slice(right.vertices());
        return Ok(Hull::from_vec(line));
    }
    let bridges = find_bridges(left, right)?;
    splice(left, right, &bridges)
}
