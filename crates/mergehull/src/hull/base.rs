use super::Hull;
use crate::geom::{orientation, Point, Turn};

/// Hull of at most three points, built directly.
///
/// - 1 or 2 points: returned as given.
/// - 3 points: clockwise as given, counterclockwise with the last two swapped,
///   collinear as given (flat hull).
///
/// The driver only calls this with 1..=3 points.
pub fn base_case(points: &[Point]) -> Hull {
    debug_assert!(
        (1..=3).contains(&points.len()),
        "base case called with {} points",
        points.len()
    );
    match *points {
        [a, b, c] => match orientation(a, b, c) {
            Turn::Clockwise | Turn::Collinear => Hull::from_vec(vec![a, b, c]),
            Turn::CounterClockwise => Hull::from_vec(vec![a, c, b]),
        },
        _ => Hull::from_vec(points.to_vec()),
    }
}
