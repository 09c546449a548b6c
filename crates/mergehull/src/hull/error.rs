use std::fmt;

use thiserror::Error;

use crate::geom::Point;

/// Which bridging edge a tangent search was looking for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bridge {
    Upper,
    Lower,
}

/// Which sub-hull a cursor walks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HullSide {
    Left,
    Right,
}

impl fmt::Display for Bridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Bridge::Upper => "upper",
            Bridge::Lower => "lower",
        })
    }
}

impl fmt::Display for HullSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HullSide::Left => "left",
            HullSide::Right => "right",
        })
    }
}

/// Failures of the merge-hull computation.
///
/// None of these are retried: the computation is a pure function, so the
/// same input always fails the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    #[error("cannot build a hull from an empty point set")]
    EmptyInput,

    /// Input is not strictly increasing (x, then y) at `index`; this also
    /// reports duplicates.
    #[error("input is not sorted and deduplicated at index {index}")]
    UnsortedInput { index: usize },

    #[error("coordinate out of exact range at index {index}")]
    CoordinateOutOfRange { index: usize },

    /// The bounded tangent search ran out of steps: the sub-hulls are not
    /// convex, not clockwise, or not separated by x.
    #[error("degenerate geometry: {bridge} bridge search on the {side} hull did not terminate")]
    DegenerateGeometry { bridge: Bridge, side: HullSide },

    #[error("bridge endpoint ({point}) is not a vertex of its hull")]
    DetachedBridge { point: Point },
}
