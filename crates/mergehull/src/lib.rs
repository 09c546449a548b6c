//! Divide-and-conquer convex hulls over exact integer points.
//!
//! - `geom`: points, edges and the exact orientation oracle.
//! - `hull`: base cases, bridge search, splicing and the recursive driver.
//! - `io`: the count + `x y` pairs text format (reader, writers).
//! - `gen`: seeded random point clouds.
//!
//! The core (`geom`, `hull`) is pure: values in, values out, no I/O.

pub mod gen;
pub mod geom;
pub mod hull;
pub mod io;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{Edge, Point};
pub use hull::{compute_convex_hull, compute_convex_hull_with, Hull, HullCfg, HullError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::gen::{random_points, GenCfg, ReplayToken};
    pub use crate::geom::{orientation, side_of, Edge, Point, Side, Turn};
    pub use crate::hull::{
        compute_convex_hull, compute_convex_hull_with, merge_hulls, Bridges, Hull, HullCfg,
        HullError,
    };
    pub use crate::io::{normalize_points, read_points, write_hull, write_points};
}
