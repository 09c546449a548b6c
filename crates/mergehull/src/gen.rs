//! Seeded random point clouds for tests, benches and the `gen` CLI command.
//!
//! - Coordinates are uniform integers in `1..=range + 1` on both axes.
//! - Draws are reproducible from a `ReplayToken { seed, index }`; the index
//!   lets callers enumerate independent clouds from one seed.
//! - Output is raw: unsorted, duplicates kept. Pass it through
//!   `io::normalize_points` before computing a hull.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, COORD_LIMIT};

/// Cloud size and coordinate range.
#[derive(Clone, Copy, Debug)]
pub struct GenCfg {
    pub range: i64,
    pub count: usize,
}

impl Default for GenCfg {
    fn default() -> Self {
        Self {
            range: 100,
            count: 1000,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finaliser.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Draw `cfg.count` points. `cfg.range` is clamped to `[0, COORD_LIMIT - 2]`
/// so every point stays in exact range.
pub fn random_points(cfg: GenCfg, tok: ReplayToken) -> Vec<Point> {
    let mut rng = tok.to_std_rng();
    let hi = cfg.range.clamp(0, COORD_LIMIT - 2) + 1;
    (0..cfg.count)
        .map(|_| Point::new(rng.gen_range(1..=hi), rng.gen_range(1..=hi)))
        .collect()
}
