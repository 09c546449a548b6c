//! Hull of a random integer cloud, printed in the output file format.
//!
//! Usage:
//!   cargo run -p mergehull --example random_hull -- [count] [range] [seed]

use mergehull::gen::{random_points, GenCfg, ReplayToken};
use mergehull::io::{normalize_points, write_hull};
use mergehull::compute_convex_hull;

fn main() {
    let mut args = std::env::args().skip(1);
    let mut next = |default: u64| {
        args.next()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(default)
    };
    let count = next(50) as usize;
    let range = next(100) as i64;
    let seed = next(2025);

    let raw = random_points(GenCfg { range, count }, ReplayToken::new(seed));
    let pts = normalize_points(raw);
    match compute_convex_hull(&pts) {
        Ok(hull) => {
            eprintln!("{} unique points -> {} hull vertices", pts.len(), hull.len());
            if let Err(e) = write_hull(std::io::stdout().lock(), &hull) {
                eprintln!("write failed: {e}");
            }
        }
        Err(e) => eprintln!("hull failed: {e}"),
    }
}
