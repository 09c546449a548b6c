use anyhow::{ensure, Context, Result};
use clap::{Parser, Subcommand};
use mergehull::gen::{random_points, GenCfg, ReplayToken};
use mergehull::io::{read_points, write_hull, write_points};
use mergehull::{compute_convex_hull_with, Hull, HullCfg, Point};
use serde::Serialize;
use serde_json::json;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Divide-and-conquer convex hulls over integer point files")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Compute the convex hull of a point file and write it to `out`
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Recurse on the rayon pool
        #[arg(long)]
        parallel: bool,
        /// Verify subset, orientation and enclosure before writing
        #[arg(long)]
        check: bool,
    },
    /// Write a random point file (count line + `x y` pairs)
    Gen {
        /// Coordinates are drawn from 1..=range+1
        #[arg(long, default_value_t = 100)]
        range: i64,
        #[arg(long, default_value_t = 1000)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print version and code revision as JSON
    Report,
}

/// Counts logged and recorded for one `hull` run.
#[derive(Debug, Serialize)]
struct HullStats {
    points: usize,
    hull: usize,
    flat: bool,
    elapsed_ms: u128,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            parallel,
            check,
        } => run_hull(&input, &out, parallel, check).map(|_| ()),
        Action::Gen {
            range,
            count,
            seed,
            out,
        } => run_gen(GenCfg { range, count }, seed, &out),
        Action::Report => report(),
    }
}

fn run_hull(input: &Path, out: &Path, parallel: bool, check: bool) -> Result<HullStats> {
    tracing::info!(input = %input.display(), out = %out.display(), parallel, "hull");
    let file = File::open(input).with_context(|| format!("opening {}", input.display()))?;
    let points =
        read_points(BufReader::new(file)).with_context(|| format!("reading {}", input.display()))?;

    let cfg = HullCfg {
        parallel,
        ..HullCfg::default()
    };
    let started = Instant::now();
    let hull = compute_convex_hull_with(&points, cfg)
        .with_context(|| format!("computing hull of {}", input.display()))?;
    let stats = HullStats {
        points: points.len(),
        hull: hull.len(),
        flat: hull.is_flat(),
        elapsed_ms: started.elapsed().as_millis(),
    };
    tracing::info!(
        points = stats.points,
        hull = stats.hull,
        flat = stats.flat,
        elapsed_ms = stats.elapsed_ms as u64,
        "hull_done"
    );
    if check {
        verify(&points, &hull)?;
        tracing::info!("check_passed");
    }

    create_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_hull(BufWriter::new(file), &hull).with_context(|| format!("writing {}", out.display()))?;

    let payload = Payload::new(
        "hull",
        json!({
            "input": input.to_string_lossy(),
            "parallel": parallel,
            "check": check
        }),
    )
    .with_stats(serde_json::to_value(&stats)?);
    write_sidecar(out, payload)?;
    Ok(stats)
}

/// Subset, no duplicates, clockwise order, and enclosure of every input point.
fn verify(points: &[Point], hull: &Hull) -> Result<()> {
    let input: HashSet<Point> = points.iter().copied().collect();
    let mut seen = HashSet::with_capacity(hull.len());
    for &v in hull {
        ensure!(input.contains(&v), "hull vertex ({v}) is not an input point");
        ensure!(seen.insert(v), "hull vertex ({v}) repeats");
    }
    if !hull.is_flat() {
        ensure!(hull.signed_area2() < 0, "hull is not clockwise");
    }
    if let Some(p) = points.iter().find(|&&p| !hull.encloses(p)) {
        anyhow::bail!("input point ({p}) lies outside the hull");
    }
    Ok(())
}

fn run_gen(cfg: GenCfg, seed: u64, out: &Path) -> Result<()> {
    tracing::info!(range = cfg.range, count = cfg.count, seed, out = %out.display(), "gen");
    let points = random_points(cfg, ReplayToken::new(seed));
    create_parent(out)?;
    let file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    write_points(BufWriter::new(file), &points)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        "gen",
        json!({ "range": cfg.range, "count": cfg.count, "seed": seed }),
    );
    write_sidecar(out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "version": mergehull::VERSION,
        "code_rev": provenance::current_git_rev(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn create_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating dir {}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn hull_command_writes_output_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("points.txt");
        fs::write(&input, "6\n0 0\n0 4\n4 0\n4 4\n2 2\n4 4\n").unwrap();
        let out = dir.path().join("nested/hull.txt");
        let stats = run_hull(&input, &out, false, true).unwrap();
        assert_eq!(stats.points, 5);
        assert_eq!(stats.hull, 4);
        assert!(!stats.flat);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "4\n0 0\n0 4\n4 4\n4 0\n"
        );
        assert!(dir.path().join("nested/hull.provenance.json").exists());
    }

    #[test]
    fn gen_then_hull_round_trip() {
        let dir = tempdir().unwrap();
        let pts = dir.path().join("rand.txt");
        run_gen(
            GenCfg {
                range: 50,
                count: 300,
            },
            9,
            &pts,
        )
        .unwrap();
        let out = dir.path().join("rand_hull.txt");
        let stats = run_hull(&pts, &out, true, true).unwrap();
        assert!(stats.hull >= 3 && stats.hull <= stats.points);
    }

    #[test]
    fn hull_command_reports_bad_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.txt");
        fs::write(&input, "0\n").unwrap();
        let err = run_hull(&input, &dir.path().join("o.txt"), false, false).unwrap_err();
        assert!(format!("{err:#}").contains("empty point set"));
        let missing = dir.path().join("missing.txt");
        assert!(run_hull(&missing, &dir.path().join("o.txt"), false, false).is_err());
    }

    #[test]
    fn verify_flags_foreign_vertices() {
        let points = vec![Point::new(0, 0), Point::new(1, 0), Point::new(0, 1)];
        let hull = mergehull::compute_convex_hull(&points).unwrap();
        assert!(verify(&points, &hull).is_ok());
        let other = mergehull::compute_convex_hull(&[Point::new(5, 5)]).unwrap();
        assert!(verify(&points, &other).is_err());
    }
}
