//! Plain-text point and hull files.
//!
//! Format (both directions): a count, then that many `x y` integer pairs.
//! The reader is whitespace-agnostic; the writers emit one pair per line.
//!
//! ```text
//! 3
//! 0 0
//! 4 0
//! 2 3
//! ```

use std::collections::HashSet;
use std::io::{BufRead, Write};

use thiserror::Error;

use crate::geom::Point;
use crate::hull::Hull;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("missing point count")]
    MissingCount,
    #[error("line {line}: invalid integer {token:?}")]
    InvalidNumber { line: usize, token: String },
    #[error("expected {expected} points, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Read a point file and return its points deduplicated and sorted by (x, y),
/// ready for [`crate::compute_convex_hull`].
pub fn read_points<R: BufRead>(reader: R) -> Result<Vec<Point>, FormatError> {
    let raw = read_raw_points(reader)?;
    Ok(normalize_points(raw))
}

/// Read a point file as written, keeping order and duplicates.
pub fn read_raw_points<R: BufRead>(reader: R) -> Result<Vec<Point>, FormatError> {
    let mut tokens = Tokens::new(reader);
    let expected = match tokens.next_int()? {
        Some((_, n)) if n >= 0 => n as usize,
        Some((line, n)) => {
            return Err(FormatError::InvalidNumber {
                line,
                token: n.to_string(),
            })
        }
        None => return Err(FormatError::MissingCount),
    };
    let mut points = Vec::with_capacity(expected.min(1 << 20));
    while points.len() < expected {
        let (Some((_, x)), Some((_, y))) = (tokens.next_int()?, tokens.next_int()?) else {
            return Err(FormatError::Truncated {
                expected,
                found: points.len(),
            });
        };
        points.push(Point::new(x, y));
    }
    Ok(points)
}

/// Deduplicate through a hash set, then sort by (x, y).
pub fn normalize_points<I: IntoIterator<Item = Point>>(points: I) -> Vec<Point> {
    let unique: HashSet<Point> = points.into_iter().collect();
    let mut out: Vec<Point> = unique.into_iter().collect();
    out.sort_unstable();
    out
}

/// Write `hull` as a count line followed by one `x y` line per vertex, in hull order.
pub fn write_hull<W: Write>(writer: W, hull: &Hull) -> std::io::Result<()> {
    write_points(writer, hull.vertices())
}

/// Write raw points in the input format.
pub fn write_points<W: Write>(mut writer: W, points: &[Point]) -> std::io::Result<()> {
    writeln!(writer, "{}", points.len())?;
    for p in points {
        writeln!(writer, "{p}")?;
    }
    writer.flush()
}

/// Integer tokens with their 1-based line numbers.
struct Tokens<R> {
    reader: R,
    line: usize,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            pending: Vec::new().into_iter(),
        }
    }

    fn next_int(&mut self) -> Result<Option<(usize, i64)>, FormatError> {
        loop {
            if let Some(tok) = self.pending.next() {
                return match tok.parse::<i64>() {
                    Ok(v) => Ok(Some((self.line, v))),
                    Err(_) => Err(FormatError::InvalidNumber {
                        line: self.line,
                        token: tok,
                    }),
                };
            }
            let mut buf = String::new();
            if self.reader.read_line(&mut buf)? == 0 {
                return Ok(None);
            }
            self.line += 1;
            self.pending = buf
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}
