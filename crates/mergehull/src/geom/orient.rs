use super::types::{Edge, Point, Side, Turn};

/// Twice the signed area of triangle (a, b, c); positive for a counterclockwise turn.
#[inline]
pub fn cross(a: Point, b: Point, c: Point) -> i128 {
    let ab = a.to(b);
    let ac = a.to(c);
    ab.x * ac.y - ab.y * ac.x
}

/// Turn direction of the triple (a, b, c). Exact, no tolerance.
#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Turn {
    match cross(a, b, c).signum() {
        1 => Turn::CounterClockwise,
        -1 => Turn::Clockwise,
        _ => Turn::Collinear,
    }
}

/// Side of `p` relative to the directed `edge`.
#[inline]
pub fn side_of(edge: Edge, p: Point) -> Side {
    match cross(edge.tail, edge.head, p).signum() {
        1 => Side::Left,
        -1 => Side::Right,
        _ => Side::On,
    }
}

/// True if every point lies on one line (vacuously for fewer than three).
pub fn all_collinear<'a, I>(points: I) -> bool
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut it = points.into_iter();
    let Some(&a) = it.next() else {
        return true;
    };
    // anchor on the first point distinct from `a`
    let mut b = None;
    for &p in it {
        if let Some(b) = b {
            if cross(a, b, p) != 0 {
                return false;
            }
        } else if p != a {
            b = Some(p);
        }
    }
    true
}
