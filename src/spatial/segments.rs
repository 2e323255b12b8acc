//! Segment construction and crossing detection for traced paths
//!
//! A path of `n` dots has `n - 1` segments. Two segments that share an
//! endpoint because they are consecutive never count as a crossing, so only
//! pairs `(i, j)` with `j >= i + 2` are tested.

use crate::spatial::coordinates::{Coordinate, index_to_coord};

/// Rotation sense of an ordered triple of points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The three points lie on one line
    Collinear,
    /// Positive cross-product sign in screen coordinates
    Clockwise,
    /// Negative cross-product sign in screen coordinates
    CounterClockwise,
}

/// Straight connection between two consecutive dots of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Dot the segment leaves from
    pub start: Coordinate,
    /// Dot the segment arrives at
    pub end: Coordinate,
}

impl Segment {
    /// Create a segment between two coordinates
    pub const fn new(start: Coordinate, end: Coordinate) -> Self {
        Self { start, end }
    }

    /// Test whether this segment intersects another, touching included
    pub fn intersects(&self, other: &Self) -> bool {
        segments_intersect(self, other)
    }
}

/// Orientation of the ordered triple `(p, q, r)`
///
/// The cross product is evaluated exactly for any `i64` coordinates.
pub const fn orientation(p: Coordinate, q: Coordinate, r: Coordinate) -> Orientation {
    let (pq_x, pq_y) = p.direction_to(q);
    let (qr_x, qr_y) = q.direction_to(r);
    match compare_products(pq_y, qr_x, pq_x, qr_y) {
        0 => Orientation::Collinear,
        1 => Orientation::Clockwise,
        _ => Orientation::CounterClockwise,
    }
}

/// Sign of `a * b - c * d`, as -1, 0 or 1
///
/// Each factor is a difference of two `i64` values, so its magnitude fits in
/// 64 bits and each product's magnitude fits in a `u128`.
const fn compare_products(a: i128, b: i128, c: i128, d: i128) -> i8 {
    let lhs_sign = (a.signum() * b.signum()) as i8;
    let rhs_sign = (c.signum() * d.signum()) as i8;
    if lhs_sign != rhs_sign {
        return if lhs_sign > rhs_sign { 1 } else { -1 };
    }
    if lhs_sign == 0 {
        return 0;
    }

    let lhs = a.unsigned_abs() * b.unsigned_abs();
    let rhs = c.unsigned_abs() * d.unsigned_abs();
    let magnitude = if lhs > rhs {
        1
    } else if lhs < rhs {
        -1
    } else {
        0
    };
    magnitude * lhs_sign
}

/// Check whether `q` lies inside the bounding box spanned by `p` and `r`
///
/// Only meaningful once `p`, `q` and `r` are known to be collinear.
pub fn on_segment(p: Coordinate, q: Coordinate, r: Coordinate) -> bool {
    q.x <= p.x.max(r.x) && q.x >= p.x.min(r.x) && q.y <= p.y.max(r.y) && q.y >= p.y.min(r.y)
}

/// Orientation-based segment intersection test
///
/// Proper crossings are detected from the four orientations; collinear and
/// touching configurations fall back to bounding-box containment.
pub fn segments_intersect(first: &Segment, second: &Segment) -> bool {
    let (p1, q1) = (first.start, first.end);
    let (p2, q2) = (second.start, second.end);

    let o1 = orientation(p1, q1, p2);
    let o2 = orientation(p1, q1, q2);
    let o3 = orientation(p2, q2, p1);
    let o4 = orientation(p2, q2, q1);

    if o1 != o2 && o3 != o4 {
        return true;
    }

    (o1 == Orientation::Collinear && on_segment(p1, p2, q1))
        || (o2 == Orientation::Collinear && on_segment(p1, q2, q1))
        || (o3 == Orientation::Collinear && on_segment(p2, p1, q2))
        || (o4 == Orientation::Collinear && on_segment(p2, q1, q2))
}

/// Build the ordered segments joining consecutive dots of a pattern
pub fn build_segments(pattern: &[i64], grid_size: usize) -> Vec<Segment> {
    pattern
        .windows(2)
        .filter_map(|pair| match pair {
            [from, to] => Some(Segment::new(
                index_to_coord(*from, grid_size),
                index_to_coord(*to, grid_size),
            )),
            _ => None,
        })
        .collect()
}

/// Count intersecting pairs of non-adjacent segments in a pattern
pub fn count_crossings(pattern: &[i64], grid_size: usize) -> usize {
    if pattern.len() < 4 {
        return 0;
    }

    let segments = build_segments(pattern, grid_size);
    let mut crossings = 0;
    for (i, first) in segments.iter().enumerate() {
        for second in segments.iter().skip(i + 2) {
            if first.intersects(second) {
                crossings += 1;
            }
        }
    }

    crossings
}
