//! Vertical split of a bounds polygon into left and right halves

use crate::geometry::polygon::order_around_centroid;
use crate::geometry::{Point, Polygon};
use crate::io::error::Result;

/// Split `bounds` along the vertical line through the middle of its box
///
/// The split line sits at `floor((min_x + max_x) / 2)`, keeping cuts on whole
/// pixel columns, unless that column misses the open interval
/// `(min_x, max_x)`; narrow or off-grid bounds are cut at the exact midpoint
/// instead. Every non-vertical edge crossing the line contributes an
/// interpolated point to both halves; a vertex on the line belongs to both.
/// Each half is re-ordered by bearing around its own centroid, which is exact
/// for convex input and best-effort otherwise.
///
/// # Errors
///
/// Returns [`crate::GeneratorError::MalformedPolygon`] when a half collapses
/// to fewer than three distinct points, which only happens for zero-area or
/// non-convex bounds
pub fn split_vertical(bounds: &Polygon) -> Result<(Polygon, Polygon)> {
    let mid_x = split_line(bounds);

    let crossings: Vec<Point> = bounds
        .edges()
        .filter_map(|(a, b)| crossing_at(a, b, mid_x))
        .collect();

    let left = half(bounds, &crossings, |p| p.x <= mid_x);
    let right = half(bounds, &crossings, |p| p.x >= mid_x);

    Ok((Polygon::new(left)?, Polygon::new(right)?))
}

/// Split line position used by [`split_vertical`]
pub fn split_line(bounds: &Polygon) -> f64 {
    let bbox = bounds.bounding_box();
    let mid_x = (bbox.min.x + bbox.max.x) / 2.0;
    let column = mid_x.floor();
    if bbox.min.x < column && column < bbox.max.x {
        column
    } else {
        mid_x
    }
}

// Vertical edges are skipped: their endpoints already carry the crossing
fn crossing_at(a: Point, b: Point, mid_x: f64) -> Option<Point> {
    let straddles = (a.x <= mid_x && mid_x <= b.x) || (b.x <= mid_x && mid_x <= a.x);
    if !straddles || a.x == b.x {
        return None;
    }
    let y = (mid_x - a.x).mul_add((b.y - a.y) / (b.x - a.x), a.y);
    Some(Point::new(mid_x, y))
}

fn half(bounds: &Polygon, crossings: &[Point], keep: impl Fn(&Point) -> bool) -> Vec<Point> {
    let candidates = bounds
        .vertices()
        .iter()
        .filter(|p| keep(p))
        .chain(crossings.iter());

    let mut distinct: Vec<Point> = Vec::new();
    for &p in candidates {
        if !distinct.iter().any(|q| q.approx_eq(p)) {
            distinct.push(p);
        }
    }
    order_around_centroid(distinct)
}
