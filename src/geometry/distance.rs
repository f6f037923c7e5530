//! Euclidean distances between points and simple planar figures

use crate::geometry::Point;

/// Euclidean distance between two points
pub fn point_to_point(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Distance from `p` to the closed segment `[start, end]`
///
/// Projects `p` onto the supporting line with parameter `u`; outside `[0, 1]`
/// the nearest endpoint wins. A zero-length segment degrades to the point
/// distance.
pub fn point_to_segment(p: Point, start: Point, end: Point) -> f64 {
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    if dx == 0.0 && dy == 0.0 {
        return point_to_point(p, start);
    }

    let u = (p.x - start.x).mul_add(dx, (p.y - start.y) * dy) / dx.mul_add(dx, dy * dy);

    if u < 0.0 {
        return point_to_point(p, start);
    }
    if u > 1.0 {
        return point_to_point(p, end);
    }

    let projection = Point::new(u.mul_add(dx, start.x), u.mul_add(dy, start.y));
    point_to_point(p, projection)
}

/// Distance from `p` to the boundary of a closed polygon
///
/// The vertex list is treated as a cycle, so the last vertex connects back
/// to the first. Returns `f64::INFINITY` for an empty list.
pub fn point_to_polygon(p: Point, vertices: &[Point]) -> f64 {
    vertices
        .iter()
        .zip(vertices.iter().cycle().skip(1))
        .map(|(&start, &end)| point_to_segment(p, start, end))
        .fold(f64::INFINITY, f64::min)
}

/// Distance from `p` to the circumference of a circle
pub fn point_to_circle(p: Point, center: Point, radius: f64) -> f64 {
    (point_to_point(p, center) - radius).abs()
}
