//! Polygon kernel: shoelace area, vertex centroid, ray-cast containment
//!
//! The free functions operate on raw vertex slices and validate their input;
//! [`Polygon`] carries the "at least three vertices" guarantee in its type so
//! the layout code never has to re-check it.

use crate::geometry::distance::point_to_polygon;
use crate::geometry::{BoundingBox, Point};
use crate::io::error::{Result, require_polygon};

/// Cyclic edges of a vertex list, last vertex joined back to the first
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    vertices
        .iter()
        .copied()
        .zip(vertices.iter().copied().cycle().skip(1))
}

// Signed area; the sign follows the winding
fn shoelace(vertices: &[Point]) -> f64 {
    edges(vertices)
        .map(|(a, b)| a.x.mul_add(b.y, -(b.x * a.y)))
        .sum::<f64>()
        / 2.0
}

/// Area enclosed by a simple polygon, independent of winding
///
/// # Errors
///
/// Returns [`crate::GeneratorError::MalformedPolygon`] for fewer than three vertices
pub fn polygon_area(vertices: &[Point]) -> Result<f64> {
    require_polygon("polygon_area", vertices.len())?;
    Ok(shoelace(vertices).abs())
}

/// Arithmetic mean of the vertices
///
/// This is not the area-weighted centroid; it is only used as an anchor for
/// sampling and angular ordering.
///
/// # Errors
///
/// Returns [`crate::GeneratorError::MalformedPolygon`] for fewer than three vertices
pub fn centroid(vertices: &[Point]) -> Result<Point> {
    require_polygon("centroid", vertices.len())?;
    Ok(vertex_mean(vertices))
}

fn vertex_mean(vertices: &[Point]) -> Point {
    let count = vertices.len() as f64;
    let (sum_x, sum_y) = vertices
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Point::new(sum_x / count, sum_y / count)
}

/// Ray-casting parity test
///
/// An edge toggles parity when the point's `y` lies in the half-open interval
/// `(min_y, max_y]` of the edge and the point is left of the crossing. The
/// half-open interval keeps a vertex lying on the scan ray from being counted
/// twice. Horizontal edges never toggle.
pub fn point_in_polygon(p: Point, vertices: &[Point]) -> bool {
    edges(vertices).fold(false, |inside, (a, b)| {
        let crosses_band = p.y > a.y.min(b.y) && p.y <= a.y.max(b.y) && p.x <= a.x.max(b.x);
        if !crosses_band {
            return inside;
        }
        // Inside the band a.y != b.y, so the division is safe
        let toggles = a.x == b.x || p.x <= (p.y - a.y) * (b.x - a.x) / (b.y - a.y) + a.x;
        inside ^ toggles
    })
}

/// Bearing of `p` as seen from `center`, in radians within `(-π, π]`
///
/// Only used as a sort key when rebuilding a boundary order.
pub fn angle_from_centroid(p: Point, center: Point) -> f64 {
    (p.y - center.y).atan2(p.x - center.x)
}

/// Sort points by bearing around their own vertex mean
///
/// Produces a traversable boundary for convex point sets; non-convex sets get
/// a best-effort star-shaped ordering.
pub fn order_around_centroid(mut points: Vec<Point>) -> Vec<Point> {
    if points.is_empty() {
        return points;
    }
    let center = vertex_mean(&points);
    points.sort_by(|a, b| {
        angle_from_centroid(*a, center).total_cmp(&angle_from_centroid(*b, center))
    });
    points
}

/// A closed polygon with at least three vertices
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    /// Wrap a vertex list, rejecting lists too short to enclose anything
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::MalformedPolygon`] for fewer than three vertices
    pub fn new(vertices: Vec<Point>) -> Result<Self> {
        require_polygon("Polygon::new", vertices.len())?;
        Ok(Self { vertices })
    }

    /// Full canvas as its four-corner polygon
    ///
    /// Corners sit on the last addressable pixel, so a `width x height` canvas
    /// spans `0..=width-1` horizontally.
    pub fn canvas(width: u32, height: u32) -> Self {
        let max_x = f64::from(width.saturating_sub(1));
        let max_y = f64::from(height.saturating_sub(1));
        Self {
            vertices: vec![
                Point::new(0.0, 0.0),
                Point::new(max_x, 0.0),
                Point::new(max_x, max_y),
                Point::new(0.0, max_y),
            ],
        }
    }

    /// Vertices in boundary order
    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    /// Consume the polygon, returning its vertices
    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Never true for a constructed polygon
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Cyclic edges
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        edges(&self.vertices)
    }

    /// Enclosed area
    pub fn area(&self) -> f64 {
        shoelace(&self.vertices).abs()
    }

    /// Vertex mean
    pub fn centroid(&self) -> Point {
        vertex_mean(&self.vertices)
    }

    /// Ray-casting containment test
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }

    /// Distance from `p` to the nearest edge
    pub fn distance_to(&self, p: Point) -> f64 {
        point_to_polygon(p, &self.vertices)
    }

    /// Axis-aligned extent
    pub fn bounding_box(&self) -> BoundingBox {
        // The constructor guarantees a non-empty vertex list
        BoundingBox::from_points(&self.vertices).unwrap_or(BoundingBox {
            min: Point::default(),
            max: Point::default(),
        })
    }
}

impl TryFrom<Vec<Point>> for Polygon {
    type Error = crate::io::error::GeneratorError;

    fn try_from(vertices: Vec<Point>) -> Result<Self> {
        Self::new(vertices)
    }
}
