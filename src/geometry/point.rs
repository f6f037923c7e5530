//! Planar points and axis-aligned extents

use std::fmt;

/// Tolerance used when deciding whether two points coincide
pub const POINT_EPSILON: f64 = 1e-9;

/// A point in canvas coordinates (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point reached by walking `distance` along bearing `theta` (radians)
    pub fn offset_polar(self, theta: f64, distance: f64) -> Self {
        Self::new(
            theta.cos().mul_add(distance, self.x),
            theta.sin().mul_add(distance, self.y),
        )
    }

    /// Whether both coordinates agree within [`POINT_EPSILON`]
    pub fn approx_eq(self, other: Self) -> bool {
        (self.x - other.x).abs() <= POINT_EPSILON && (self.y - other.y).abs() <= POINT_EPSILON
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Axis-aligned bounding box of a vertex set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum coordinates (inclusive)
    pub min: Point,
    /// Maximum coordinates (inclusive)
    pub max: Point,
}

impl BoundingBox {
    /// Smallest box containing every point, or `None` for an empty set
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let seed = Self {
            min: *first,
            max: *first,
        };
        Some(points.iter().fold(seed, |bbox, p| Self {
            min: Point::new(bbox.min.x.min(p.x), bbox.min.y.min(p.y)),
            max: Point::new(bbox.max.x.max(p.x), bbox.max.y.max(p.y)),
        }))
    }

    /// Check if a point is within the bounds
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Midpoint of the box
    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}
