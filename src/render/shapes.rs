//! Constrained random shapes inside a bounds polygon
//!
//! Circles and squares are sized from the clearance between a jittered
//! center and the bounds' edges, so they always fit. Triangles are found by
//! bounded rejection sampling and may not exist for a given bounds.

use std::f64::consts::TAU;

use rand::Rng;

use crate::geometry::distance::point_to_point;
use crate::geometry::{BoundingBox, Point, Polygon};
use crate::io::configuration::{
    CENTER_JITTER_FRACTION, CIRCLE_RADIUS_RANGE, CIRCLE_STEP_DEGREES, POINT_SAMPLING_ATTEMPTS,
    SQUARE_SIDE_FACTOR, SQUARE_SIDE_RANGE, TRIANGLE_ATTEMPTS, TRIANGLE_MIN_ANGLE_DEGREES,
    TRIANGLE_MIN_AREA_FRACTION, TRIANGLE_SAMPLING_MARGIN,
};
use crate::io::error::{Result, invalid_parameter};
use crate::label::ShapeKind;

/// Acceptance rules for triangle rejection sampling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriangleConfig {
    /// Candidate triangles drawn per synthesis
    pub attempts: usize,
    /// Every interior angle must exceed this many degrees
    pub min_angle_degrees: f64,
    /// Starting share of the bounds area a candidate must exceed
    pub min_area_fraction: f64,
    /// Margin trimmed from each side of the bounding box when sampling vertices
    pub sampling_margin: f64,
    /// Draws allowed per vertex before a candidate is abandoned
    pub point_attempts: usize,
}

impl Default for TriangleConfig {
    fn default() -> Self {
        Self {
            attempts: TRIANGLE_ATTEMPTS,
            min_angle_degrees: TRIANGLE_MIN_ANGLE_DEGREES,
            min_area_fraction: TRIANGLE_MIN_AREA_FRACTION,
            sampling_margin: TRIANGLE_SAMPLING_MARGIN,
            point_attempts: POINT_SAMPLING_ATTEMPTS,
        }
    }
}

/// Sizing rules for every shape kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeConfig {
    /// Fraction of the centroid's clearance a shape center may wander
    pub center_jitter: f64,
    /// Circle radius as a fraction of the center's clearance (min, max)
    pub circle_radius_range: (f64, f64),
    /// Angular step between circle vertices
    pub circle_step_degrees: usize,
    /// Largest square side as a multiple of the center's clearance
    pub square_side_factor: f64,
    /// Square side as a fraction of the largest side (min, max)
    pub square_side_range: (f64, f64),
    /// Triangle acceptance rules
    pub triangle: TriangleConfig,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self {
            center_jitter: CENTER_JITTER_FRACTION,
            circle_radius_range: CIRCLE_RADIUS_RANGE,
            circle_step_degrees: CIRCLE_STEP_DEGREES,
            square_side_factor: SQUARE_SIDE_FACTOR,
            square_side_range: SQUARE_SIDE_RANGE,
            triangle: TriangleConfig::default(),
        }
    }
}

impl ShapeConfig {
    /// Reject settings that would stall or break synthesis
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidParameter`] naming the
    /// offending field
    pub fn validate(&self) -> Result<()> {
        if self.circle_step_degrees == 0 || self.circle_step_degrees > 120 {
            return Err(invalid_parameter(
                "circle_step_degrees",
                &self.circle_step_degrees,
                &"must be between 1 and 120 so the circle keeps at least three vertices",
            ));
        }
        if self.triangle.attempts == 0 {
            return Err(invalid_parameter(
                "triangle.attempts",
                &self.triangle.attempts,
                &"at least one candidate must be drawn",
            ));
        }
        if self.triangle.point_attempts == 0 {
            return Err(invalid_parameter(
                "triangle.point_attempts",
                &self.triangle.point_attempts,
                &"at least one vertex draw must be allowed",
            ));
        }
        if !(0.0..=0.5).contains(&self.triangle.sampling_margin) {
            return Err(invalid_parameter(
                "triangle.sampling_margin",
                &self.triangle.sampling_margin,
                &"must lie in [0, 0.5]",
            ));
        }
        Ok(())
    }
}

/// Accepted triangle with the measurements that admitted it
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSample {
    /// The triangle
    pub polygon: Polygon,
    /// Triangle area divided by bounds area
    pub area_fraction: f64,
    /// Smallest interior angle in degrees
    pub min_angle_degrees: f64,
}

/// Draw a shape of `kind` inside `bounds`
///
/// Circles and squares always succeed; a triangle is `None` when no candidate
/// meets the acceptance rules within the attempt budget.
///
/// # Errors
///
/// Returns [`crate::GeneratorError::MalformedPolygon`] only if a generated
/// vertex list is too short, which the configuration checks rule out
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ShapeKind,
    bounds: &Polygon,
    config: &ShapeConfig,
) -> Result<Option<Polygon>> {
    match kind {
        ShapeKind::Circle => circle(rng, bounds, config).map(Some),
        ShapeKind::Square => square(rng, bounds, config).map(Some),
        ShapeKind::Triangle => Ok(synthesize_triangle(rng, bounds, &config.triangle)
            .map(|sample| sample.polygon)),
    }
}

fn circle<R: Rng + ?Sized>(rng: &mut R, bounds: &Polygon, config: &ShapeConfig) -> Result<Polygon> {
    let center = jittered_center(rng, bounds, config.center_jitter);
    let clearance = bounds.distance_to(center);
    let (low, high) = config.circle_radius_range;
    let radius = uniform(rng, clearance * low, clearance * high);

    // Offsets truncate toward zero, pulling vertices inward
    let vertices = (0..360)
        .step_by(config.circle_step_degrees.max(1))
        .map(|degrees| {
            let theta = f64::from(degrees).to_radians();
            Point::new(
                center.x + (radius * theta.cos()).trunc(),
                center.y + (radius * theta.sin()).trunc(),
            )
        })
        .collect();
    Polygon::new(vertices)
}

fn square<R: Rng + ?Sized>(rng: &mut R, bounds: &Polygon, config: &ShapeConfig) -> Result<Polygon> {
    let center = jittered_center(rng, bounds, config.center_jitter);
    let max_side = config.square_side_factor * bounds.distance_to(center);
    let (low, high) = config.square_side_range;
    let half_side = uniform(rng, max_side * low, max_side * high).trunc() / 2.0;

    Polygon::new(vec![
        Point::new(center.x - half_side, center.y - half_side),
        Point::new(center.x + half_side, center.y - half_side),
        Point::new(center.x + half_side, center.y + half_side),
        Point::new(center.x - half_side, center.y + half_side),
    ])
}

/// Point near the centroid: random bearing, distance up to `fraction` of
/// the centroid's clearance
pub fn jittered_center<R: Rng + ?Sized>(rng: &mut R, bounds: &Polygon, fraction: f64) -> Point {
    let center = bounds.centroid();
    let clearance = bounds.distance_to(center);
    let theta = rng.random::<f64>() * TAU;
    let r = rng.random::<f64>() * clearance * fraction;
    center.offset_polar(theta, r)
}

/// Uniform draw from the central band of the bounds' box that lands inside
/// the polygon
///
/// The band trims `margin` of the box from each side. Returns `None` once
/// `attempts` draws have all fallen outside the polygon.
pub fn sample_point_in_band<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &Polygon,
    margin: f64,
    attempts: usize,
) -> Option<Point> {
    let BoundingBox { min, max } = bounds.bounding_box();
    let keep = 1.0 - margin;
    (0..attempts).find_map(|_| {
        let x = uniform(
            rng,
            margin.mul_add(min.x, keep * max.x),
            keep.mul_add(min.x, margin * max.x),
        );
        let y = uniform(
            rng,
            margin.mul_add(min.y, keep * max.y),
            keep.mul_add(min.y, margin * max.y),
        );
        let p = Point::new(x, y);
        bounds.contains(p).then_some(p)
    })
}

/// Interior angles in degrees, one per vertex, by the law of cosines
///
/// A vertex with a zero-length adjacent side gets 0°.
pub fn interior_angles(triangle: &[Point; 3]) -> [f64; 3] {
    let [a, b, c] = *triangle;
    [angle_at(c, a, b), angle_at(a, b, c), angle_at(b, c, a)]
}

fn angle_at(prev: Point, vertex: Point, next: Point) -> f64 {
    let a = point_to_point(prev, vertex);
    let b = point_to_point(next, vertex);
    let c = point_to_point(prev, next);
    if a == 0.0 || b == 0.0 {
        return 0.0;
    }
    let cosine = (a.mul_add(a, b * b) - c * c) / (2.0 * a * b);
    cosine.clamp(-1.0, 1.0).acos().to_degrees()
}

fn triangle_area(triangle: &[Point; 3]) -> f64 {
    let [a, b, c] = *triangle;
    ((b.x - a.x).mul_add(c.y - a.y, -((c.x - a.x) * (b.y - a.y))) / 2.0).abs()
}

/// Best candidate seen so far and the area share it set
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSearch {
    /// Vertices of the best accepted candidate
    pub best: Option<[Point; 3]>,
    /// Area share a new candidate must exceed
    pub area_fraction: f64,
    /// Smallest angle of the best candidate
    pub min_angle_degrees: f64,
}

impl TriangleSearch {
    /// Empty search that will accept anything above `min_area_fraction`
    pub const fn new(min_area_fraction: f64) -> Self {
        Self {
            best: None,
            area_fraction: min_area_fraction,
            min_angle_degrees: 0.0,
        }
    }

    /// Fold one candidate into the search
    ///
    /// The candidate replaces the current best only if its smallest angle
    /// exceeds `min_angle_degrees` and its area share exceeds the running
    /// threshold, which then rises to the candidate's share.
    #[must_use]
    pub fn consider(self, candidate: [Point; 3], bounds_area: f64, min_angle_degrees: f64) -> Self {
        let smallest = interior_angles(&candidate)
            .into_iter()
            .fold(f64::INFINITY, f64::min);
        let fraction = triangle_area(&candidate) / bounds_area;

        if smallest > min_angle_degrees && fraction > self.area_fraction {
            Self {
                best: Some(candidate),
                area_fraction: fraction,
                min_angle_degrees: smallest,
            }
        } else {
            self
        }
    }

    /// Convert the search result into a sample, if anything was accepted
    pub fn finish(self) -> Option<TriangleSample> {
        let [a, b, c] = self.best?;
        Polygon::new(vec![a, b, c])
            .ok()
            .map(|polygon| TriangleSample {
                polygon,
                area_fraction: self.area_fraction,
                min_angle_degrees: self.min_angle_degrees,
            })
    }
}

/// Rejection-sample a well-proportioned triangle inside `bounds`
///
/// Runs exactly `config.attempts` draws; a draw whose vertices cannot be
/// placed inside the polygon is skipped. Returns `None` when nothing was
/// accepted or the bounds enclose no area.
pub fn synthesize_triangle<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &Polygon,
    config: &TriangleConfig,
) -> Option<TriangleSample> {
    let bounds_area = bounds.area();
    if bounds_area <= 0.0 {
        return None;
    }

    (0..config.attempts)
        .fold(TriangleSearch::new(config.min_area_fraction), |search, _| {
            match sample_triangle(rng, bounds, config) {
                Some(candidate) => search.consider(candidate, bounds_area, config.min_angle_degrees),
                None => search,
            }
        })
        .finish()
}

fn sample_triangle<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: &Polygon,
    config: &TriangleConfig,
) -> Option<[Point; 3]> {
    let mut draw =
        || sample_point_in_band(rng, bounds, config.sampling_margin, config.point_attempts);
    Some([draw()?, draw()?, draw()?])
}

/// Uniform draw between `a` and `b`, in either order
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, a: f64, b: f64) -> f64 {
    rng.random::<f64>().mul_add(b - a, a)
}
