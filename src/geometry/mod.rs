//! Planar geometry used by the layout engine
//!
//! This module contains:
//! - Points and axis-aligned bounding boxes
//! - Point-to-segment, point-to-polygon and point-to-circle distances
//! - Validated polygons with area, centroid and containment queries

/// Distance functions between points, segments, polygons and circles
pub mod distance;
/// Validated polygons and the free-standing polygon kernel
pub mod polygon;
/// Points and bounding boxes
pub mod point;

pub use point::{BoundingBox, Point};
pub use polygon::Polygon;
