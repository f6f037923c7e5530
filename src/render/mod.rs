//! Turning phrase trees into pictures
//!
//! This module contains:
//! - Region partitioning for side-by-side relations
//! - Random shape synthesis constrained to a bounds polygon
//! - Drawing surfaces (raster and recording)
//! - The recursive renderer that walks a phrase tree

/// Vertical split of a bounds polygon
pub mod partition;
/// Recursive phrase-tree layout
pub mod renderer;
/// Circle, square and triangle synthesis
pub mod shapes;
/// Raster and recording drawing targets
pub mod surface;

pub use renderer::{RenderReport, Renderer};
pub use shapes::{ShapeConfig, TriangleConfig, TriangleSample};
pub use surface::{RasterSurface, RecordingSurface, Stroke, StrokeStyle, Surface};
