//! Paired phrase and picture generator for nested geometric shapes
//!
//! A small symbolic algebra builds phrases such as
//! `inside_of(square)(left_of(circle)(triangle))`; a recursive renderer lays
//! each phrase out inside the canvas and strokes the resulting polygons, so
//! every picture comes with the phrase that produced it.

#![forbid(unsafe_code)]

/// Points, distances and polygons
pub mod geometry;
/// Input/output operations, configuration and error handling
pub mod io;
/// Random phrase generation over a shape and relation vocabulary
pub mod label;
/// Seeded end-to-end example generation
pub mod pipeline;
/// Region partitioning, shape synthesis, surfaces and the renderer
pub mod render;
/// Typed phrase trees and the operators that build them
pub mod syntax;

pub use io::error::{GeneratorError, Result};
