//! Recursive layout of a phrase tree onto a surface
//!
//! Each call owns its bounds polygon. `inside_of` hands the container's
//! outline to the contained subtree; `left_of` splits the bounds and hands
//! one half to each side.

use std::fmt;

use log::{trace, warn};
use rand::Rng;

use crate::geometry::Polygon;
use crate::io::error::{GeneratorError, Result};
use crate::label::{Relation, ShapeKind};
use crate::render::partition::split_vertical;
use crate::render::shapes::{ShapeConfig, synthesize};
use crate::render::surface::{StrokeStyle, Surface};
use crate::syntax::{AtomicEntity, DescriptedEntity, Entity};

/// Shape counts from one render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderReport {
    /// Outlines stroked onto the surface
    pub shapes_drawn: usize,
    /// Shape words left undrawn because synthesis found no fitting shape
    pub shapes_skipped: usize,
}

impl RenderReport {
    /// Whether every shape word in the tree was drawn
    pub const fn is_complete(&self) -> bool {
        self.shapes_skipped == 0
    }
}

/// Draws phrase trees with fixed shape and stroke settings
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Renderer {
    /// Sizing rules for synthesized shapes
    pub shapes: ShapeConfig,
    /// Outline appearance
    pub stroke: StrokeStyle,
}

impl Renderer {
    /// Renderer with explicit settings
    pub const fn new(shapes: ShapeConfig, stroke: StrokeStyle) -> Self {
        Self { shapes, stroke }
    }

    /// Draw `node` inside `bounds`
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::UnknownWord`] for a shape or relation word outside
    ///   the drawable set
    /// - [`GeneratorError::UnsupportedNode`] for composite entities, plain
    ///   descriptors, and `inside_of` with a compound container
    /// - [`GeneratorError::MalformedPolygon`] if a split leaves a half with
    ///   fewer than three points
    pub fn render<R, S>(
        &self,
        rng: &mut R,
        surface: &mut S,
        node: &Entity,
        bounds: Polygon,
    ) -> Result<RenderReport>
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let mut report = RenderReport::default();
        self.render_node(rng, surface, node, bounds, &mut report)?;
        Ok(report)
    }

    fn render_node<R, S>(
        &self,
        rng: &mut R,
        surface: &mut S,
        node: &Entity,
        bounds: Polygon,
        report: &mut RenderReport,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        match node {
            Entity::Atomic(atom) => {
                self.draw_shape(rng, surface, atom, &bounds, report)?;
                Ok(())
            }
            Entity::Descripted(described) => {
                self.render_relation(rng, surface, described, bounds, report)
            }
            Entity::Composite(_) => Err(unsupported(node)),
        }
    }

    fn render_relation<R, S>(
        &self,
        rng: &mut R,
        surface: &mut S,
        described: &DescriptedEntity,
        bounds: Polygon,
        report: &mut RenderReport,
    ) -> Result<()>
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let transformed = described
            .descriptor()
            .as_transformed()
            .ok_or_else(|| unsupported(described.descriptor()))?;
        let relation: Relation = transformed.transformer().name().parse()?;
        let container = transformed.object();
        let contained = described.entity();
        trace!(relation = relation.name(), vertices = bounds.len(); "rendering relation");

        match relation {
            Relation::InsideOf => {
                let atom = container.as_atomic().ok_or_else(|| unsupported(container))?;
                match self.draw_shape(rng, surface, atom, &bounds, report)? {
                    Some(outline) => self.render_node(rng, surface, contained, outline, report),
                    None => {
                        report.shapes_skipped += contained.leaf_count();
                        Ok(())
                    }
                }
            }
            Relation::LeftOf => {
                let (left, right) = split_vertical(&bounds)?;
                self.render_node(rng, surface, container, left, report)?;
                self.render_node(rng, surface, contained, right, report)
            }
        }
    }

    fn draw_shape<R, S>(
        &self,
        rng: &mut R,
        surface: &mut S,
        atom: &AtomicEntity,
        bounds: &Polygon,
        report: &mut RenderReport,
    ) -> Result<Option<Polygon>>
    where
        R: Rng + ?Sized,
        S: Surface + ?Sized,
    {
        let kind: ShapeKind = atom.name().parse()?;
        let Some(shape) = synthesize(rng, kind, bounds, &self.shapes)? else {
            warn!(shape = kind.name(), bounds_area = bounds.area(); "no fitting shape, skipping");
            report.shapes_skipped += 1;
            return Ok(None);
        };

        surface.stroke_polygon(shape.vertices(), &self.stroke);
        report.shapes_drawn += 1;
        Ok(Some(shape))
    }
}

fn unsupported(node: &impl fmt::Display) -> GeneratorError {
    GeneratorError::UnsupportedNode {
        node: node.to_string(),
    }
}
