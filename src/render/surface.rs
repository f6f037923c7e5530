//! Drawing targets for polygon outlines

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::geometry::Point;
use crate::geometry::polygon::edges;
use crate::io::configuration::{BACKGROUND_COLOR, STROKE_COLOR, STROKE_WIDTH};

/// Outline appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrokeStyle {
    /// Brush edge length in pixels
    pub width: u32,
    /// RGBA outline color
    pub color: [u8; 4],
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            width: STROKE_WIDTH,
            color: STROKE_COLOR,
        }
    }
}

/// Anything a closed polygon outline can be drawn onto
pub trait Surface {
    /// Draw the closed outline through `vertices`, last vertex joined to the first
    fn stroke_polygon(&mut self, vertices: &[Point], style: &StrokeStyle);
}

/// RGBA canvas that rasterizes outlines with a square brush
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Canvas of the given size filled with `background`
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        Self {
            image: ImageBuffer::from_pixel(width, height, Rgba(background)),
        }
    }

    /// Canvas with the default background
    pub fn blank(width: u32, height: u32) -> Self {
        Self::new(width, height, BACKGROUND_COLOR)
    }

    /// Pixels drawn so far
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface, returning its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    fn stroke_segment(&mut self, a: Point, b: Point, style: &StrokeStyle) {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        // One stamp per pixel step along the longer axis
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let t = step as f64 / steps as f64;
            self.stamp(
                Point::new(dx.mul_add(t, a.x), dy.mul_add(t, a.y)),
                style,
            );
        }
    }

    fn stamp(&mut self, center: Point, style: &StrokeStyle) {
        let width = i64::from(style.width.max(1));
        let low = -(width - 1) / 2;
        let cx = center.x.round() as i64;
        let cy = center.y.round() as i64;

        for oy in low..low + width {
            for ox in low..low + width {
                let (Ok(x), Ok(y)) = (u32::try_from(cx + ox), u32::try_from(cy + oy)) else {
                    continue;
                };
                if let Some(pixel) = self.image.get_pixel_mut_checked(x, y) {
                    *pixel = Rgba(style.color);
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn stroke_polygon(&mut self, vertices: &[Point], style: &StrokeStyle) {
        for (a, b) in edges(vertices) {
            self.stroke_segment(a, b, style);
        }
    }
}

/// One outline captured by a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Outline vertices in drawing order
    pub vertices: Vec<Point>,
    /// Style the outline was drawn with
    pub style: StrokeStyle,
}

/// Surface that keeps every outline instead of rasterizing it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordingSurface {
    /// Outlines in the order they were drawn
    pub strokes: Vec<Stroke>,
}

impl RecordingSurface {
    /// Empty recording
    pub const fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn stroke_polygon(&mut self, vertices: &[Point], style: &StrokeStyle) {
        self.strokes.push(Stroke {
            vertices: vertices.to_vec(),
            style: *style,
        });
    }
}
