//! Seeded generation of (phrase, picture) pairs

use image::RgbaImage;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::geometry::Polygon;
use crate::io::configuration::{BACKGROUND_COLOR, DEFAULT_CANVAS_SIZE, MIN_CANVAS_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::label::{LabelConfig, LabelGenerator, Vocabulary};
use crate::render::{RasterSurface, RenderReport, Renderer, ShapeConfig, StrokeStyle};
use crate::syntax::{Entity, Linearize};

/// Everything that shapes a generated example
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Phrase recursion limits
    pub label: LabelConfig,
    /// Canvas width and height in pixels
    pub canvas_size: (u32, u32),
    /// Shape sizing rules
    pub shapes: ShapeConfig,
    /// Outline appearance
    pub stroke: StrokeStyle,
    /// Canvas fill color
    pub background: [u8; 4],
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            label: LabelConfig::default(),
            canvas_size: (DEFAULT_CANVAS_SIZE, DEFAULT_CANVAS_SIZE),
            shapes: ShapeConfig::default(),
            stroke: StrokeStyle::default(),
            background: BACKGROUND_COLOR,
        }
    }
}

impl GeneratorConfig {
    /// Check every parameter before any drawing starts
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidParameter`] for an
    /// out-of-range probability, a canvas under 2x2, a zero stroke width, or
    /// a zero attempt budget
    pub fn validate(&self) -> Result<()> {
        self.label.validate()?;

        let (width, height) = self.canvas_size;
        if width < MIN_CANVAS_SIZE || height < MIN_CANVAS_SIZE {
            return Err(invalid_parameter(
                "canvas_size",
                &format!("{width}x{height}"),
                &format!("canvas must be at least {MIN_CANVAS_SIZE}x{MIN_CANVAS_SIZE}"),
            ));
        }
        if self.stroke.width == 0 {
            return Err(invalid_parameter(
                "stroke.width",
                &self.stroke.width,
                &"outlines need a positive width",
            ));
        }
        self.shapes.validate()
    }

    /// Renderer built from the shape and stroke settings
    pub const fn renderer(&self) -> Renderer {
        Renderer::new(self.shapes, self.stroke)
    }
}

/// A phrase paired with the picture drawn from it
#[derive(Debug, Clone)]
pub struct Example {
    /// Phrase tree
    pub label: Entity,
    /// Rendered picture
    pub image: RgbaImage,
    /// Shapes drawn and skipped while rendering
    pub report: RenderReport,
}

impl Example {
    /// Space-separated token form of the label
    pub fn linearized(&self) -> String {
        self.label.linearize()
    }

    /// Bracketed functional form of the label
    pub fn functional(&self) -> String {
        self.label.to_string()
    }
}

/// Produces examples from a single seeded random stream
pub struct ExampleGenerator {
    config: GeneratorConfig,
    vocabulary: Vocabulary,
    rng: StdRng,
}

impl ExampleGenerator {
    /// Generator over the standard vocabulary
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidParameter`] if the
    /// configuration fails validation
    pub fn new(config: GeneratorConfig, seed: u64) -> Result<Self> {
        Self::with_vocabulary(config, Vocabulary::standard(), seed)
    }

    /// Generator over a caller-supplied vocabulary
    ///
    /// The vocabulary may narrow the standard words but not add new ones,
    /// since every generated label must be drawable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidParameter`] if the
    /// configuration fails validation, or
    /// [`crate::GeneratorError::UnknownWord`] for a word the renderer cannot
    /// draw
    pub fn with_vocabulary(
        config: GeneratorConfig,
        vocabulary: Vocabulary,
        seed: u64,
    ) -> Result<Self> {
        config.validate()?;
        vocabulary.ensure_drawable()?;
        let (width, height) = config.canvas_size;
        debug!(seed, width, height; "Creating example generator");
        Ok(Self {
            config,
            vocabulary,
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Active configuration
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Words the generator draws from
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Draw a random phrase and render it onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Propagates phrase construction and layout errors; the generator stays
    /// usable afterwards
    pub fn generate_example(&mut self) -> Result<Example> {
        let label =
            LabelGenerator::new(&self.vocabulary, self.config.label).generate(&mut self.rng)?;
        debug!(label = label.linearize(), depth = label.depth(); "Generated label");
        self.render_owned(label)
    }

    /// Render a caller-supplied phrase onto a fresh canvas
    ///
    /// # Errors
    ///
    /// Returns the renderer's errors for words or structures it cannot draw
    pub fn render_label(&mut self, label: &Entity) -> Result<Example> {
        self.render_owned(label.clone())
    }

    fn render_owned(&mut self, label: Entity) -> Result<Example> {
        let (width, height) = self.config.canvas_size;
        let mut surface = RasterSurface::new(width, height, self.config.background);
        let report = self.config.renderer().render(
            &mut self.rng,
            &mut surface,
            &label,
            Polygon::canvas(width, height),
        )?;
        debug!(drawn = report.shapes_drawn, skipped = report.shapes_skipped; "Rendered example");

        Ok(Example {
            label,
            image: surface.into_image(),
            report,
        })
    }
}
