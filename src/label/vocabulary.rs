//! Shape and relation words
//!
//! The vocabulary is a value built once per run and handed to both the label
//! generator and the renderer, so concurrent runs never share word tables.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{GeneratorError, Result, invalid_parameter};
use crate::syntax::{AtomicEntity, Transformer};

/// Primitive shape a single-word entity can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// 36-gon approximating a circle
    Circle,
    /// Axis-aligned square
    Square,
    /// Well-proportioned triangle found by rejection sampling
    Triangle,
}

impl ShapeKind {
    /// Every shape in vocabulary order
    pub const ALL: [Self; 3] = [Self::Circle, Self::Square, Self::Triangle];

    /// The word naming this shape
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Triangle => "triangle",
        }
    }
}

impl FromStr for ShapeKind {
    type Err = GeneratorError;

    fn from_str(word: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == word)
            .ok_or_else(|| GeneratorError::UnknownWord {
                category: "shape",
                word: word.to_string(),
            })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Spatial relation a transformer can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// Subject drawn inside the object's outline
    InsideOf,
    /// Object drawn in the left half, subject in the right half
    LeftOf,
}

impl Relation {
    /// Every relation in vocabulary order
    pub const ALL: [Self; 2] = [Self::InsideOf, Self::LeftOf];

    /// The word naming this relation
    pub const fn name(self) -> &'static str {
        match self {
            Self::InsideOf => "inside_of",
            Self::LeftOf => "left_of",
        }
    }

    /// Whether the relation's object must be a single word
    ///
    /// A container is drawn as one outline whose interior becomes the
    /// subject's bounds, so it cannot itself be compound.
    pub const fn restricts_object(self) -> bool {
        matches!(self, Self::InsideOf)
    }
}

impl FromStr for Relation {
    type Err = GeneratorError;

    fn from_str(word: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|relation| relation.name() == word)
            .ok_or_else(|| GeneratorError::UnknownWord {
                category: "relation",
                word: word.to_string(),
            })
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Words the generator draws from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    shapes: Vec<AtomicEntity>,
    relations: Vec<Transformer>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit word lists
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidParameter`] when either list is empty
    pub fn new(shapes: Vec<AtomicEntity>, relations: Vec<Transformer>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(invalid_parameter(
                "shapes",
                &"[]",
                &"vocabulary needs at least one shape word",
            ));
        }
        if relations.is_empty() {
            return Err(invalid_parameter(
                "relations",
                &"[]",
                &"vocabulary needs at least one relation word",
            ));
        }
        Ok(Self { shapes, relations })
    }

    /// `circle`, `square`, `triangle` with `inside_of`, `left_of`
    pub fn standard() -> Self {
        Self {
            shapes: ShapeKind::ALL
                .iter()
                .map(|kind| AtomicEntity::new(kind.name()))
                .collect(),
            relations: Relation::ALL
                .iter()
                .map(|relation| Transformer::relation(relation.name()))
                .collect(),
        }
    }

    /// Shape words
    pub fn shapes(&self) -> &[AtomicEntity] {
        &self.shapes
    }

    /// Relation words
    pub fn relations(&self) -> &[Transformer] {
        &self.relations
    }

    /// Check every word names a shape or relation the renderer can draw
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::UnknownWord`] for the first word outside
    /// [`ShapeKind::ALL`] or [`Relation::ALL`]
    pub fn ensure_drawable(&self) -> Result<()> {
        for shape in &self.shapes {
            shape.name().parse::<ShapeKind>()?;
        }
        for relation in &self.relations {
            relation.name().parse::<Relation>()?;
        }
        Ok(())
    }

    /// Whether applying `transformer` forces its object to be a single word
    pub fn restricts_object(&self, transformer: &Transformer) -> bool {
        transformer
            .name()
            .parse::<Relation>()
            .is_ok_and(Relation::restricts_object)
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
