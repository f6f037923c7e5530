//! Random phrase generation over an explicit vocabulary

/// Recursive stochastic phrase builder
pub mod generator;
/// Shape and relation words available to the generator and renderer
pub mod vocabulary;

pub use generator::{LabelConfig, LabelGenerator};
pub use vocabulary::{Relation, ShapeKind, Vocabulary};
