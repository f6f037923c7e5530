//! End-to-end example generation: phrase, layout, picture

/// Seeded generator owning the configuration, vocabulary and random stream
pub mod executor;

pub use executor::{Example, ExampleGenerator, GeneratorConfig};
