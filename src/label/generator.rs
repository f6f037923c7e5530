//! Recursive random phrase construction
//!
//! A phrase is either a single shape word or `relation(object)(subject)`. The
//! subject recursion spends one unit of depth per level; the object recursion
//! starts from its own small budget and collapses to a single word whenever
//! the chosen relation is containment.

use log::trace;
use rand::Rng;
use rand::seq::IndexedRandom;

use crate::io::configuration::{
    DEFAULT_COMPLEXITY, DEFAULT_MAX_DEPTH, OPERAND_COMPLEXITY, OPERAND_MAX_DEPTH,
};
use crate::io::error::{Result, invalid_parameter};
use crate::label::Vocabulary;
use crate::syntax::Entity;

/// Recursion limits for phrase generation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelConfig {
    /// Maximum number of nested relations on the subject side
    pub max_depth: usize,
    /// Probability of expanding a node into a relation instead of a word
    pub complexity: f64,
    /// Depth budget for a relation's object
    pub operand_max_depth: usize,
    /// Expansion probability for a relation's object
    pub operand_complexity: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            complexity: DEFAULT_COMPLEXITY,
            operand_max_depth: OPERAND_MAX_DEPTH,
            operand_complexity: OPERAND_COMPLEXITY,
        }
    }
}

impl LabelConfig {
    /// Check that both probabilities lie in `[0, 1]`
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidParameter`] naming the
    /// offending field
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [
            ("complexity", self.complexity),
            ("operand_complexity", self.operand_complexity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &"must be a probability in [0, 1]",
                ));
            }
        }
        Ok(())
    }
}

/// Builds random phrases from a vocabulary
pub struct LabelGenerator<'v> {
    vocabulary: &'v Vocabulary,
    config: LabelConfig,
}

impl<'v> LabelGenerator<'v> {
    /// Create a generator over `vocabulary`
    pub const fn new(vocabulary: &'v Vocabulary, config: LabelConfig) -> Self {
        Self { vocabulary, config }
    }

    /// Configured limits
    pub const fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Generate a phrase with the configured depth and complexity
    ///
    /// # Errors
    ///
    /// Propagates construction errors from the vocabulary's transformers
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Entity> {
        self.generate_with(rng, self.config.max_depth, self.config.complexity, false)
    }

    /// Generate a phrase with explicit limits
    ///
    /// Returns a single shape word when `max_depth` is zero, when a uniform
    /// draw exceeds `complexity`, or when `restrict` is set. The draw is only
    /// taken once `max_depth` is known to be positive.
    ///
    /// # Errors
    ///
    /// Propagates construction errors from the vocabulary's transformers
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        max_depth: usize,
        complexity: f64,
        restrict: bool,
    ) -> Result<Entity> {
        if max_depth == 0 || rng.random::<f64>() > complexity || restrict {
            return self.choose_shape(rng);
        }

        let relation = self
            .vocabulary
            .relations()
            .choose(rng)
            .ok_or_else(|| invalid_parameter("relations", &"[]", &"no relation words"))?;
        let restrict_object = self.vocabulary.restricts_object(relation);
        trace!(relation = relation.name(), max_depth; "expanding relation");

        let object = self.generate_with(
            rng,
            self.config.operand_max_depth,
            self.config.operand_complexity,
            restrict_object,
        )?;
        let subject = self.generate_with(rng, max_depth - 1, complexity, false)?;

        Ok(relation.apply(object)?.describe_entity(subject))
    }

    fn choose_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Entity> {
        self.vocabulary
            .shapes()
            .choose(rng)
            .cloned()
            .map(Entity::Atomic)
            .ok_or_else(|| invalid_parameter("shapes", &"[]", &"no shape words"))
    }
}
