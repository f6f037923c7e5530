//! Modifiers: plain words, transformer results and conjunctions of modifiers

use std::fmt;

use crate::io::error::{Result, invalid_composition};
use crate::syntax::action::DescriptedAction;
use crate::syntax::entity::DescriptedEntity;
use crate::syntax::phrase::{push_joined, write_call};
use crate::syntax::{Action, Composer, Entity, Linearize, Phrase, Transformer};

/// A single modifier word, e.g. `nicely`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicDescriptor {
    name: String,
}

impl AtomicDescriptor {
    /// Create a modifier word
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The word itself
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Result of applying a transformer to its object, e.g. `inside_of(square)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedDescriptor {
    transformer: Transformer,
    object: Box<Entity>,
}

impl TransformedDescriptor {
    pub(crate) fn new(transformer: Transformer, object: Entity) -> Self {
        Self {
            transformer,
            object: Box::new(object),
        }
    }

    /// The relation word
    pub const fn transformer(&self) -> &Transformer {
        &self.transformer
    }

    /// The relation's object (the `square` in `inside_of(square)`)
    pub fn object(&self) -> &Entity {
        &self.object
    }
}

/// Two or more descriptors joined by a connective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeDescriptor {
    composer: Composer,
    descriptors: Vec<Descriptor>,
}

impl CompositeDescriptor {
    pub(crate) const fn new(composer: Composer, descriptors: Vec<Descriptor>) -> Self {
        Self {
            composer,
            descriptors,
        }
    }

    /// The connective
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Joined descriptors in order
    pub fn descriptors(&self) -> &[Descriptor] {
        &self.descriptors
    }
}

/// Modifier of an entity or action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Descriptor {
    /// Single word
    Atomic(AtomicDescriptor),
    /// Transformer applied to an entity
    Transformed(TransformedDescriptor),
    /// Connective over several descriptors
    Composite(CompositeDescriptor),
}

impl Descriptor {
    /// Shorthand for an atomic descriptor
    pub fn atomic(name: impl Into<String>) -> Self {
        Self::Atomic(AtomicDescriptor::new(name))
    }

    /// Apply this descriptor to an entity or an action
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidComposition`] when the target
    /// is a descriptor or a process
    pub fn describe(self, target: impl Into<Phrase>) -> Result<Phrase> {
        match target.into() {
            Phrase::Entity(entity) => Ok(Phrase::Entity(self.describe_entity(entity))),
            Phrase::Action(action) => Ok(Phrase::Action(self.describe_action(action))),
            other => Err(invalid_composition(
                &self,
                &format!("cannot describe a {}", other.kind()),
            )),
        }
    }

    /// Apply this descriptor to an entity
    pub fn describe_entity(self, entity: Entity) -> Entity {
        Entity::Descripted(DescriptedEntity::new(entity, self))
    }

    /// Apply this descriptor to an action
    pub fn describe_action(self, action: Action) -> Action {
        Action::Descripted(DescriptedAction::new(action, self))
    }

    /// The transformer, when this descriptor came from one
    pub const fn as_transformed(&self) -> Option<&TransformedDescriptor> {
        match self {
            Self::Transformed(transformed) => Some(transformed),
            _ => None,
        }
    }

    /// Nesting depth contributed by transformer objects
    pub fn depth(&self) -> usize {
        match self {
            Self::Atomic(_) => 0,
            Self::Transformed(transformed) => transformed.object().depth(),
            Self::Composite(composite) => composite
                .descriptors()
                .iter()
                .map(Self::depth)
                .max()
                .unwrap_or(0),
        }
    }

    /// Number of single-word entities reachable through transformer objects
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Atomic(_) => 0,
            Self::Transformed(transformed) => transformed.object().leaf_count(),
            Self::Composite(composite) => composite.descriptors().iter().map(Self::leaf_count).sum(),
        }
    }
}

impl Linearize for Descriptor {
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            Self::Atomic(atom) => tokens.push(atom.name()),
            Self::Transformed(transformed) => {
                tokens.push(transformed.transformer().name());
                transformed.object().push_tokens(tokens);
            }
            Self::Composite(composite) => {
                push_joined(composite.descriptors(), composite.composer().name(), tokens);
            }
        }
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(atom) => f.write_str(atom.name()),
            Self::Transformed(transformed) => {
                write!(f, "{}({})", transformed.transformer(), transformed.object())
            }
            Self::Composite(composite) => {
                write_call(f, composite.composer(), composite.descriptors())
            }
        }
    }
}
