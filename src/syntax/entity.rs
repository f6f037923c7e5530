//! Noun-like phrases: single words, described entities and conjunctions

use std::fmt;

use crate::syntax::phrase::{push_joined, write_call};
use crate::syntax::{Composer, Descriptor, Linearize};

/// A single noun, e.g. `circle`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicEntity {
    name: String,
}

impl AtomicEntity {
    /// Create a word entity
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// The word itself
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An entity modified by a descriptor, e.g. `inside_of(square)(circle)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptedEntity {
    entity: Box<Entity>,
    descriptor: Box<Descriptor>,
}

impl DescriptedEntity {
    pub(crate) fn new(entity: Entity, descriptor: Descriptor) -> Self {
        Self {
            entity: Box::new(entity),
            descriptor: Box::new(descriptor),
        }
    }

    /// The entity being described
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// The descriptor applied to it
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// Two or more entities joined by a connective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeEntity {
    composer: Composer,
    entities: Vec<Entity>,
}

impl CompositeEntity {
    pub(crate) const fn new(composer: Composer, entities: Vec<Entity>) -> Self {
        Self { composer, entities }
    }

    /// The connective
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Joined entities in order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }
}

/// Noun-like phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entity {
    /// Single word
    Atomic(AtomicEntity),
    /// Entity plus descriptor
    Descripted(DescriptedEntity),
    /// Connective over several entities
    Composite(CompositeEntity),
}

impl Entity {
    /// Shorthand for an atomic entity
    pub fn atomic(name: impl Into<String>) -> Self {
        Self::Atomic(AtomicEntity::new(name))
    }

    /// The word, when this is a single-word entity
    pub const fn as_atomic(&self) -> Option<&AtomicEntity> {
        match self {
            Self::Atomic(atom) => Some(atom),
            _ => None,
        }
    }

    /// Whether this is a single word
    pub const fn is_atomic(&self) -> bool {
        matches!(self, Self::Atomic(_))
    }

    /// Nesting depth of relations; a single word has depth 0
    pub fn depth(&self) -> usize {
        match self {
            Self::Atomic(_) => 0,
            Self::Descripted(described) => {
                1 + described
                    .entity()
                    .depth()
                    .max(described.descriptor().depth())
            }
            Self::Composite(composite) => {
                1 + composite
                    .entities()
                    .iter()
                    .map(Self::depth)
                    .max()
                    .unwrap_or(0)
            }
        }
    }

    /// Number of single-word entities in the tree, including descriptor operands
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Atomic(_) => 1,
            Self::Descripted(described) => {
                described.entity().leaf_count() + described.descriptor().leaf_count()
            }
            Self::Composite(composite) => composite.entities().iter().map(Self::leaf_count).sum(),
        }
    }
}

impl From<AtomicEntity> for Entity {
    fn from(atom: AtomicEntity) -> Self {
        Self::Atomic(atom)
    }
}

impl Linearize for Entity {
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            Self::Atomic(atom) => tokens.push(atom.name()),
            // Relations read postfix ("circle inside_of square"), plain modifiers prefix
            Self::Descripted(described) => match described.descriptor() {
                Descriptor::Transformed(_) => {
                    described.entity().push_tokens(tokens);
                    described.descriptor().push_tokens(tokens);
                }
                Descriptor::Atomic(_) | Descriptor::Composite(_) => {
                    described.descriptor().push_tokens(tokens);
                    described.entity().push_tokens(tokens);
                }
            },
            Self::Composite(composite) => {
                push_joined(composite.entities(), composite.composer().name(), tokens);
            }
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(atom) => f.write_str(atom.name()),
            Self::Descripted(described) => {
                write!(f, "{}({})", described.descriptor(), described.entity())
            }
            Self::Composite(composite) => write_call(f, composite.composer(), composite.entities()),
        }
    }
}
