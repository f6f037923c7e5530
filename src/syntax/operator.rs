//! Operators that build larger phrases: transformers and composers

use std::fmt;

use crate::io::error::{Result, invalid_composition};
use crate::syntax::action::{CompositeAction, CompositeProcess};
use crate::syntax::descriptor::{CompositeDescriptor, TransformedDescriptor};
use crate::syntax::entity::CompositeEntity;
use crate::syntax::{Action, Descriptor, Entity, Kind, Phrase, Process};

/// Relation word turning an entity into a descriptor, e.g. `inside_of`
///
/// Applying `inside_of` to `square` yields the descriptor `inside_of(square)`;
/// applying that descriptor to `circle` yields `inside_of(square)(circle)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transformer {
    name: String,
    input: Kind,
    output: Kind,
}

impl Transformer {
    /// Declare a transformer with its operand and result kinds
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidComposition`] unless the
    /// declaration is `entity -> descriptor`, the only shape a transformed
    /// descriptor can hold
    pub fn new(name: impl Into<String>, input: Kind, output: Kind) -> Result<Self> {
        let name = name.into();
        if input != Kind::Entity || output != Kind::Descriptor {
            return Err(invalid_composition(
                &name,
                &format!("transformers map entity -> descriptor, not {input} -> {output}"),
            ));
        }
        Ok(Self {
            name,
            input,
            output,
        })
    }

    /// Entity-to-descriptor relation word
    pub fn relation(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input: Kind::Entity,
            output: Kind::Descriptor,
        }
    }

    /// The word itself
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared operand kind
    pub const fn input(&self) -> Kind {
        self.input
    }

    /// Declared result kind
    pub const fn output(&self) -> Kind {
        self.output
    }

    /// Apply the transformer to its object
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidComposition`] when the operand
    /// kind differs from the declared input
    pub fn apply(&self, operand: impl Into<Phrase>) -> Result<Descriptor> {
        match operand.into() {
            Phrase::Entity(object) if self.input == Kind::Entity => Ok(Descriptor::Transformed(
                TransformedDescriptor::new(self.clone(), object),
            )),
            other => Err(invalid_composition(
                &self.name,
                &format!("expected {} operand, got {}", self.input, other.kind()),
            )),
        }
    }
}

impl fmt::Display for Transformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Connective word joining same-kind phrases, e.g. `and`
///
/// The signature table lists every accepted sequence of operand kinds;
/// [`Composer::compose`] refuses anything not in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Composer {
    name: String,
    signatures: Vec<Vec<Kind>>,
}

impl Composer {
    /// Declare a connective with its accepted operand kind sequences
    pub fn new(name: impl Into<String>, signatures: Vec<Vec<Kind>>) -> Self {
        Self {
            name: name.into(),
            signatures,
        }
    }

    /// Binary `and` over every phrase family
    pub fn conjunction() -> Self {
        Self::new(
            "and",
            vec![
                vec![Kind::Entity, Kind::Entity],
                vec![Kind::Action, Kind::Action],
                vec![Kind::Process, Kind::Process],
                vec![Kind::Descriptor, Kind::Descriptor],
            ],
        )
    }

    /// The word itself
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Accepted operand kind sequences
    pub fn signatures(&self) -> &[Vec<Kind>] {
        &self.signatures
    }

    /// Whether an operand kind sequence appears in the signature table
    pub fn validate(&self, kinds: &[Kind]) -> bool {
        self.signatures.iter().any(|signature| signature == kinds)
    }

    /// Join phrases into the composite of their shared kind
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidComposition`] when fewer than
    /// two operands are given, the kind sequence is not in the signature
    /// table, or the operands mix kinds
    pub fn compose<I>(&self, args: I) -> Result<Phrase>
    where
        I: IntoIterator,
        I::Item: Into<Phrase>,
    {
        let args: Vec<Phrase> = args.into_iter().map(Into::into).collect();
        let kinds: Vec<Kind> = args.iter().map(Phrase::kind).collect();

        let Some(&first) = kinds.first() else {
            return Err(invalid_composition(&self.name, &"no operands"));
        };
        if kinds.len() < 2 {
            return Err(invalid_composition(
                &self.name,
                &"a connective needs at least two operands",
            ));
        }
        if !self.validate(&kinds) {
            return Err(invalid_composition(
                &self.name,
                &format!("operand kinds [{}] not accepted", join_kinds(&kinds)),
            ));
        }
        if kinds.iter().any(|&kind| kind != first) {
            return Err(invalid_composition(
                &self.name,
                &format!("operands mix kinds [{}]", join_kinds(&kinds)),
            ));
        }

        let mismatch = || invalid_composition(&self.name, &"operand kind changed during dispatch");
        let composer = self.clone();
        let phrase = match first {
            Kind::Entity => {
                let entities = collect_family(args, Phrase::into_entity).ok_or_else(mismatch)?;
                Phrase::Entity(Entity::Composite(CompositeEntity::new(composer, entities)))
            }
            Kind::Descriptor => {
                let descriptors =
                    collect_family(args, Phrase::into_descriptor).ok_or_else(mismatch)?;
                Phrase::Descriptor(Descriptor::Composite(CompositeDescriptor::new(
                    composer,
                    descriptors,
                )))
            }
            Kind::Action => {
                let actions = collect_family(args, Phrase::into_action).ok_or_else(mismatch)?;
                Phrase::Action(Action::Composite(CompositeAction::new(composer, actions)))
            }
            Kind::Process => {
                let processes = collect_family(args, Phrase::into_process).ok_or_else(mismatch)?;
                Phrase::Process(Process::Composite(CompositeProcess::new(
                    composer, processes,
                )))
            }
        };
        Ok(phrase)
    }
}

impl fmt::Display for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

fn collect_family<T>(args: Vec<Phrase>, unwrap: fn(Phrase) -> Option<T>) -> Option<Vec<T>> {
    args.into_iter().map(unwrap).collect()
}

fn join_kinds(kinds: &[Kind]) -> String {
    kinds
        .iter()
        .map(|kind| kind.name())
        .collect::<Vec<_>>()
        .join(", ")
}
