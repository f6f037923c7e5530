//! Verb-like phrases and the processes formed by applying them to entities

use std::fmt;

use crate::io::error::{Result, invalid_composition};
use crate::syntax::phrase::{push_joined, write_call};
use crate::syntax::{Composer, Descriptor, Entity, Linearize};

/// A single verb with a fixed number of entity arguments, e.g. `eat/2`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AtomicAction {
    name: String,
    arity: usize,
}

impl AtomicAction {
    /// Create a verb taking `arity` entity arguments
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }

    /// The word itself
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of entity arguments
    pub const fn arity(&self) -> usize {
        self.arity
    }
}

/// An action modified by a descriptor, e.g. `nicely(eat)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptedAction {
    action: Box<Action>,
    descriptor: Box<Descriptor>,
}

impl DescriptedAction {
    pub(crate) fn new(action: Action, descriptor: Descriptor) -> Self {
        Self {
            action: Box::new(action),
            descriptor: Box::new(descriptor),
        }
    }

    /// The action being described
    pub fn action(&self) -> &Action {
        &self.action
    }

    /// The descriptor applied to it
    pub fn descriptor(&self) -> &Descriptor {
        &self.descriptor
    }
}

/// Two or more actions joined by a connective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeAction {
    composer: Composer,
    actions: Vec<Action>,
}

impl CompositeAction {
    pub(crate) const fn new(composer: Composer, actions: Vec<Action>) -> Self {
        Self { composer, actions }
    }

    /// The connective
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Joined actions in order
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// Verb-like phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Single verb
    Atomic(AtomicAction),
    /// Action plus descriptor
    Descripted(DescriptedAction),
    /// Connective over several actions
    Composite(CompositeAction),
}

impl Action {
    /// Shorthand for an atomic action
    pub fn atomic(name: impl Into<String>, arity: usize) -> Self {
        Self::Atomic(AtomicAction::new(name, arity))
    }

    /// Number of entity arguments this action expects
    ///
    /// Described actions inherit the arity of the underlying verb; a
    /// conjunction takes the arity of its first member.
    pub fn arity(&self) -> usize {
        match self {
            Self::Atomic(atom) => atom.arity(),
            Self::Descripted(described) => described.action().arity(),
            Self::Composite(composite) => composite.actions().first().map_or(0, Self::arity),
        }
    }

    /// Apply the action to its arguments
    ///
    /// # Errors
    ///
    /// Returns [`crate::GeneratorError::InvalidComposition`] when the argument
    /// count differs from [`Action::arity`] or no arguments are given
    pub fn perform(self, args: Vec<Entity>) -> Result<Process> {
        let arity = self.arity();
        if args.is_empty() || args.len() != arity {
            return Err(invalid_composition(
                &self,
                &format!("expected {arity} argument(s), got {}", args.len()),
            ));
        }
        Ok(Process::Atomic(AtomicProcess { action: self, args }))
    }
}

impl Linearize for Action {
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            Self::Atomic(atom) => tokens.push(atom.name()),
            Self::Descripted(described) => {
                described.descriptor().push_tokens(tokens);
                described.action().push_tokens(tokens);
            }
            Self::Composite(composite) => {
                push_joined(composite.actions(), composite.composer().name(), tokens);
            }
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(atom) => f.write_str(atom.name()),
            Self::Descripted(described) => {
                write!(f, "{}({})", described.descriptor(), described.action())
            }
            Self::Composite(composite) => write_call(f, composite.composer(), composite.actions()),
        }
    }
}

/// An action applied to entity arguments, e.g. `eat(John, food)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtomicProcess {
    action: Action,
    args: Vec<Entity>,
}

impl AtomicProcess {
    /// The applied action
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Arguments in order; the first reads as the subject
    pub fn args(&self) -> &[Entity] {
        &self.args
    }
}

/// Two or more processes joined by a connective
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeProcess {
    composer: Composer,
    processes: Vec<Process>,
}

impl CompositeProcess {
    pub(crate) const fn new(composer: Composer, processes: Vec<Process>) -> Self {
        Self {
            composer,
            processes,
        }
    }

    /// The connective
    pub const fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Joined processes in order
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }
}

/// Clause-like phrase
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Process {
    /// Action applied to arguments
    Atomic(AtomicProcess),
    /// Connective over several processes
    Composite(CompositeProcess),
}

impl Linearize for Process {
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            // Subject, verb, then remaining arguments
            Self::Atomic(process) => {
                if let Some((subject, rest)) = process.args().split_first() {
                    subject.push_tokens(tokens);
                    process.action().push_tokens(tokens);
                    for arg in rest {
                        arg.push_tokens(tokens);
                    }
                } else {
                    process.action().push_tokens(tokens);
                }
            }
            Self::Composite(composite) => {
                push_joined(composite.processes(), composite.composer().name(), tokens);
            }
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Atomic(process) => write_call(f, process.action(), process.args()),
            Self::Composite(composite) => {
                write_call(f, composite.composer(), composite.processes())
            }
        }
    }
}
