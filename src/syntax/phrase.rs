//! Kind tags, the any-kind phrase wrapper and linearization

use std::fmt;

use crate::syntax::{Action, Descriptor, Entity, Process};

/// Tag identifying which phrase family a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Noun-like phrase
    Entity,
    /// Modifier of an entity or action
    Descriptor,
    /// Verb-like phrase
    Action,
    /// Action applied to its arguments
    Process,
}

impl Kind {
    /// Lowercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Descriptor => "descriptor",
            Self::Action => "action",
            Self::Process => "process",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Flattening of a phrase tree into its word tokens
///
/// Implementors only push tokens; the joined string form is derived.
pub trait Linearize {
    /// Append this phrase's tokens to `tokens` in reading order
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>);

    /// Tokens in reading order
    fn tokens(&self) -> Vec<&str> {
        let mut tokens = Vec::new();
        self.push_tokens(&mut tokens);
        tokens
    }

    /// Tokens joined by single spaces
    fn linearize(&self) -> String {
        self.tokens().join(" ")
    }
}

/// Any phrase, tagged by family
///
/// Operators that accept more than one family take a `Phrase` and dispatch
/// once on its [`Kind`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phrase {
    /// An entity
    Entity(Entity),
    /// A descriptor
    Descriptor(Descriptor),
    /// An action
    Action(Action),
    /// A process
    Process(Process),
}

impl Phrase {
    /// Family tag
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Entity(_) => Kind::Entity,
            Self::Descriptor(_) => Kind::Descriptor,
            Self::Action(_) => Kind::Action,
            Self::Process(_) => Kind::Process,
        }
    }

    /// The wrapped entity, if this is one
    pub fn into_entity(self) -> Option<Entity> {
        match self {
            Self::Entity(entity) => Some(entity),
            _ => None,
        }
    }

    /// The wrapped descriptor, if this is one
    pub fn into_descriptor(self) -> Option<Descriptor> {
        match self {
            Self::Descriptor(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// The wrapped action, if this is one
    pub fn into_action(self) -> Option<Action> {
        match self {
            Self::Action(action) => Some(action),
            _ => None,
        }
    }

    /// The wrapped process, if this is one
    pub fn into_process(self) -> Option<Process> {
        match self {
            Self::Process(process) => Some(process),
            _ => None,
        }
    }
}

impl Linearize for Phrase {
    fn push_tokens<'a>(&'a self, tokens: &mut Vec<&'a str>) {
        match self {
            Self::Entity(entity) => entity.push_tokens(tokens),
            Self::Descriptor(descriptor) => descriptor.push_tokens(tokens),
            Self::Action(action) => action.push_tokens(tokens),
            Self::Process(process) => process.push_tokens(tokens),
        }
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entity(entity) => write!(f, "{entity}"),
            Self::Descriptor(descriptor) => write!(f, "{descriptor}"),
            Self::Action(action) => write!(f, "{action}"),
            Self::Process(process) => write!(f, "{process}"),
        }
    }
}

impl From<Entity> for Phrase {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<Descriptor> for Phrase {
    fn from(descriptor: Descriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<Action> for Phrase {
    fn from(action: Action) -> Self {
        Self::Action(action)
    }
}

impl From<Process> for Phrase {
    fn from(process: Process) -> Self {
        Self::Process(process)
    }
}

/// Push `items` separated by `separator`
///
/// Shared by every composite variant; arity above two folds the same way.
pub(crate) fn push_joined<'a, T: Linearize>(
    items: &'a [T],
    separator: &'a str,
    tokens: &mut Vec<&'a str>,
) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            tokens.push(separator);
        }
        item.push_tokens(tokens);
    }
}

/// Write `head(a, b, ...)`
pub(crate) fn write_call<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    head: &dyn fmt::Display,
    args: &[T],
) -> fmt::Result {
    write!(f, "{head}(")?;
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{arg}")?;
    }
    f.write_str(")")
}
