//! Compositional phrase algebra
//!
//! Phrases are owned trees built by applying operators to finished operands:
//! - A [`Transformer`] turns an [`Entity`] into a [`Descriptor`]
//! - A [`Descriptor`] applied to an [`Entity`] or [`Action`] describes it
//! - A [`Composer`] joins two or more phrases of the same kind
//! - An [`Action`] applied to entities yields a [`Process`]
//!
//! Every phrase linearizes to a token sequence and displays in functional
//! notation, e.g. `inside_of(square)(circle)`.

/// Verb-like phrases and the processes built from them
pub mod action;
/// Modifiers applied to entities and actions
pub mod descriptor;
/// Noun-like phrases
pub mod entity;
/// Transformers and composers
pub mod operator;
/// Kind tags, the any-kind phrase wrapper and linearization
pub mod phrase;

pub use action::{
    Action, AtomicAction, AtomicProcess, CompositeAction, CompositeProcess, DescriptedAction,
    Process,
};
pub use descriptor::{AtomicDescriptor, CompositeDescriptor, Descriptor, TransformedDescriptor};
pub use entity::{AtomicEntity, CompositeEntity, DescriptedEntity, Entity};
pub use operator::{Composer, Transformer};
pub use phrase::{Kind, Linearize, Phrase};
