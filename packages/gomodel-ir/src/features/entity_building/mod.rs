//! Entity building
//!
//! Normalizes classified declarations into entities and assembles the
//! immutable [`ModelGraph`].
//!
//! ## Structure
//! - `domain/` - entities, ModelGraph, Diagnostic
//! - `application/` - EntityBuilder
//! - `infrastructure/` - struct tag parsing, initializer normalization

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::EntityBuilder;
pub use domain::{
    Diagnostic, Field, FileModel, Function, Import, Interface, Method, MethodSignature,
    ModelGraph, PackageId, PackageModel, Receiver, Struct, Tag, TagPair, Variable, VariableKind,
};
