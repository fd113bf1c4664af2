/*
 * gomodel-ir - Normalized declaration model for Go source trees
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (ModelError, Span, CommentGroup)
 * - features/    : Vertical slices (parsing → discovery → classification
 *                  → type_resolution → entity_building → query → rendering)
 * - pipeline/    : Session orchestration
 * - config/      : Versioned YAML configuration
 *
 * Single-threaded and synchronous. A built model is immutable.
 */

#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::new_without_default)] // Default impl not always needed

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and utilities
pub mod shared;

/// Feature modules
pub mod features;

/// Session orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{BuildConfig, DiscoveryConfig, InitializerPolicy, ModelConfig};
pub use features::discovery::{
    CancellationToken, FileNode, PackageDiscoverer, PackageNode, PackageTree,
};
pub use features::entity_building::{
    Diagnostic, EntityBuilder, Field, Function, Import, Interface, Method, MethodSignature,
    ModelGraph, PackageId, PackageModel, Receiver, Struct, Tag, Variable, VariableKind,
};
pub use features::parsing::{GoSourceParser, SourceParser};
pub use features::query::{EntityKind, EntityRef, ModelQuery};
pub use features::rendering::{CanonicalRenderer, TemplateName, TemplateRenderer};
pub use features::type_resolution::{resolve_type, Parameter, TypeDescriptor, TypeResolver};
pub use pipeline::{ModelSession, SessionStats};
pub use shared::models::{CommentGroup, ErrorKind, ModelError, Result, Span};
