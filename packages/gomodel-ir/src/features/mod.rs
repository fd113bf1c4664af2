//! Feature modules - Each feature follows Hexagonal Architecture
//!
//! Each feature contains:
//! - domain/     - Pure data types (no I/O)
//! - ports/      - Interface definitions (traits)
//! - application/ - Use cases
//! - infrastructure/ - External dependency implementations
//!
//! Data flows parsing → discovery → classification → type_resolution →
//! entity_building → query → rendering.

pub mod classification;
pub mod discovery;
pub mod entity_building;
pub mod parsing;
pub mod query;
pub mod rendering;
pub mod type_resolution;
