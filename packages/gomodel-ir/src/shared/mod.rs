//! Shared module - Common types and utilities
//!
//! Types shared by every feature: errors, spans, comment groups and the
//! tree-sitter helpers used by the parser front-end.

pub mod models;
pub mod utils;

// Re-exports for convenience
pub use models::*;
