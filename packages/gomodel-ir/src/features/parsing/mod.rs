//! Parsing Feature
//!
//! Adapter over the external grammar-level parser. Produces the raw
//! declaration tree consumed by discovery and classification.
//!
//! ## Structure
//! - `domain/` - RawFile, RawDecl, TypeExpr, InitExpr
//! - `ports/` - SourceParser trait
//! - `infrastructure/` - GoSourceParser (tree-sitter-go)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{RawDecl, RawDeclKind, RawFile, TypeExpr};
pub use infrastructure::GoSourceParser;
pub use ports::SourceParser;
