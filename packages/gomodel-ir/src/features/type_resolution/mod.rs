//! Type resolution
//!
//! Normalizes raw type expressions into [`TypeDescriptor`]s.
//!
//! ## Structure
//! - `domain/` - TypeDescriptor, Parameter
//! - `ports/` - TypeResolver trait
//! - `infrastructure/` - GoTypeResolver

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{Parameter, TypeDescriptor};
pub use infrastructure::{resolve_type, GoTypeResolver};
pub use ports::TypeResolver;
