//! Template rendering
//!
//! ## Structure
//! - `ports/` - TemplateRenderer trait, TemplateName
//! - `infrastructure/` - CanonicalRenderer

pub mod infrastructure;
pub mod ports;

pub use infrastructure::CanonicalRenderer;
pub use ports::{TemplateName, TemplateRenderer};
