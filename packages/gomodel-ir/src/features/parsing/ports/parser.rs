//! Parser port (interface)
//!
//! The grammar-level parser is an external capability: anything that turns
//! file text into a [`RawFile`] can drive discovery.

use crate::features::parsing::domain::RawFile;
use crate::shared::models::Result;

/// Parser trait - abstraction over the parsing implementation
pub trait SourceParser: Send + Sync {
    /// Parse one file. Fails with a syntax error on the first grammar fault.
    fn parse(&self, source: &str, file_path: &str) -> Result<RawFile>;

    /// Check if this parser supports the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
