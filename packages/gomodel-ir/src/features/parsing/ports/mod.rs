//! Parsing ports (interfaces)

pub mod parser;

pub use parser::SourceParser;
