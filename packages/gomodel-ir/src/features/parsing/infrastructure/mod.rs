//! Parsing infrastructure - tree-sitter adapters

mod go_parser;

pub use go_parser::GoSourceParser;
