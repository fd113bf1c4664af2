//! Declaration classification
//!
//! Splits a parsed file into structs, interfaces, functions, methods,
//! variables, constants and imports.

pub mod application;
pub mod domain;

pub use application::DeclarationClassifier;
pub use domain::ClassifiedDecls;
