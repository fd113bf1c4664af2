//! Normalized declaration entities
//!
//! Every entity records the package and file it was declared in. Field,
//! parameter and result types are always resolved descriptors.

use serde::Serialize;

use crate::features::parsing::domain::TagLiteralKind;
use crate::features::type_resolution::domain::{Parameter, TypeDescriptor};
use crate::shared::models::{CommentGroup, Span};

// ═══════════════════════════════════════════════════════════════════════════
// Structs
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Struct {
    pub package: String,
    pub file_path: String,
    pub name: String,
    pub doc: CommentGroup,
    pub fields: Vec<Field>,
    pub span: Span,
}

impl Struct {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Empty for embedded fields
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<Tag>,
    pub doc: CommentGroup,
}

impl Field {
    pub fn is_embedded(&self) -> bool {
        self.name.is_empty()
    }
}

/// Parsed struct tag. `key`/`value` mirror the first pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tag {
    pub kind: TagLiteralKind,
    /// Literal as written, delimiters included
    pub literal: String,
    pub key: String,
    pub value: String,
    pub pairs: Vec<TagPair>,
}

impl Tag {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagPair {
    pub key: String,
    pub value: String,
}

// ═══════════════════════════════════════════════════════════════════════════
// Interfaces
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interface {
    pub package: String,
    pub file_path: String,
    pub name: String,
    pub doc: CommentGroup,
    pub methods: Vec<MethodSignature>,
    pub span: Span,
}

/// Interface member: a method, or an embedded interface when `embedded` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MethodSignature {
    pub name: String,
    pub doc: CommentGroup,
    pub params: Option<Vec<Parameter>>,
    pub results: Option<Vec<Parameter>>,
    pub embedded: Option<TypeDescriptor>,
}

impl MethodSignature {
    pub fn is_embedded(&self) -> bool {
        self.embedded.is_some()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Functions & methods
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Function {
    pub package: String,
    pub file_path: String,
    pub name: String,
    pub doc: CommentGroup,
    pub params: Vec<Parameter>,
    pub results: Vec<Parameter>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Method {
    pub package: String,
    pub file_path: String,
    pub name: String,
    pub doc: CommentGroup,
    pub receiver: Receiver,
    pub params: Vec<Parameter>,
    pub results: Vec<Parameter>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receiver {
    /// Empty when the receiver is unnamed
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
    pub is_pointer: bool,
}

impl Receiver {
    /// Receiver type name without the pointer
    pub fn base_type(&self) -> &str {
        self.ty.base_name().unwrap_or_default()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Variables, constants, imports
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableKind {
    Constant,
    Mutable,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Variable {
    pub package: String,
    pub file_path: String,
    pub name: String,
    pub doc: CommentGroup,
    pub comment: CommentGroup,
    pub kind: VariableKind,
    pub declared_type: Option<TypeDescriptor>,
    /// Normalized initializer; `None` when absent (distinct from `""`)
    pub value: Option<String>,
    /// Source text of an initializer kept under the report policy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsupported_initializer: Option<String>,
    pub span: Span,
}

impl Variable {
    pub fn is_constant(&self) -> bool {
        self.kind == VariableKind::Constant
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Import {
    pub package: String,
    pub file_path: String,
    pub alias: Option<String>,
    /// Path literal as written, quotes included
    pub path: String,
    pub doc: CommentGroup,
    pub comment: CommentGroup,
    pub span: Span,
}

impl Import {
    pub fn unquoted_path(&self) -> &str {
        self.path.trim_matches(|c| c == '"' || c == '`')
    }

    /// Matches the alias or the unquoted path
    pub fn matches(&self, name: &str) -> bool {
        self.alias.as_deref() == Some(name) || self.unquoted_path() == name
    }
}
