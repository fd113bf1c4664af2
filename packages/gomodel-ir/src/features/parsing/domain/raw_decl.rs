//! Raw declaration tree
//!
//! What the parser front-end hands to the rest of the pipeline: top-level
//! declarations of one file, still in their syntactic shape. Nothing here is
//! resolved or validated beyond "the grammar accepted it".

use crate::shared::models::{CommentGroup, Span};

/// One parsed source file
#[derive(Debug, Clone, PartialEq)]
pub struct RawFile {
    pub path: String,
    /// Name from the `package` clause
    pub package_name: String,
    /// Top-level declarations in source order
    pub decls: Vec<RawDecl>,
}

impl RawFile {
    pub fn new(path: impl Into<String>, package_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            package_name: package_name.into(),
            decls: Vec::new(),
        }
    }
}

/// A top-level declaration with its leading documentation
#[derive(Debug, Clone, PartialEq)]
pub struct RawDecl {
    pub kind: RawDeclKind,
    pub doc: CommentGroup,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RawDeclKind {
    /// `type X ...` or `type ( ... )`
    Type(Vec<RawTypeSpec>),
    /// `func ...`, optionally with a receiver
    Func(RawFunc),
    /// `var ...` / `const ...`, single or grouped
    Bindings {
        keyword: BindingKeyword,
        specs: Vec<RawValueSpec>,
    },
    /// `import ...`, single or grouped
    Imports(Vec<RawImportSpec>),
}

impl RawDeclKind {
    /// Number of specs a keyword introduces (1 for functions)
    pub fn spec_count(&self) -> usize {
        match self {
            RawDeclKind::Type(specs) => specs.len(),
            RawDeclKind::Func(_) => 1,
            RawDeclKind::Bindings { specs, .. } => specs.len(),
            RawDeclKind::Imports(specs) => specs.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKeyword {
    Const,
    Var,
}

/// `Name [TypeParams] Type` or `Name = Type`
#[derive(Debug, Clone, PartialEq)]
pub struct RawTypeSpec {
    pub name: String,
    pub doc: CommentGroup,
    pub is_alias: bool,
    /// Source text of a type parameter list, if any
    pub type_params: Option<String>,
    pub type_expr: TypeExpr,
    pub span: Span,
}

/// Function or method declaration
#[derive(Debug, Clone, PartialEq)]
pub struct RawFunc {
    pub name: String,
    pub receiver: Option<RawParam>,
    pub type_params: Option<String>,
    pub signature: RawSignature,
    pub span: Span,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSignature {
    pub params: Vec<RawParam>,
    pub results: Vec<RawParam>,
}

/// One entry of a parameter list: `a, b T`, `a T` or bare `T`
#[derive(Debug, Clone, PartialEq)]
pub struct RawParam {
    pub names: Vec<String>,
    pub type_expr: TypeExpr,
}

impl RawParam {
    pub fn unnamed(type_expr: TypeExpr) -> Self {
        Self {
            names: Vec::new(),
            type_expr,
        }
    }

    pub fn named(name: impl Into<String>, type_expr: TypeExpr) -> Self {
        Self {
            names: vec![name.into()],
            type_expr,
        }
    }
}

/// One `field_declaration` of a struct body
#[derive(Debug, Clone, PartialEq)]
pub struct RawField {
    /// Empty for embedded fields
    pub names: Vec<String>,
    pub type_expr: TypeExpr,
    pub tag: Option<RawTag>,
    pub doc: CommentGroup,
    pub span: Span,
}

/// Tag literal exactly as written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTag {
    pub literal: String,
    pub kind: TagLiteralKind,
}

/// The string literal flavour a tag was written with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagLiteralKind {
    /// `` `json:"name"` ``
    Raw,
    /// `"json:\"name\""`
    Interpreted,
}

/// One element of an interface body
#[derive(Debug, Clone, PartialEq)]
pub enum RawInterfaceElem {
    Method {
        name: String,
        signature: RawSignature,
        doc: CommentGroup,
    },
    Embedded {
        type_expr: TypeExpr,
        doc: CommentGroup,
    },
}

/// A type expression as written
#[derive(Debug, Clone, PartialEq)]
pub enum TypeExpr {
    /// `T` or `pkg.T`
    Ident(String),
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `map[K]V`
    Map { key: Box<TypeExpr>, value: Box<TypeExpr> },
    /// `func(params) results`
    Func(RawSignature),
    /// `struct { ... }`
    Struct(Vec<RawField>),
    /// `interface { ... }`
    Interface(Vec<RawInterfaceElem>),
    /// Any other grammar shape (channels, arrays, generics, variadics, ...)
    Unsupported { kind: String, text: String },
}

impl TypeExpr {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeExpr::Ident(name.into())
    }

    pub fn pointer(inner: TypeExpr) -> Self {
        TypeExpr::Pointer(Box::new(inner))
    }

    pub fn slice(inner: TypeExpr) -> Self {
        TypeExpr::Slice(Box::new(inner))
    }

    /// Short description used in diagnostics
    pub fn shape_name(&self) -> &str {
        match self {
            TypeExpr::Ident(_) => "identifier",
            TypeExpr::Pointer(_) => "pointer",
            TypeExpr::Slice(_) => "slice",
            TypeExpr::Map { .. } => "map",
            TypeExpr::Func(_) => "function",
            TypeExpr::Struct(_) => "inline struct",
            TypeExpr::Interface(_) => "inline interface",
            TypeExpr::Unsupported { kind, .. } => kind,
        }
    }
}

/// `names [Type] [= values]` inside a var/const declaration
#[derive(Debug, Clone, PartialEq)]
pub struct RawValueSpec {
    pub names: Vec<String>,
    pub declared_type: Option<TypeExpr>,
    pub values: Vec<InitExpr>,
    pub doc: CommentGroup,
    pub comment: CommentGroup,
    pub span: Span,
}

/// Initializer expression shapes the model distinguishes
#[derive(Debug, Clone, PartialEq)]
pub enum InitExpr {
    /// Numeric, rune or string literal text
    Literal(String),
    /// Identifier such as `iota`, `true` or another constant
    Ident(String),
    /// `op operand`
    Unary { op: String, operand: Box<InitExpr> },
    /// `T{...}`
    Composite { type_expr: TypeExpr, text: String },
    /// Calls, binary expressions, selectors, ...
    Other { kind: String, text: String },
}

impl InitExpr {
    /// Source text of the expression
    pub fn text(&self) -> String {
        match self {
            InitExpr::Literal(text) | InitExpr::Ident(text) => text.clone(),
            InitExpr::Unary { op, operand } => format!("{}{}", op, operand.text()),
            InitExpr::Composite { text, .. } | InitExpr::Other { text, .. } => text.clone(),
        }
    }
}

/// `[alias] "path"` inside an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawImportSpec {
    pub alias: Option<String>,
    /// Path literal including its quotes
    pub path: String,
    pub doc: CommentGroup,
    pub comment: CommentGroup,
    pub span: Span,
}
