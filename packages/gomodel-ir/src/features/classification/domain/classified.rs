//! Classified declaration groups
//!
//! Borrowed views into a [`RawFile`](crate::features::parsing::RawFile);
//! classification never copies declaration bodies.

use crate::features::parsing::domain::{
    RawField, RawFunc, RawImportSpec, RawInterfaceElem, RawTypeSpec, RawValueSpec,
};
use crate::shared::models::CommentGroup;

/// `type X struct { ... }`
#[derive(Debug, Clone, Copy)]
pub struct StructDecl<'a> {
    pub spec: &'a RawTypeSpec,
    pub fields: &'a [RawField],
    pub doc: &'a CommentGroup,
}

/// `type X interface { ... }`
#[derive(Debug, Clone, Copy)]
pub struct InterfaceDecl<'a> {
    pub spec: &'a RawTypeSpec,
    pub elems: &'a [RawInterfaceElem],
    pub doc: &'a CommentGroup,
}

/// `func ...` with or without receiver
#[derive(Debug, Clone, Copy)]
pub struct FuncDecl<'a> {
    pub func: &'a RawFunc,
    pub doc: &'a CommentGroup,
}

/// One spec of a `var`/`const` declaration
#[derive(Debug, Clone, Copy)]
pub struct BindingDecl<'a> {
    pub spec: &'a RawValueSpec,
    pub doc: &'a CommentGroup,
}

/// One spec of an `import` declaration
#[derive(Debug, Clone, Copy)]
pub struct ImportDecl<'a> {
    pub spec: &'a RawImportSpec,
    pub doc: &'a CommentGroup,
}

/// The seven declaration groups of one file, each in source order
#[derive(Debug, Clone, Default)]
pub struct ClassifiedDecls<'a> {
    pub structs: Vec<StructDecl<'a>>,
    pub interfaces: Vec<InterfaceDecl<'a>>,
    pub functions: Vec<FuncDecl<'a>>,
    pub methods: Vec<FuncDecl<'a>>,
    pub variables: Vec<BindingDecl<'a>>,
    pub constants: Vec<BindingDecl<'a>>,
    pub imports: Vec<ImportDecl<'a>>,
}

impl<'a> ClassifiedDecls<'a> {
    pub fn len(&self) -> usize {
        self.structs.len()
            + self.interfaces.len()
            + self.functions.len()
            + self.methods.len()
            + self.variables.len()
            + self.constants.len()
            + self.imports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
