//! Parsing domain models

mod raw_decl;

pub use raw_decl::{
    BindingKeyword, InitExpr, RawDecl, RawDeclKind, RawField, RawFile, RawImportSpec,
    RawInterfaceElem, RawParam, RawSignature, RawTag, RawTypeSpec, RawValueSpec, RawFunc,
    TagLiteralKind, TypeExpr,
};
