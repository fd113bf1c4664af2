mod classified;

pub use classified::{
    BindingDecl, ClassifiedDecls, FuncDecl, ImportDecl, InterfaceDecl, StructDecl,
};
