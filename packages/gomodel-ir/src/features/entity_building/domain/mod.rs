pub mod diagnostic;
pub mod entities;
pub mod model_graph;

pub use diagnostic::Diagnostic;
pub use entities::{
    Field, Function, Import, Interface, Method, MethodSignature, Receiver, Struct, Tag, TagPair,
    Variable, VariableKind,
};
pub use model_graph::{FileModel, MethodRef, ModelGraph, PackageId, PackageModel};
