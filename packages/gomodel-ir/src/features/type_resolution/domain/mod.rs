pub mod type_descriptor;

pub use type_descriptor::{ParamList, Parameter, TypeDescriptor};
