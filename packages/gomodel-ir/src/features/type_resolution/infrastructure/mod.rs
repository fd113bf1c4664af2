mod go_type_resolver;

pub use go_type_resolver::{resolve_type, GoTypeResolver};
