mod type_resolver;

pub use type_resolver::TypeResolver;
