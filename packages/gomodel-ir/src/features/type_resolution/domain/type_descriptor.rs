//! Normalized type descriptors
//!
//! The five type shapes the model understands. `Display` renders the
//! canonical Go text of a descriptor; resolving that text again yields an
//! equal descriptor.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum TypeDescriptor {
    /// `T` or `pkg.T`
    Identifier { name: String },
    /// `*T`
    PointerTo { target: Box<TypeDescriptor> },
    /// `[]T`
    SliceOf { element: Box<TypeDescriptor> },
    /// `map[K]V` with identifier key and value
    MapOf { key: String, value: String },
    /// `func(params) results`
    FunctionSignature {
        params: Vec<Parameter>,
        results: Vec<Parameter>,
    },
}

impl TypeDescriptor {
    pub fn ident(name: impl Into<String>) -> Self {
        TypeDescriptor::Identifier { name: name.into() }
    }

    pub fn pointer(target: TypeDescriptor) -> Self {
        TypeDescriptor::PointerTo {
            target: Box::new(target),
        }
    }

    pub fn slice(element: TypeDescriptor) -> Self {
        TypeDescriptor::SliceOf {
            element: Box::new(element),
        }
    }

    pub fn map(key: impl Into<String>, value: impl Into<String>) -> Self {
        TypeDescriptor::MapOf {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn func(params: Vec<Parameter>, results: Vec<Parameter>) -> Self {
        TypeDescriptor::FunctionSignature { params, results }
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self, TypeDescriptor::PointerTo { .. })
    }

    /// Identifier behind at most one pointer (`T` and `*T` both give `T`)
    pub fn base_name(&self) -> Option<&str> {
        match self {
            TypeDescriptor::Identifier { name } => Some(name),
            TypeDescriptor::PointerTo { target } => match target.as_ref() {
                TypeDescriptor::Identifier { name } => Some(name),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Identifier { name } => f.write_str(name),
            TypeDescriptor::PointerTo { target } => write!(f, "*{}", target),
            TypeDescriptor::SliceOf { element } => write!(f, "[]{}", element),
            TypeDescriptor::MapOf { key, value } => write!(f, "map[{}]{}", key, value),
            TypeDescriptor::FunctionSignature { params, results } => {
                write!(f, "func({})", ParamList(params))?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] if single.name.is_empty() => write!(f, " {}", single.ty),
                    _ => write!(f, " ({})", ParamList(results)),
                }
            }
        }
    }
}

/// A parameter or result. Unnamed entries have an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDescriptor,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn unnamed(ty: TypeDescriptor) -> Self {
        Self::new("", ty)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name.is_empty() {
            write!(f, "{}", self.ty)
        } else {
            write!(f, "{} {}", self.name, self.ty)
        }
    }
}

/// Comma separated parameter list
pub struct ParamList<'a>(pub &'a [Parameter]);

impl fmt::Display for ParamList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, param) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shapes() {
        let ty = TypeDescriptor::slice(TypeDescriptor::pointer(TypeDescriptor::ident("User")));
        assert_eq!(ty.to_string(), "[]*User");
        assert_eq!(TypeDescriptor::map("string", "int").to_string(), "map[string]int");
    }

    #[test]
    fn test_display_function_results() {
        let no_results = TypeDescriptor::func(vec![], vec![]);
        assert_eq!(no_results.to_string(), "func()");

        let single = TypeDescriptor::func(
            vec![Parameter::new("ctx", TypeDescriptor::ident("context.Context"))],
            vec![Parameter::unnamed(TypeDescriptor::ident("error"))],
        );
        assert_eq!(single.to_string(), "func(ctx context.Context) error");

        let multi = TypeDescriptor::func(
            vec![Parameter::unnamed(TypeDescriptor::ident("int"))],
            vec![
                Parameter::unnamed(TypeDescriptor::ident("int")),
                Parameter::unnamed(TypeDescriptor::ident("error")),
            ],
        );
        assert_eq!(multi.to_string(), "func(int) (int, error)");

        let named = TypeDescriptor::func(
            vec![],
            vec![Parameter::new("n", TypeDescriptor::ident("int"))],
        );
        assert_eq!(named.to_string(), "func() (n int)");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(TypeDescriptor::ident("Foo").base_name(), Some("Foo"));
        assert_eq!(
            TypeDescriptor::pointer(TypeDescriptor::ident("Foo")).base_name(),
            Some("Foo")
        );
        assert_eq!(
            TypeDescriptor::slice(TypeDescriptor::ident("Foo")).base_name(),
            None
        );
    }

    #[test]
    fn test_serializes_with_shape_tag() {
        let json = serde_json::to_string(&TypeDescriptor::ident("int")).unwrap();
        assert_eq!(json, r#"{"shape":"identifier","name":"int"}"#);
    }
}
