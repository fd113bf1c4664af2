/*
 * Go Type Resolver - local, syntactic type normalization
 *
 * Supported shapes:
 * - identifier (qualified names stay a single identifier)
 * - pointer, slice
 * - map with identifier key and value
 * - function signature
 *
 * Everything else fails with UnsupportedType. Nothing is looked up
 * across files or packages.
 */

use crate::features::parsing::domain::TypeExpr;
use crate::features::type_resolution::domain::TypeDescriptor;
use crate::features::type_resolution::ports::TypeResolver;
use crate::shared::models::{ModelError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct GoTypeResolver;

impl GoTypeResolver {
    pub fn new() -> Self {
        Self
    }

    fn map_operand(&self, expr: &TypeExpr, position: &str) -> Result<String> {
        match expr {
            TypeExpr::Ident(name) => Ok(name.clone()),
            other => Err(ModelError::unsupported_type(format!(
                "map {} must be an identifier, found {}",
                position,
                other.shape_name()
            ))),
        }
    }
}

impl TypeResolver for GoTypeResolver {
    fn resolve(&self, expr: &TypeExpr) -> Result<TypeDescriptor> {
        match expr {
            TypeExpr::Ident(name) => Ok(TypeDescriptor::ident(name.as_str())),
            TypeExpr::Pointer(inner) => Ok(TypeDescriptor::pointer(self.resolve(inner)?)),
            TypeExpr::Slice(inner) => Ok(TypeDescriptor::slice(self.resolve(inner)?)),
            TypeExpr::Map { key, value } => Ok(TypeDescriptor::map(
                self.map_operand(key, "key")?,
                self.map_operand(value, "value")?,
            )),
            TypeExpr::Func(signature) => {
                let (params, results) = self.resolve_signature(signature)?;
                Ok(TypeDescriptor::func(params, results))
            }
            TypeExpr::Struct(_) | TypeExpr::Interface(_) => Err(ModelError::unsupported_type(
                format!("anonymous {} types are not supported", expr.shape_name()),
            )),
            TypeExpr::Unsupported { kind, text } => Err(ModelError::unsupported_type(format!(
                "unsupported type expression `{}` ({})",
                text, kind
            ))),
        }
    }
}

/// Resolve with the default Go resolver
pub fn resolve_type(expr: &TypeExpr) -> Result<TypeDescriptor> {
    GoTypeResolver.resolve(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::domain::{RawParam, RawSignature};
    use crate::features::type_resolution::domain::Parameter;
    use crate::shared::models::ErrorKind;

    #[test]
    fn test_nested_shapes() {
        let expr = TypeExpr::slice(TypeExpr::pointer(TypeExpr::ident("User")));
        assert_eq!(
            resolve_type(&expr).unwrap(),
            TypeDescriptor::slice(TypeDescriptor::pointer(TypeDescriptor::ident("User")))
        );
    }

    #[test]
    fn test_map_requires_identifiers() {
        let ok = TypeExpr::Map {
            key: Box::new(TypeExpr::ident("string")),
            value: Box::new(TypeExpr::ident("time.Time")),
        };
        assert_eq!(
            resolve_type(&ok).unwrap(),
            TypeDescriptor::map("string", "time.Time")
        );

        let bad = TypeExpr::Map {
            key: Box::new(TypeExpr::ident("string")),
            value: Box::new(TypeExpr::slice(TypeExpr::ident("int"))),
        };
        let err = resolve_type(&bad).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedType);
        assert!(err.message.contains("map value"));
    }

    #[test]
    fn test_function_params_expand_names() {
        let expr = TypeExpr::Func(RawSignature {
            params: vec![RawParam {
                names: vec!["a".to_string(), "b".to_string()],
                type_expr: TypeExpr::ident("int"),
            }],
            results: vec![RawParam::unnamed(TypeExpr::ident("error"))],
        });
        assert_eq!(
            resolve_type(&expr).unwrap(),
            TypeDescriptor::func(
                vec![
                    Parameter::new("a", TypeDescriptor::ident("int")),
                    Parameter::new("b", TypeDescriptor::ident("int")),
                ],
                vec![Parameter::unnamed(TypeDescriptor::ident("error"))],
            )
        );
    }

    #[test]
    fn test_unsupported_shapes() {
        let chan = TypeExpr::Unsupported {
            kind: "channel_type".to_string(),
            text: "chan int".to_string(),
        };
        let err = resolve_type(&chan).unwrap_err();
        assert!(err.is_unsupported());
        assert!(err.message.contains("chan int"));

        let inline = TypeExpr::pointer(TypeExpr::Struct(vec![]));
        assert_eq!(resolve_type(&inline).unwrap_err().kind, ErrorKind::UnsupportedType);
    }
}
