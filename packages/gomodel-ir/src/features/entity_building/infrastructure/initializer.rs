//! Initializer normalization
//!
//! | Expression            | Value           |
//! |-----------------------|-----------------|
//! | literal               | literal text    |
//! | `op` literal / ident  | `op` + operand  |
//! | `T{...}`              | `T`             |
//!
//! Anything else is an unsupported initializer.

use crate::features::parsing::domain::{InitExpr, TypeExpr};
use crate::shared::models::{ModelError, Result};

pub fn normalize_initializer(expr: &InitExpr) -> Result<String> {
    match expr {
        InitExpr::Literal(text) => Ok(text.clone()),
        InitExpr::Unary { op, operand } => match operand.as_ref() {
            InitExpr::Literal(text) | InitExpr::Ident(text) => Ok(format!("{}{}", op, text)),
            other => Err(unsupported(expr, kind_of(other))),
        },
        InitExpr::Composite { type_expr, .. } => match type_expr {
            TypeExpr::Ident(name) => Ok(name.clone()),
            other => Err(unsupported(expr, other.shape_name())),
        },
        InitExpr::Ident(_) => Err(unsupported(expr, "identifier")),
        InitExpr::Other { kind, .. } => Err(unsupported(expr, kind)),
    }
}

fn kind_of(expr: &InitExpr) -> &str {
    match expr {
        InitExpr::Literal(_) => "literal",
        InitExpr::Ident(_) => "identifier",
        InitExpr::Unary { .. } => "unary_expression",
        InitExpr::Composite { .. } => "composite_literal",
        InitExpr::Other { kind, .. } => kind,
    }
}

fn unsupported(expr: &InitExpr, kind: &str) -> ModelError {
    ModelError::unsupported_initializer(format!(
        "unsupported initializer `{}` ({})",
        expr.text(),
        kind
    ))
}
