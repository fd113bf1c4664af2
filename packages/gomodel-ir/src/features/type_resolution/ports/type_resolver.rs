use crate::features::parsing::domain::{RawParam, RawSignature, TypeExpr};
use crate::features::type_resolution::domain::{Parameter, TypeDescriptor};
use crate::shared::models::Result;

pub trait TypeResolver: Send + Sync {
    /// Resolve one type expression. Fails with `UnsupportedType` on any
    /// shape outside identifier, pointer, slice, map and function.
    fn resolve(&self, expr: &TypeExpr) -> Result<TypeDescriptor>;

    /// Resolve a parameter list, one entry per bound name
    fn resolve_params(&self, params: &[RawParam]) -> Result<Vec<Parameter>> {
        let mut out = Vec::with_capacity(params.len());
        for param in params {
            let ty = self.resolve(&param.type_expr)?;
            if param.names.is_empty() {
                out.push(Parameter::unnamed(ty));
            } else {
                out.extend(
                    param
                        .names
                        .iter()
                        .map(|name| Parameter::new(name.as_str(), ty.clone())),
                );
            }
        }
        Ok(out)
    }

    /// Resolve parameters and results of a signature
    fn resolve_signature(&self, signature: &RawSignature) -> Result<(Vec<Parameter>, Vec<Parameter>)> {
        Ok((
            self.resolve_params(&signature.params)?,
            self.resolve_params(&signature.results)?,
        ))
    }
}
