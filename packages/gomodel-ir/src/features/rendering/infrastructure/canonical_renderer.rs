//! Built-in renderer producing canonical Go declarations
//!
//! Output is normalized, not formatting-exact: one tab of indentation and
//! doc comments as recorded. Tags are re-emitted as written.

use std::fmt::Write;

use crate::features::entity_building::domain::{
    Field, Function, Import, Interface, Method, MethodSignature, Struct, Variable,
    VariableKind,
};
use crate::features::query::domain::EntityRef;
use crate::features::rendering::ports::{TemplateName, TemplateRenderer};
use crate::features::type_resolution::domain::{ParamList, Parameter};
use crate::shared::models::{CommentGroup, ModelError, Result};

#[derive(Debug, Default, Clone, Copy)]
pub struct CanonicalRenderer;

impl CanonicalRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for CanonicalRenderer {
    fn render(&self, template: TemplateName, entity: EntityRef<'_>) -> Result<String> {
        let mut out = String::new();
        let written = match (template, entity) {
            (TemplateName::Struct, EntityRef::Struct(s)) => render_struct(&mut out, s),
            (TemplateName::Interface, EntityRef::Interface(i)) => render_interface(&mut out, i),
            (TemplateName::Function, EntityRef::Function(f)) => render_function(&mut out, f),
            (TemplateName::Method, EntityRef::Method(m)) => render_method(&mut out, m),
            (TemplateName::Variable, EntityRef::Variable(v)) => render_variable(&mut out, v),
            (TemplateName::Import, EntityRef::Import(i)) => render_import(&mut out, i),
            (template, entity) => {
                return Err(ModelError::render(format!(
                    "template '{}' cannot render {} entity",
                    template,
                    entity.kind()
                ))
                .with_file(entity.file_path())
                .with_decl(entity.name()));
            }
        };
        written.map_err(|e| ModelError::render(format!("formatting failed: {}", e)))?;
        Ok(out)
    }
}

type FmtResult = std::fmt::Result;

fn write_doc(out: &mut String, doc: &CommentGroup, indent: &str) -> FmtResult {
    for line in doc.lines() {
        writeln!(out, "{}{}", indent, line)?;
    }
    Ok(())
}

fn write_signature(out: &mut String, params: &[Parameter], results: &[Parameter]) -> FmtResult {
    write!(out, "({})", ParamList(params))?;
    match results {
        [] => Ok(()),
        [single] if single.name.is_empty() => write!(out, " {}", single.ty),
        _ => write!(out, " ({})", ParamList(results)),
    }
}

fn render_field(out: &mut String, field: &Field) -> FmtResult {
    write_doc(out, &field.doc, "\t")?;
    if field.is_embedded() {
        write!(out, "\t{}", field.ty)?;
    } else {
        write!(out, "\t{} {}", field.name, field.ty)?;
    }
    if let Some(tag) = &field.tag {
        write!(out, " {}", tag.literal)?;
    }
    out.push('\n');
    Ok(())
}

fn render_struct(out: &mut String, s: &Struct) -> FmtResult {
    write_doc(out, &s.doc, "")?;
    if s.fields.is_empty() {
        return write!(out, "type {} struct{{}}", s.name);
    }
    writeln!(out, "type {} struct {{", s.name)?;
    for field in &s.fields {
        render_field(out, field)?;
    }
    out.push('}');
    Ok(())
}

fn render_member(out: &mut String, member: &MethodSignature) -> FmtResult {
    write_doc(out, &member.doc, "\t")?;
    if let Some(embedded) = &member.embedded {
        return writeln!(out, "\t{}", embedded);
    }
    write!(out, "\t{}", member.name)?;
    write_signature(
        out,
        member.params.as_deref().unwrap_or_default(),
        member.results.as_deref().unwrap_or_default(),
    )?;
    out.push('\n');
    Ok(())
}

fn render_interface(out: &mut String, i: &Interface) -> FmtResult {
    write_doc(out, &i.doc, "")?;
    if i.methods.is_empty() {
        return write!(out, "type {} interface{{}}", i.name);
    }
    writeln!(out, "type {} interface {{", i.name)?;
    for member in &i.methods {
        render_member(out, member)?;
    }
    out.push('}');
    Ok(())
}

fn render_function(out: &mut String, f: &Function) -> FmtResult {
    write_doc(out, &f.doc, "")?;
    write!(out, "func {}", f.name)?;
    write_signature(out, &f.params, &f.results)
}

fn render_method(out: &mut String, m: &Method) -> FmtResult {
    write_doc(out, &m.doc, "")?;
    if m.receiver.name.is_empty() {
        write!(out, "func ({}) {}", m.receiver.ty, m.name)?;
    } else {
        write!(out, "func ({} {}) {}", m.receiver.name, m.receiver.ty, m.name)?;
    }
    write_signature(out, &m.params, &m.results)
}

fn render_variable(out: &mut String, v: &Variable) -> FmtResult {
    write_doc(out, &v.doc, "")?;
    let keyword = match v.kind {
        VariableKind::Constant => "const",
        VariableKind::Mutable => "var",
    };
    write!(out, "{} {}", keyword, v.name)?;
    if let Some(ty) = &v.declared_type {
        write!(out, " {}", ty)?;
    }
    if let Some(value) = v.value.as_ref().or(v.unsupported_initializer.as_ref()) {
        write!(out, " = {}", value)?;
    }
    for line in v.comment.lines() {
        write!(out, " {}", line)?;
    }
    Ok(())
}

fn render_import(out: &mut String, i: &Import) -> FmtResult {
    write_doc(out, &i.doc, "")?;
    match &i.alias {
        Some(alias) => write!(out, "import {} {}", alias, i.path)?,
        None => write!(out, "import {}", i.path)?,
    }
    for line in i.comment.lines() {
        write!(out, " {}", line)?;
    }
    Ok(())
}
