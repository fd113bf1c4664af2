//! Declaration classifier
//!
//! Partitions the top-level declarations of a file by keyword and
//! right-hand-side shape only. No type resolution happens here.

use tracing::debug;

use crate::features::classification::domain::{
    BindingDecl, ClassifiedDecls, FuncDecl, ImportDecl, InterfaceDecl, StructDecl,
};
use crate::features::parsing::domain::{BindingKeyword, RawDecl, RawDeclKind, RawFile, TypeExpr};
use crate::shared::models::CommentGroup;

#[derive(Debug, Default, Clone, Copy)]
pub struct DeclarationClassifier;

impl DeclarationClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify<'a>(&self, file: &'a RawFile) -> ClassifiedDecls<'a> {
        let mut out = ClassifiedDecls::default();

        for decl in &file.decls {
            match &decl.kind {
                RawDeclKind::Type(specs) => {
                    for spec in specs {
                        let doc = effective_doc(&spec.doc, decl);
                        match &spec.type_expr {
                            TypeExpr::Struct(fields) => out.structs.push(StructDecl {
                                spec,
                                fields,
                                doc,
                            }),
                            TypeExpr::Interface(elems) => out.interfaces.push(InterfaceDecl {
                                spec,
                                elems,
                                doc,
                            }),
                            other => debug!(
                                file = %file.path,
                                name = %spec.name,
                                shape = other.shape_name(),
                                "type declaration is neither struct nor interface"
                            ),
                        }
                    }
                }
                RawDeclKind::Func(func) => {
                    let entry = FuncDecl {
                        func,
                        doc: &decl.doc,
                    };
                    if func.receiver.is_some() {
                        out.methods.push(entry);
                    } else {
                        out.functions.push(entry);
                    }
                }
                RawDeclKind::Bindings { keyword, specs } => {
                    let group = match keyword {
                        BindingKeyword::Const => &mut out.constants,
                        BindingKeyword::Var => &mut out.variables,
                    };
                    group.extend(specs.iter().map(|spec| BindingDecl {
                        spec,
                        doc: effective_doc(&spec.doc, decl),
                    }));
                }
                RawDeclKind::Imports(specs) => {
                    out.imports.extend(specs.iter().map(|spec| ImportDecl {
                        spec,
                        doc: effective_doc(&spec.doc, decl),
                    }));
                }
            }
        }

        out
    }
}

/// Spec doc if present, else the declaration doc when the declaration
/// introduces exactly one spec.
fn effective_doc<'a>(spec_doc: &'a CommentGroup, decl: &'a RawDecl) -> &'a CommentGroup {
    if spec_doc.is_empty() && decl.kind.spec_count() == 1 {
        &decl.doc
    } else {
        spec_doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{GoSourceParser, SourceParser};

    fn parse(source: &str) -> RawFile {
        GoSourceParser::new().parse(source, "c.go").unwrap()
    }

    #[test]
    fn test_seven_groups() {
        let file = parse(
            r#"package p

import "fmt"

type S struct{}

type I interface{}

type Named int

func F() {}

func (s S) M() {}

var V = 1

const C = 2
"#,
        );
        let classified = DeclarationClassifier::new().classify(&file);

        assert_eq!(classified.structs.len(), 1);
        assert_eq!(classified.interfaces.len(), 1);
        assert_eq!(classified.functions.len(), 1);
        assert_eq!(classified.methods.len(), 1);
        assert_eq!(classified.variables.len(), 1);
        assert_eq!(classified.constants.len(), 1);
        assert_eq!(classified.imports.len(), 1);
        assert_eq!(classified.len(), 7);
    }

    #[test]
    fn test_grouped_bindings_flatten_per_spec() {
        let file = parse("package p\n\nconst (\n\tA = 1\n\tB = 2\n\tC = 3\n)\n");
        let classified = DeclarationClassifier::new().classify(&file);

        let names: Vec<&str> = classified
            .constants
            .iter()
            .map(|c| c.spec.names[0].as_str())
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_single_spec_inherits_declaration_doc() {
        let file = parse("package p\n\n// Limit caps retries.\nconst Limit = 3\n");
        let classified = DeclarationClassifier::new().classify(&file);
        assert_eq!(classified.constants[0].doc.text(), "Limit caps retries.");
    }

    #[test]
    fn test_group_doc_not_copied_to_specs() {
        let file = parse(
            "package p\n\n// Limits.\nconst (\n\t// A doc\n\tA = 1\n\tB = 2\n)\n",
        );
        let classified = DeclarationClassifier::new().classify(&file);
        assert_eq!(classified.constants[0].doc.text(), "A doc");
        assert!(classified.constants[1].doc.is_empty());
    }

    #[test]
    fn test_single_spec_in_parentheses_inherits_declaration_doc() {
        let file = parse("package p\n\n// Only.\nvar (\n\tX = 1\n)\n");
        let classified = DeclarationClassifier::new().classify(&file);
        assert_eq!(classified.variables[0].doc.text(), "Only.");
    }
}
