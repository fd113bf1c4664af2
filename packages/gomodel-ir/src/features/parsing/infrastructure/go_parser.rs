//! Tree-sitter Go front-end
//!
//! Converts a tree-sitter-go concrete syntax tree into the raw declaration
//! tree. This is the only place that knows grammar node kinds.

use tracing::debug;
use tree_sitter::{Node, Parser as TSParser};

use crate::features::parsing::domain::{
    BindingKeyword, InitExpr, RawDecl, RawDeclKind, RawField, RawFile, RawFunc, RawImportSpec,
    RawInterfaceElem, RawParam, RawSignature, RawTag, RawTypeSpec, RawValueSpec, TagLiteralKind,
    TypeExpr,
};
use crate::features::parsing::ports::SourceParser;
use crate::shared::models::{Comment, CommentGroup, ModelError, Result};
use crate::shared::utils::{
    children_by_field, find_child_by_kind, first_error_node, has_child_kind, named_children,
    node_text, node_to_span,
};

/// Node kinds of literal initializers
const LITERAL_KINDS: &[&str] = &[
    "int_literal",
    "float_literal",
    "imaginary_literal",
    "rune_literal",
    "interpreted_string_literal",
    "raw_string_literal",
];

/// Node kinds that read as plain identifiers in an initializer
const IDENT_KINDS: &[&str] = &["identifier", "true", "false", "nil", "iota"];

/// tree-sitter-go backed parser
#[derive(Debug, Default, Clone, Copy)]
pub struct GoSourceParser;

impl GoSourceParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for GoSourceParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<RawFile> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_go::language())
            .map_err(|e| ModelError::internal(format!("Failed to set language: {}", e)))?;

        let tree = parser.parse(source, None).ok_or_else(|| {
            ModelError::syntax("parser produced no syntax tree").with_file(file_path)
        })?;
        let root = tree.root_node();

        if let Some(bad) = first_error_node(&root) {
            let span = node_to_span(&bad);
            let message = if bad.is_missing() {
                format!("missing `{}`", bad.kind())
            } else {
                let snippet: String = node_text(&bad, source).chars().take(40).collect();
                format!("unexpected syntax near `{}`", snippet.trim())
            };
            return Err(ModelError::syntax(message)
                .with_file(file_path)
                .with_line(span.start_line));
        }

        let converter = GoTreeConverter { source, file_path };
        let file = converter.convert(&root)?;
        debug!(
            file = file_path,
            package = %file.package_name,
            decls = file.decls.len(),
            "parsed source file"
        );
        Ok(file)
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext == "go"
    }

    fn language_name(&self) -> &'static str {
        "go"
    }
}

/// Per-file conversion state
struct GoTreeConverter<'src> {
    source: &'src str,
    file_path: &'src str,
}

impl<'src> GoTreeConverter<'src> {
    fn text(&self, node: &Node) -> &'src str {
        node_text(node, self.source)
    }

    fn convert(&self, root: &Node) -> Result<RawFile> {
        let package_name = find_child_by_kind(root, "package_clause")
            .and_then(|clause| {
                clause
                    .child_by_field_name("name")
                    .or_else(|| find_child_by_kind(&clause, "package_identifier"))
            })
            .map(|name| self.text(&name).to_string())
            .ok_or_else(|| {
                ModelError::syntax("missing package clause").with_file(self.file_path)
            })?;

        let mut file = RawFile::new(self.file_path, package_name);

        for child in named_children(root) {
            let kind = match child.kind() {
                "import_declaration" => RawDeclKind::Imports(self.import_specs(&child)),
                "type_declaration" => RawDeclKind::Type(self.type_specs(&child)),
                "function_declaration" | "method_declaration" => {
                    RawDeclKind::Func(self.func_decl(&child))
                }
                "const_declaration" => RawDeclKind::Bindings {
                    keyword: BindingKeyword::Const,
                    specs: self.value_specs(&child),
                },
                "var_declaration" => RawDeclKind::Bindings {
                    keyword: BindingKeyword::Var,
                    specs: self.value_specs(&child),
                },
                "package_clause" | "comment" => continue,
                other => {
                    debug!(file = self.file_path, kind = other, "skipping top-level node");
                    continue;
                }
            };

            file.decls.push(RawDecl {
                kind,
                doc: self.doc_comments(&child),
                span: node_to_span(&child),
            });
        }

        Ok(file)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Comments
    // ═══════════════════════════════════════════════════════════════════════

    /// Comment block ending on the line directly above `node`
    fn doc_comments(&self, node: &Node) -> CommentGroup {
        let mut comments = Vec::new();
        let mut expected_row = node.start_position().row;
        let mut current = node.prev_named_sibling();

        while let Some(prev) = current {
            if prev.kind() != "comment"
                || prev.end_position().row + 1 != expected_row
                || self.is_trailing(&prev)
            {
                break;
            }
            comments.push(Comment::new(self.text(&prev)));
            expected_row = prev.start_position().row;
            current = prev.prev_named_sibling();
        }

        comments.reverse();
        CommentGroup::new(comments)
    }

    /// A comment that shares its line with preceding code
    fn is_trailing(&self, comment: &Node) -> bool {
        let mut prev = comment.prev_sibling();
        while let Some(node) = prev {
            if node.kind() != "\n" {
                return node.end_position().row == comment.start_position().row;
            }
            prev = node.prev_sibling();
        }
        false
    }

    /// Comments starting on the line `node` ends on
    fn trailing_comment(&self, node: &Node) -> CommentGroup {
        let row = node.end_position().row;
        let mut owner = *node;
        loop {
            if let Some(next) = owner.next_named_sibling() {
                if next.kind() == "comment" && next.start_position().row == row {
                    return CommentGroup::new(vec![Comment::new(self.text(&next))]);
                }
                return CommentGroup::empty();
            }
            // The comment may have been attached to an enclosing declaration
            match owner.parent() {
                Some(parent)
                    if parent.kind() != "source_file" && parent.end_byte() == owner.end_byte() =>
                {
                    owner = parent;
                }
                _ => return CommentGroup::empty(),
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Declarations
    // ═══════════════════════════════════════════════════════════════════════

    fn import_specs(&self, decl: &Node) -> Vec<RawImportSpec> {
        let mut specs = Vec::new();
        for child in named_children(decl) {
            match child.kind() {
                "import_spec" => specs.push(self.import_spec(&child)),
                "import_spec_list" => specs.extend(
                    named_children(&child)
                        .iter()
                        .filter(|n| n.kind() == "import_spec")
                        .map(|n| self.import_spec(n)),
                ),
                _ => {}
            }
        }
        specs
    }

    fn import_spec(&self, spec: &Node) -> RawImportSpec {
        RawImportSpec {
            alias: spec
                .child_by_field_name("name")
                .map(|n| self.text(&n).to_string()),
            path: spec
                .child_by_field_name("path")
                .map(|n| self.text(&n).to_string())
                .unwrap_or_default(),
            doc: self.doc_comments(spec),
            comment: self.trailing_comment(spec),
            span: node_to_span(spec),
        }
    }

    fn type_specs(&self, decl: &Node) -> Vec<RawTypeSpec> {
        named_children(decl)
            .iter()
            .filter(|n| matches!(n.kind(), "type_spec" | "type_alias"))
            .map(|spec| RawTypeSpec {
                name: spec
                    .child_by_field_name("name")
                    .map(|n| self.text(&n).to_string())
                    .unwrap_or_default(),
                doc: self.doc_comments(spec),
                is_alias: spec.kind() == "type_alias",
                type_params: spec
                    .child_by_field_name("type_parameters")
                    .map(|n| self.text(&n).to_string()),
                type_expr: self.optional_type(spec.child_by_field_name("type")),
                span: node_to_span(spec),
            })
            .collect()
    }

    fn func_decl(&self, decl: &Node) -> RawFunc {
        let receiver = decl.child_by_field_name("receiver").map(|list| {
            self.params(&list)
                .into_iter()
                .next()
                .unwrap_or_else(|| RawParam::unnamed(self.unsupported("empty_receiver", &list)))
        });

        RawFunc {
            name: decl
                .child_by_field_name("name")
                .map(|n| self.text(&n).to_string())
                .unwrap_or_default(),
            receiver,
            type_params: decl
                .child_by_field_name("type_parameters")
                .map(|n| self.text(&n).to_string()),
            signature: self.signature(decl),
            span: node_to_span(decl),
        }
    }

    fn value_specs(&self, decl: &Node) -> Vec<RawValueSpec> {
        let mut specs = Vec::new();
        for child in named_children(decl) {
            match child.kind() {
                "const_spec" | "var_spec" => specs.push(self.value_spec(&child)),
                "var_spec_list" | "const_spec_list" => specs.extend(
                    named_children(&child)
                        .iter()
                        .filter(|n| matches!(n.kind(), "const_spec" | "var_spec"))
                        .map(|n| self.value_spec(n)),
                ),
                _ => {}
            }
        }
        specs
    }

    fn value_spec(&self, spec: &Node) -> RawValueSpec {
        let values = spec
            .child_by_field_name("value")
            .map(|list| {
                if list.kind() == "expression_list" {
                    named_children(&list)
                        .iter()
                        .filter(|n| n.kind() != "comment")
                        .map(|n| self.init_expr(n))
                        .collect()
                } else {
                    vec![self.init_expr(&list)]
                }
            })
            .unwrap_or_default();

        RawValueSpec {
            names: children_by_field(spec, "name")
                .iter()
                .map(|n| self.text(n).to_string())
                .collect(),
            declared_type: spec.child_by_field_name("type").map(|t| self.type_expr(&t)),
            values,
            doc: self.doc_comments(spec),
            comment: self.trailing_comment(spec),
            span: node_to_span(spec),
        }
    }

    fn init_expr(&self, node: &Node) -> InitExpr {
        let kind = node.kind();
        if LITERAL_KINDS.contains(&kind) {
            return InitExpr::Literal(self.text(node).to_string());
        }
        if IDENT_KINDS.contains(&kind) {
            return InitExpr::Ident(self.text(node).to_string());
        }
        match kind {
            "unary_expression" => match (
                node.child_by_field_name("operator"),
                node.child_by_field_name("operand"),
            ) {
                (Some(op), Some(operand)) => InitExpr::Unary {
                    op: self.text(&op).to_string(),
                    operand: Box::new(self.init_expr(&operand)),
                },
                _ => self.other_expr(node),
            },
            "composite_literal" => InitExpr::Composite {
                type_expr: self.optional_type(node.child_by_field_name("type")),
                text: self.text(node).to_string(),
            },
            _ => self.other_expr(node),
        }
    }

    fn other_expr(&self, node: &Node) -> InitExpr {
        InitExpr::Other {
            kind: node.kind().to_string(),
            text: self.text(node).to_string(),
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Types and signatures
    // ═══════════════════════════════════════════════════════════════════════

    fn optional_type(&self, node: Option<Node>) -> TypeExpr {
        match node {
            Some(node) => self.type_expr(&node),
            None => TypeExpr::Unsupported {
                kind: "missing_type".to_string(),
                text: String::new(),
            },
        }
    }

    fn unsupported(&self, kind: &str, node: &Node) -> TypeExpr {
        TypeExpr::Unsupported {
            kind: kind.to_string(),
            text: self.text(node).to_string(),
        }
    }

    fn type_expr(&self, node: &Node) -> TypeExpr {
        match node.kind() {
            "type_identifier" | "identifier" | "package_identifier" => {
                TypeExpr::Ident(self.text(node).to_string())
            }
            "qualified_type" => {
                match (
                    node.child_by_field_name("package"),
                    node.child_by_field_name("name"),
                ) {
                    (Some(pkg), Some(name)) => {
                        TypeExpr::Ident(format!("{}.{}", self.text(&pkg), self.text(&name)))
                    }
                    _ => TypeExpr::Ident(self.text(node).split_whitespace().collect()),
                }
            }
            "pointer_type" => match named_children(node).first() {
                Some(inner) => TypeExpr::pointer(self.type_expr(inner)),
                None => self.unsupported("pointer_type", node),
            },
            "slice_type" => TypeExpr::slice(self.optional_type(node.child_by_field_name("element"))),
            "map_type" => TypeExpr::Map {
                key: Box::new(self.optional_type(node.child_by_field_name("key"))),
                value: Box::new(self.optional_type(node.child_by_field_name("value"))),
            },
            "function_type" => TypeExpr::Func(self.signature(node)),
            "struct_type" => TypeExpr::Struct(
                find_child_by_kind(node, "field_declaration_list")
                    .map(|list| self.fields(&list))
                    .unwrap_or_default(),
            ),
            "interface_type" => TypeExpr::Interface(self.interface_elems(node)),
            // array_type, channel_type, generic_type, parenthesized_type, ...
            other => self.unsupported(other, node),
        }
    }

    /// Parameters and results of a function-like node
    fn signature(&self, node: &Node) -> RawSignature {
        let params = node
            .child_by_field_name("parameters")
            .map(|list| self.params(&list))
            .unwrap_or_default();
        let results = match node.child_by_field_name("result") {
            Some(result) if result.kind() == "parameter_list" => self.params(&result),
            Some(result) => vec![RawParam::unnamed(self.type_expr(&result))],
            None => Vec::new(),
        };
        RawSignature { params, results }
    }

    fn params(&self, list: &Node) -> Vec<RawParam> {
        let mut params = Vec::new();
        for child in named_children(list) {
            match child.kind() {
                "parameter_declaration" => {
                    let names: Vec<String> = children_by_field(&child, "name")
                        .iter()
                        .map(|n| self.text(n).to_string())
                        .collect();
                    let type_node = child.child_by_field_name("type");
                    match type_node {
                        Some(array)
                            if array.kind() == "array_type"
                                && names.last().is_some_and(|n| n == "map") =>
                        {
                            // `(int, map[K]V)` reads as names `int, map` of type `[K]V`
                            params.extend(
                                names[..names.len() - 1]
                                    .iter()
                                    .map(|n| RawParam::unnamed(TypeExpr::Ident(n.clone()))),
                            );
                            params.push(RawParam::unnamed(self.misread_map(&array)));
                        }
                        _ => params.push(RawParam {
                            names,
                            type_expr: self.optional_type(type_node),
                        }),
                    }
                }
                "variadic_parameter_declaration" => params.push(RawParam {
                    names: children_by_field(&child, "name")
                        .iter()
                        .map(|n| self.text(n).to_string())
                        .collect(),
                    type_expr: self.unsupported("variadic_parameter", &child),
                }),
                _ => {}
            }
        }
        params
    }

    /// Map type recovered from an `array_type` whose length is the key
    fn misread_map(&self, array: &Node) -> TypeExpr {
        let key = match array.child_by_field_name("length") {
            Some(key) if matches!(key.kind(), "identifier" | "type_identifier") => {
                TypeExpr::Ident(self.text(&key).to_string())
            }
            Some(key) if key.kind() == "selector_expression" => {
                TypeExpr::Ident(self.text(&key).split_whitespace().collect())
            }
            Some(key) => self.unsupported(key.kind(), &key),
            None => self.unsupported("array_type", array),
        };
        TypeExpr::Map {
            key: Box::new(key),
            value: Box::new(self.optional_type(array.child_by_field_name("element"))),
        }
    }

    fn fields(&self, list: &Node) -> Vec<RawField> {
        named_children(list)
            .iter()
            .filter(|n| n.kind() == "field_declaration")
            .map(|field| {
                let names: Vec<String> = children_by_field(field, "name")
                    .iter()
                    .map(|n| self.text(n).to_string())
                    .collect();
                let mut type_expr = self.optional_type(field.child_by_field_name("type"));
                // Embedded `*T` keeps the star outside the type field
                if names.is_empty() && has_child_kind(field, "*") {
                    type_expr = TypeExpr::pointer(type_expr);
                }
                RawField {
                    names,
                    type_expr,
                    tag: field.child_by_field_name("tag").map(|tag| RawTag {
                        literal: self.text(&tag).to_string(),
                        kind: if tag.kind() == "raw_string_literal" {
                            TagLiteralKind::Raw
                        } else {
                            TagLiteralKind::Interpreted
                        },
                    }),
                    doc: self.doc_comments(field),
                    span: node_to_span(field),
                }
            })
            .collect()
    }

    fn interface_elems(&self, node: &Node) -> Vec<RawInterfaceElem> {
        let mut elems = Vec::new();
        for child in named_children(node) {
            match child.kind() {
                "method_spec" | "method_elem" => elems.push(RawInterfaceElem::Method {
                    name: child
                        .child_by_field_name("name")
                        .map(|n| self.text(&n).to_string())
                        .unwrap_or_default(),
                    signature: self.signature(&child),
                    doc: self.doc_comments(&child),
                }),
                "interface_type_name" | "type_elem" => {
                    let inner: Vec<Node> = named_children(&child)
                        .into_iter()
                        .filter(|n| n.kind() != "comment")
                        .collect();
                    let type_expr = match inner.as_slice() {
                        [] => TypeExpr::Ident(self.text(&child).to_string()),
                        [single] => self.type_expr(single),
                        _ => self.unsupported("type_union", &child),
                    };
                    elems.push(RawInterfaceElem::Embedded {
                        type_expr,
                        doc: self.doc_comments(&child),
                    });
                }
                "method_spec_list" => elems.extend(self.interface_elems(&child)),
                "comment" => {}
                other => elems.push(RawInterfaceElem::Embedded {
                    type_expr: self.unsupported(other, &child),
                    doc: self.doc_comments(&child),
                }),
            }
        }
        elems
    }
}
