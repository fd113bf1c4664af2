//! Entity builder
//!
//! Turns a discovered [`PackageTree`] into a [`ModelGraph`]:
//! 1. classify each file
//! 2. resolve every type expression
//! 3. normalize tags and initializers
//! 4. index methods by receiver per package
//!
//! Errors carry the file path, declaration name and line of the fault.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::{BuildConfig, InitializerPolicy};
use crate::features::classification::domain::{
    BindingDecl, FuncDecl, ImportDecl, InterfaceDecl, StructDecl,
};
use crate::features::classification::DeclarationClassifier;
use crate::features::discovery::{PackageNode, PackageTree};
use crate::features::entity_building::domain::{
    Diagnostic, Field, FileModel, Function, Import, Interface, Method, MethodSignature,
    ModelGraph, PackageId, PackageModel, Receiver, Struct, Variable, VariableKind,
};
use crate::features::entity_building::infrastructure::{normalize_initializer, parse_tag};
use crate::features::parsing::domain::{RawFile, RawInterfaceElem, RawTypeSpec};
use crate::features::type_resolution::domain::TypeDescriptor;
use crate::features::type_resolution::{GoTypeResolver, TypeResolver};
use crate::shared::models::{ModelError, Result, Span};

pub struct EntityBuilder {
    resolver: Arc<dyn TypeResolver>,
    classifier: DeclarationClassifier,
    config: BuildConfig,
}

impl EntityBuilder {
    pub fn new(config: BuildConfig) -> Self {
        Self::with_resolver(Arc::new(GoTypeResolver::new()), config)
    }

    pub fn with_resolver(resolver: Arc<dyn TypeResolver>, config: BuildConfig) -> Self {
        Self {
            resolver,
            classifier: DeclarationClassifier::new(),
            config,
        }
    }

    pub fn build(&self, tree: &PackageTree) -> Result<ModelGraph> {
        let mut packages = Vec::with_capacity(tree.package_count());
        let mut diagnostics = Vec::new();

        for node in &tree.packages {
            self.build_package(node, None, &mut packages, &mut diagnostics)?;
        }

        let graph = ModelGraph::new(tree.root.clone(), packages, diagnostics);
        info!(
            packages = graph.packages().len(),
            entities = graph.entity_count(),
            diagnostics = graph.diagnostics().len(),
            "model built"
        );
        Ok(graph)
    }

    /// Appends `node` and its subtree in pre-order
    fn build_package(
        &self,
        node: &PackageNode,
        parent: Option<PackageId>,
        out: &mut Vec<PackageModel>,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<()> {
        let id = PackageId(out.len());
        let mut files = Vec::with_capacity(node.files.len());
        for file in &node.files {
            files.push(self.build_file(&node.name, &file.raw, diagnostics)?);
        }
        debug!(package = %node.name, directory = %node.directory.display(), "package built");

        out.push(PackageModel {
            id,
            name: node.name.clone(),
            directory: node.directory.clone(),
            parent,
            files,
        });

        for child in &node.children {
            self.build_package(child, Some(id), out, diagnostics)?;
        }
        Ok(())
    }

    /// Build the entities of one file
    pub fn build_file(
        &self,
        package: &str,
        file: &RawFile,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<FileModel> {
        let classified = self.classifier.classify(file);
        let cx = FileContext {
            package,
            path: &file.path,
        };
        let mut model = FileModel::new(file.path.as_str());

        for decl in &classified.structs {
            model.structs.push(self.build_struct(&cx, decl)?);
        }
        for decl in &classified.interfaces {
            model.interfaces.push(self.build_interface(&cx, decl)?);
        }
        for decl in &classified.functions {
            model.functions.push(self.build_function(&cx, decl)?);
        }
        for decl in &classified.methods {
            model.methods.push(self.build_method(&cx, decl)?);
        }
        for decl in &classified.variables {
            model
                .variables
                .extend(self.build_bindings(&cx, decl, VariableKind::Mutable, diagnostics)?);
        }
        for decl in &classified.constants {
            model
                .constants
                .extend(self.build_bindings(&cx, decl, VariableKind::Constant, diagnostics)?);
        }
        for decl in &classified.imports {
            model.imports.push(build_import(&cx, decl));
        }

        Ok(model)
    }

    fn build_struct(&self, cx: &FileContext, decl: &StructDecl) -> Result<Struct> {
        let spec = decl.spec;
        reject_type_params(cx, spec)?;

        let mut fields = Vec::with_capacity(decl.fields.len());
        for raw in decl.fields {
            let ty = self
                .resolver
                .resolve(&raw.type_expr)
                .map_err(|e| cx.locate(e, raw.names.first().unwrap_or(&spec.name), raw.span))?;
            let tag = raw
                .tag
                .as_ref()
                .map(parse_tag)
                .transpose()
                .map_err(|e| cx.locate(e, raw.names.first().unwrap_or(&spec.name), raw.span))?;

            if raw.names.is_empty() {
                fields.push(Field {
                    name: String::new(),
                    ty,
                    tag,
                    doc: raw.doc.clone(),
                });
            } else {
                fields.extend(raw.names.iter().map(|name| Field {
                    name: name.clone(),
                    ty: ty.clone(),
                    tag: tag.clone(),
                    doc: raw.doc.clone(),
                }));
            }
        }

        Ok(Struct {
            package: cx.package.to_string(),
            file_path: cx.path.to_string(),
            name: spec.name.clone(),
            doc: decl.doc.clone(),
            fields,
            span: spec.span,
        })
    }

    fn build_interface(&self, cx: &FileContext, decl: &InterfaceDecl) -> Result<Interface> {
        let spec = decl.spec;
        reject_type_params(cx, spec)?;

        let mut methods = Vec::with_capacity(decl.elems.len());
        for elem in decl.elems {
            let signature = match elem {
                RawInterfaceElem::Method {
                    name,
                    signature,
                    doc,
                } => {
                    let (params, results) = self
                        .resolver
                        .resolve_signature(signature)
                        .map_err(|e| cx.locate(e, name, spec.span))?;
                    MethodSignature {
                        name: name.clone(),
                        doc: doc.clone(),
                        params: Some(params),
                        results: Some(results),
                        embedded: None,
                    }
                }
                RawInterfaceElem::Embedded { type_expr, doc } => {
                    let embedded = self
                        .resolver
                        .resolve(type_expr)
                        .map_err(|e| cx.locate(e, &spec.name, spec.span))?;
                    if !matches!(embedded, TypeDescriptor::Identifier { .. }) {
                        return Err(cx.locate(
                            ModelError::unsupported_type(format!(
                                "embedded interface member must be a type name, found {}",
                                embedded
                            )),
                            &spec.name,
                            spec.span,
                        ));
                    }
                    MethodSignature {
                        name: String::new(),
                        doc: doc.clone(),
                        params: None,
                        results: None,
                        embedded: Some(embedded),
                    }
                }
            };
            methods.push(signature);
        }

        Ok(Interface {
            package: cx.package.to_string(),
            file_path: cx.path.to_string(),
            name: spec.name.clone(),
            doc: decl.doc.clone(),
            methods,
            span: spec.span,
        })
    }

    fn build_function(&self, cx: &FileContext, decl: &FuncDecl) -> Result<Function> {
        let func = decl.func;
        reject_func_type_params(cx, &func.name, func.type_params.as_deref(), func.span)?;
        let (params, results) = self
            .resolver
            .resolve_signature(&func.signature)
            .map_err(|e| cx.locate(e, &func.name, func.span))?;

        Ok(Function {
            package: cx.package.to_string(),
            file_path: cx.path.to_string(),
            name: func.name.clone(),
            doc: decl.doc.clone(),
            params,
            results,
            span: func.span,
        })
    }

    fn build_method(&self, cx: &FileContext, decl: &FuncDecl) -> Result<Method> {
        let func = decl.func;
        reject_func_type_params(cx, &func.name, func.type_params.as_deref(), func.span)?;

        let Some(raw_receiver) = func.receiver.as_ref() else {
            return Err(cx.locate(
                ModelError::internal("method classified without a receiver"),
                &func.name,
                func.span,
            ));
        };
        let ty = self
            .resolver
            .resolve(&raw_receiver.type_expr)
            .map_err(|e| cx.locate(e, &func.name, func.span))?;
        if ty.base_name().is_none() {
            return Err(cx.locate(
                ModelError::unsupported_type(format!("receiver type {} is not T or *T", ty)),
                &func.name,
                func.span,
            ));
        }
        let receiver = Receiver {
            name: raw_receiver.names.first().cloned().unwrap_or_default(),
            is_pointer: ty.is_pointer(),
            ty,
        };

        let (params, results) = self
            .resolver
            .resolve_signature(&func.signature)
            .map_err(|e| cx.locate(e, &func.name, func.span))?;

        Ok(Method {
            package: cx.package.to_string(),
            file_path: cx.path.to_string(),
            name: func.name.clone(),
            doc: decl.doc.clone(),
            receiver,
            params,
            results,
            span: func.span,
        })
    }

    /// One variable per bound name
    fn build_bindings(
        &self,
        cx: &FileContext,
        decl: &BindingDecl,
        kind: VariableKind,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<Vec<Variable>> {
        let spec = decl.spec;
        let first_name = spec.names.first().map(String::as_str).unwrap_or_default();
        let declared_type = spec
            .declared_type
            .as_ref()
            .map(|t| self.resolver.resolve(t))
            .transpose()
            .map_err(|e| cx.locate(e, first_name, spec.span))?;

        let mut out = Vec::with_capacity(spec.names.len());
        for (i, name) in spec.names.iter().enumerate() {
            let (value, unsupported_initializer) = match spec.values.get(i) {
                None => (None, None),
                Some(expr) => match normalize_initializer(expr) {
                    Ok(value) => (Some(value), None),
                    Err(err) => match self.config.initializer_policy {
                        InitializerPolicy::Reject => return Err(cx.locate(err, name, spec.span)),
                        InitializerPolicy::Report => {
                            let diagnostic = Diagnostic::new(
                                err.kind,
                                err.message,
                                cx.path,
                                name.as_str(),
                                spec.span.start_line,
                            );
                            warn!(diagnostic = %diagnostic, "initializer kept without value");
                            diagnostics.push(diagnostic);
                            (None, Some(expr.text()))
                        }
                    },
                },
            };

            out.push(Variable {
                package: cx.package.to_string(),
                file_path: cx.path.to_string(),
                name: name.clone(),
                doc: decl.doc.clone(),
                comment: spec.comment.clone(),
                kind,
                declared_type: declared_type.clone(),
                value,
                unsupported_initializer,
                span: spec.span,
            });
        }
        Ok(out)
    }
}

fn build_import(cx: &FileContext, decl: &ImportDecl) -> Import {
    let spec = decl.spec;
    Import {
        package: cx.package.to_string(),
        file_path: cx.path.to_string(),
        alias: spec.alias.clone(),
        path: spec.path.clone(),
        doc: decl.doc.clone(),
        comment: spec.comment.clone(),
        span: spec.span,
    }
}

fn reject_type_params(cx: &FileContext, spec: &RawTypeSpec) -> Result<()> {
    reject_func_type_params(cx, &spec.name, spec.type_params.as_deref(), spec.span)
}

fn reject_func_type_params(
    cx: &FileContext,
    name: &str,
    type_params: Option<&str>,
    span: Span,
) -> Result<()> {
    match type_params {
        Some(params) => Err(cx.locate(
            ModelError::unsupported_type(format!("generic type parameters {} are not supported", params)),
            name,
            span,
        )),
        None => Ok(()),
    }
}

struct FileContext<'a> {
    package: &'a str,
    path: &'a str,
}

impl FileContext<'_> {
    fn locate(&self, err: ModelError, decl_name: &str, span: Span) -> ModelError {
        let err = err.with_decl(decl_name);
        let err = if err.file_path.is_none() {
            err.with_file(self.path)
        } else {
            err
        };
        if err.line.is_none() && !span.is_zero() {
            err.with_line(span.start_line)
        } else {
            err
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::{GoSourceParser, SourceParser};
    use crate::shared::models::ErrorKind;
    use pretty_assertions::assert_eq;

    fn build(source: &str) -> Result<FileModel> {
        build_with(source, BuildConfig::default(), &mut Vec::new())
    }

    fn build_with(
        source: &str,
        config: BuildConfig,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> Result<FileModel> {
        let raw = GoSourceParser::new().parse(source, "model.go")?;
        EntityBuilder::new(config).build_file("model", &raw, diagnostics)
    }

    #[test]
    fn test_struct_fields_and_tag() {
        let model = build("package model\n\ntype Point struct {\n\tX int\n\tY int `json:\"y\"`\n}\n")
            .unwrap();
        let point = &model.structs[0];

        assert_eq!(point.name, "Point");
        let names: Vec<&str> = point.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["X", "Y"]);
        assert_eq!(point.fields[0].ty, TypeDescriptor::ident("int"));
        assert!(point.fields[0].tag.is_none());

        let tag = point.fields[1].tag.as_ref().unwrap();
        assert_eq!((tag.key.as_str(), tag.value.as_str()), ("json", "y"));
    }

    #[test]
    fn test_multi_name_field_expands() {
        let model = build("package model\n\ntype P struct {\n\tA, B float64\n\t*Base\n}\n").unwrap();
        let fields = &model.structs[0].fields;
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[1].name, "B");
        assert!(fields[2].is_embedded());
        assert_eq!(
            fields[2].ty,
            TypeDescriptor::pointer(TypeDescriptor::ident("Base"))
        );
    }

    #[test]
    fn test_unsupported_field_type_is_located() {
        let err = build("package model\n\ntype Q struct {\n\tJobs chan int\n}\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedType);
        assert_eq!(err.file_path.as_deref(), Some("model.go"));
        assert_eq!(err.decl_name.as_deref(), Some("Jobs"));
        assert_eq!(err.line, Some(4));
    }

    #[test]
    fn test_generic_struct_rejected() {
        let err = build("package model\n\ntype Box[T any] struct {\n\tV T\n}\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedType);
        assert_eq!(err.decl_name.as_deref(), Some("Box"));
    }

    #[test]
    fn test_generic_function_rejected() {
        let err = build("package model\n\nfunc Map[T any](x T) T { return x }\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedType);
        assert_eq!(err.decl_name.as_deref(), Some("Map"));
        assert_eq!(err.line, Some(3));
    }

    #[test]
    fn test_generic_receiver_rejected() {
        let err = build("package model\n\nfunc (l *List[T]) Len() int { return 0 }\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedType);
        assert_eq!(err.decl_name.as_deref(), Some("Len"));
    }

    #[test]
    fn test_unnamed_lists_ending_in_map() {
        let model = build(
            "package model\n\n\
             func Lookup(string, map[string]int) (int, map[string]int) { return 0, nil }\n\n\
             type Store interface {\n\tGet() (int, map[string]int)\n}\n",
        )
        .unwrap();
        let counts = TypeDescriptor::map("string", "int");

        let lookup = &model.functions[0];
        let params: Vec<&TypeDescriptor> = lookup.params.iter().map(|p| &p.ty).collect();
        assert_eq!(params, vec![&TypeDescriptor::ident("string"), &counts]);
        let results: Vec<&TypeDescriptor> = lookup.results.iter().map(|p| &p.ty).collect();
        assert_eq!(results, vec![&TypeDescriptor::ident("int"), &counts]);

        let get = &model.interfaces[0].methods[0];
        let results: Vec<String> = get
            .results
            .iter()
            .flatten()
            .map(|p| p.to_string())
            .collect();
        assert_eq!(results, vec!["int", "map[string]int"]);
    }

    #[test]
    fn test_malformed_tag() {
        let err = build("package model\n\ntype T struct {\n\tA int `oops`\n}\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::MalformedTag);
    }

    #[test]
    fn test_interface_members() {
        let model = build(
            "package model\n\ntype RW interface {\n\tReader\n\tWrite(p []byte) (n int, err error)\n}\n",
        )
        .unwrap();
        let rw = &model.interfaces[0];
        assert_eq!(rw.methods.len(), 2);

        let embedded = &rw.methods[0];
        assert_eq!(embedded.name, "");
        assert_eq!(embedded.embedded, Some(TypeDescriptor::ident("Reader")));
        assert!(embedded.params.is_none() && embedded.results.is_none());

        let write = &rw.methods[1];
        assert_eq!(write.name, "Write");
        assert_eq!(write.results.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_method_receivers() {
        let model = build(
            "package model\n\ntype Foo struct{}\n\nfunc (f Foo) A() {}\n\nfunc (f *Foo) B() {}\n",
        )
        .unwrap();
        assert!(!model.methods[0].receiver.is_pointer);
        assert!(model.methods[1].receiver.is_pointer);
        assert_eq!(model.methods[0].receiver.base_type(), "Foo");
        assert_eq!(model.methods[1].receiver.base_type(), "Foo");
    }

    #[test]
    fn test_function_params_expand() {
        let model = build("package model\n\nfunc Add(a, b int) int { return a + b }\n").unwrap();
        let add = &model.functions[0];
        assert_eq!(add.params.len(), 2);
        assert_eq!(add.params[1].name, "b");
        assert_eq!(add.results[0].name, "");
    }

    #[test]
    fn test_single_and_grouped_constants_match() {
        let single = build("package model\n\nconst A = 1\n").unwrap();
        let grouped = build("package model\n\nconst (\n\tA = 1\n)\n").unwrap();

        let a = &single.constants[0];
        let b = &grouped.constants[0];
        assert_eq!((a.name.as_str(), a.value.as_deref()), ("A", Some("1")));
        assert_eq!((b.name.as_str(), b.value.as_deref()), ("A", Some("1")));
        assert_eq!(a.kind, VariableKind::Constant);
    }

    #[test]
    fn test_variable_without_initializer() {
        let model = build("package model\n\nvar count int\n").unwrap();
        let count = &model.variables[0];
        assert_eq!(count.value, None);
        assert_eq!(count.declared_type, Some(TypeDescriptor::ident("int")));
        assert_eq!(count.kind, VariableKind::Mutable);
    }

    #[test]
    fn test_unsupported_initializer_rejected_by_default() {
        let err = build("package model\n\nvar items = make([]int, 0)\n").unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedInitializer);
        assert_eq!(err.decl_name.as_deref(), Some("items"));
    }

    #[test]
    fn test_unsupported_initializer_reported() {
        let mut diagnostics = Vec::new();
        let config = BuildConfig {
            initializer_policy: InitializerPolicy::Report,
        };
        let model = build_with(
            "package model\n\nvar items = make([]int, 0)\n",
            config,
            &mut diagnostics,
        )
        .unwrap();

        let items = &model.variables[0];
        assert_eq!(items.value, None);
        assert_eq!(items.unsupported_initializer.as_deref(), Some("make([]int, 0)"));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "unsupported_initializer");
    }

    #[test]
    fn test_imports_keep_quotes_and_comments() {
        let model = build(
            "package model\n\nimport (\n\t// formatting\n\tf \"fmt\" // printing\n\t\"os\"\n)\n",
        )
        .unwrap();
        let fmt = &model.imports[0];
        assert_eq!(fmt.alias.as_deref(), Some("f"));
        assert_eq!(fmt.path, "\"fmt\"");
        assert_eq!(fmt.doc.text(), "formatting");
        assert_eq!(fmt.comment.text(), "printing");
        assert!(model.imports[1].doc.is_empty());
    }
}
