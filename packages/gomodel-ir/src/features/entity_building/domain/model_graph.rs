//! Immutable model of one session
//!
//! Packages are stored flat in pre-order and refer to their parent by id.
//! Methods are attached to structs through an index keyed by
//! (package, receiver base type), never through back-pointers.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use super::diagnostic::Diagnostic;
use super::entities::{Function, Import, Interface, Method, Struct, Variable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PackageId(pub usize);

/// Entities of one file, each group in source order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FileModel {
    pub path: String,
    pub structs: Vec<Struct>,
    pub interfaces: Vec<Interface>,
    pub functions: Vec<Function>,
    pub methods: Vec<Method>,
    pub variables: Vec<Variable>,
    pub constants: Vec<Variable>,
    pub imports: Vec<Import>,
}

impl FileModel {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn entity_count(&self) -> usize {
        self.structs.len()
            + self.interfaces.len()
            + self.functions.len()
            + self.methods.len()
            + self.variables.len()
            + self.constants.len()
            + self.imports.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageModel {
    pub id: PackageId,
    pub name: String,
    pub directory: PathBuf,
    pub parent: Option<PackageId>,
    pub files: Vec<FileModel>,
}

/// Position of a method inside its package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MethodRef {
    pub file: usize,
    pub index: usize,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ModelGraph {
    pub root: PathBuf,
    /// Pre-order: a package precedes its children
    packages: Vec<PackageModel>,
    #[serde(skip)]
    method_index: HashMap<(PackageId, String), Vec<MethodRef>>,
    diagnostics: Vec<Diagnostic>,
}

impl ModelGraph {
    pub fn new(
        root: impl Into<PathBuf>,
        packages: Vec<PackageModel>,
        diagnostics: Vec<Diagnostic>,
    ) -> Self {
        let method_index = index_methods(&packages);
        Self {
            root: root.into(),
            packages,
            method_index,
            diagnostics,
        }
    }

    pub fn packages(&self) -> &[PackageModel] {
        &self.packages
    }

    pub fn package(&self, id: PackageId) -> Option<&PackageModel> {
        self.packages.get(id.0)
    }

    pub fn package_by_directory(&self, directory: &Path) -> Option<&PackageModel> {
        self.packages.iter().find(|p| p.directory == directory)
    }

    pub fn children(&self, id: PackageId) -> impl Iterator<Item = &PackageModel> {
        self.packages
            .iter()
            .filter(move |p| p.parent == Some(id))
    }

    /// All files in package pre-order, then listing order
    pub fn files(&self) -> impl Iterator<Item = (&PackageModel, &FileModel)> {
        self.packages
            .iter()
            .flat_map(|p| p.files.iter().map(move |f| (p, f)))
    }

    /// Methods whose receiver base type is `type_name` in package `id`,
    /// in declaration order
    pub fn methods_of(&self, id: PackageId, type_name: &str) -> Vec<&Method> {
        let Some(package) = self.package(id) else {
            return Vec::new();
        };
        self.method_index
            .get(&(id, type_name.to_string()))
            .map(|refs| {
                refs.iter()
                    .filter_map(|r| package.files.get(r.file)?.methods.get(r.index))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn entity_count(&self) -> usize {
        self.files().map(|(_, f)| f.entity_count()).sum()
    }
}

fn index_methods(packages: &[PackageModel]) -> HashMap<(PackageId, String), Vec<MethodRef>> {
    let mut index: HashMap<(PackageId, String), Vec<MethodRef>> = HashMap::new();
    for package in packages {
        for (file_idx, file) in package.files.iter().enumerate() {
            for (method_idx, method) in file.methods.iter().enumerate() {
                index
                    .entry((package.id, method.receiver.base_type().to_string()))
                    .or_default()
                    .push(MethodRef {
                        file: file_idx,
                        index: method_idx,
                    });
            }
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::entity_building::domain::entities::Receiver;
    use crate::features::type_resolution::domain::TypeDescriptor;
    use crate::shared::models::{CommentGroup, Span};

    fn method(name: &str, receiver: &str, pointer: bool) -> Method {
        let base = TypeDescriptor::ident(receiver);
        Method {
            package: "p".to_string(),
            file_path: "p.go".to_string(),
            name: name.to_string(),
            doc: CommentGroup::empty(),
            receiver: Receiver {
                name: "r".to_string(),
                ty: if pointer {
                    TypeDescriptor::pointer(base)
                } else {
                    base
                },
                is_pointer: pointer,
            },
            params: vec![],
            results: vec![],
            span: Span::zero(),
        }
    }

    #[test]
    fn test_methods_of_spans_files() {
        let mut first = FileModel::new("a.go");
        first.methods.push(method("Get", "Foo", false));
        let mut second = FileModel::new("b.go");
        second.methods.push(method("Set", "Foo", true));
        second.methods.push(method("Other", "Bar", false));

        let graph = ModelGraph::new(
            "/r",
            vec![PackageModel {
                id: PackageId(0),
                name: "p".to_string(),
                directory: PathBuf::from("/r"),
                parent: None,
                files: vec![first, second],
            }],
            vec![],
        );

        let names: Vec<&str> = graph
            .methods_of(PackageId(0), "Foo")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Get", "Set"]);
        assert!(graph.methods_of(PackageId(0), "Missing").is_empty());
        assert!(graph.methods_of(PackageId(9), "Foo").is_empty());
    }

    #[test]
    fn test_children_follow_parent_ids() {
        let package = |id: usize, name: &str, parent: Option<usize>| PackageModel {
            id: PackageId(id),
            name: name.to_string(),
            directory: PathBuf::from(format!("/r/{}", name)),
            parent: parent.map(PackageId),
            files: vec![],
        };
        let graph = ModelGraph::new(
            "/r",
            vec![
                package(0, "root", None),
                package(1, "a", Some(0)),
                package(2, "deep", Some(1)),
                package(3, "b", Some(0)),
            ],
            vec![],
        );

        let names = |id| {
            graph
                .children(PackageId(id))
                .map(|p| p.name.as_str())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(0), vec!["a", "b"]);
        assert_eq!(names(1), vec!["deep"]);
        assert!(names(3).is_empty());
    }
}
