//! Read-only lookups over a built model
//!
//! Iteration order is the same for every query: packages in pre-order
//! (a package before its subdirectories), files in listing order,
//! declarations in source order. Lookups return the first match; a miss is
//! `None`.

use std::path::Path;

use crate::features::entity_building::domain::{
    Diagnostic, FileModel, Function, Import, Interface, Method, ModelGraph, PackageModel, Struct,
    Variable,
};
use crate::features::query::domain::{EntityKind, EntityRef};

#[derive(Debug, Clone, Copy)]
pub struct ModelQuery<'g> {
    graph: &'g ModelGraph,
}

impl<'g> ModelQuery<'g> {
    pub fn new(graph: &'g ModelGraph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &'g ModelGraph {
        self.graph
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Generic access
    // ═══════════════════════════════════════════════════════════════════════

    /// Every entity of `kind`, in query order
    pub fn list_all(&self, kind: EntityKind) -> Vec<EntityRef<'g>> {
        self.iter_kind(kind).collect()
    }

    /// First entity of `kind` named `name`.
    ///
    /// Imports match their alias or unquoted path. Methods also match
    /// `Type.Method`.
    pub fn get_by_name(&self, kind: EntityKind, name: &str) -> Option<EntityRef<'g>> {
        self.iter_kind(kind).find(|entity| match entity {
            EntityRef::Import(import) => import.matches(name),
            EntityRef::Method(method) => {
                method.name == name
                    || name
                        .split_once('.')
                        .is_some_and(|(ty, m)| method.receiver.base_type() == ty && method.name == m)
            }
            other => other.name() == name,
        })
    }

    fn iter_kind(&self, kind: EntityKind) -> Box<dyn Iterator<Item = EntityRef<'g>> + 'g> {
        let files = self.files();
        match kind {
            EntityKind::Struct => {
                Box::new(files.flat_map(|f| f.structs.iter().map(EntityRef::Struct)))
            }
            EntityKind::Interface => {
                Box::new(files.flat_map(|f| f.interfaces.iter().map(EntityRef::Interface)))
            }
            EntityKind::Function => {
                Box::new(files.flat_map(|f| f.functions.iter().map(EntityRef::Function)))
            }
            EntityKind::Method => {
                Box::new(files.flat_map(|f| f.methods.iter().map(EntityRef::Method)))
            }
            EntityKind::Variable => {
                Box::new(files.flat_map(|f| f.variables.iter().map(EntityRef::Variable)))
            }
            EntityKind::Constant => {
                Box::new(files.flat_map(|f| f.constants.iter().map(EntityRef::Variable)))
            }
            EntityKind::Import => {
                Box::new(files.flat_map(|f| f.imports.iter().map(EntityRef::Import)))
            }
        }
    }

    fn files(&self) -> impl Iterator<Item = &'g FileModel> + 'g {
        self.graph.files().map(|(_, file)| file)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Typed helpers
    // ═══════════════════════════════════════════════════════════════════════

    pub fn structs(&self) -> impl Iterator<Item = &'g Struct> + 'g {
        self.files().flat_map(|f| f.structs.iter())
    }

    pub fn interfaces(&self) -> impl Iterator<Item = &'g Interface> + 'g {
        self.files().flat_map(|f| f.interfaces.iter())
    }

    pub fn functions(&self) -> impl Iterator<Item = &'g Function> + 'g {
        self.files().flat_map(|f| f.functions.iter())
    }

    pub fn methods(&self) -> impl Iterator<Item = &'g Method> + 'g {
        self.files().flat_map(|f| f.methods.iter())
    }

    pub fn variables(&self) -> impl Iterator<Item = &'g Variable> + 'g {
        self.files().flat_map(|f| f.variables.iter())
    }

    pub fn constants(&self) -> impl Iterator<Item = &'g Variable> + 'g {
        self.files().flat_map(|f| f.constants.iter())
    }

    pub fn imports(&self) -> impl Iterator<Item = &'g Import> + 'g {
        self.files().flat_map(|f| f.imports.iter())
    }

    pub fn struct_by_name(&self, name: &str) -> Option<&'g Struct> {
        self.structs().find(|s| s.name == name)
    }

    pub fn interface_by_name(&self, name: &str) -> Option<&'g Interface> {
        self.interfaces().find(|i| i.name == name)
    }

    pub fn function_by_name(&self, name: &str) -> Option<&'g Function> {
        self.functions().find(|f| f.name == name)
    }

    pub fn method_by_name(&self, name: &str) -> Option<&'g Method> {
        self.methods().find(|m| m.name == name)
    }

    pub fn variable_by_name(&self, name: &str) -> Option<&'g Variable> {
        self.variables().find(|v| v.name == name)
    }

    pub fn constant_by_name(&self, name: &str) -> Option<&'g Variable> {
        self.constants().find(|c| c.name == name)
    }

    pub fn import_by_name(&self, name: &str) -> Option<&'g Import> {
        self.imports().find(|i| i.matches(name))
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Relationships & packages
    // ═══════════════════════════════════════════════════════════════════════

    /// Methods declared anywhere in the struct's package with the struct as
    /// (value or pointer) receiver
    pub fn methods_of(&self, target: &Struct) -> Vec<&'g Method> {
        match self.package_of(target) {
            Some(package) => self.graph.methods_of(package.id, &target.name),
            None => Vec::new(),
        }
    }

    /// Package owning the file an entity was declared in
    pub fn package_of(&self, target: &Struct) -> Option<&'g PackageModel> {
        self.graph
            .packages()
            .iter()
            .find(|p| p.files.iter().any(|f| f.path == target.file_path))
    }

    pub fn packages(&self) -> &'g [PackageModel] {
        self.graph.packages()
    }

    pub fn package_by_directory(&self, directory: impl AsRef<Path>) -> Option<&'g PackageModel> {
        self.graph.package_by_directory(directory.as_ref())
    }

    pub fn diagnostics(&self) -> &'g [Diagnostic] {
        self.graph.diagnostics()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;
    use crate::features::discovery::{FileNode, PackageNode, PackageTree};
    use crate::features::entity_building::EntityBuilder;
    use crate::features::parsing::{GoSourceParser, SourceParser};
    use std::path::PathBuf;

    fn package(dir: &str, files: &[(&str, &str)], children: Vec<PackageNode>) -> PackageNode {
        let parser = GoSourceParser::new();
        let files: Vec<FileNode> = files
            .iter()
            .map(|(name, source)| {
                let path = format!("{}/{}", dir, name);
                FileNode {
                    path: PathBuf::from(&path),
                    raw: parser.parse(source, &path).unwrap(),
                }
            })
            .collect();
        PackageNode {
            name: files[0].raw.package_name.clone(),
            directory: PathBuf::from(dir),
            files,
            children,
        }
    }

    fn graph() -> ModelGraph {
        let child = package(
            "/r/store",
            &[(
                "store.go",
                "package store\n\ntype Store struct{}\n\ntype Config struct{}\n\nfunc (s *Store) Get() {}\n",
            )],
            vec![],
        );
        let root = package(
            "/r",
            &[
                (
                    "a.go",
                    "package app\n\nimport (\n\tlog \"github.com/x/log\"\n\t\"os\"\n)\n\ntype Config struct{}\n",
                ),
                (
                    "b.go",
                    "package app\n\nfunc (c Config) Load() {}\n\nconst Limit = 3\n\nvar Name = \"app\"\n",
                ),
            ],
            vec![child],
        );
        EntityBuilder::new(BuildConfig::default())
            .build(&PackageTree::new("/r", vec![root]))
            .unwrap()
    }

    #[test]
    fn test_first_match_is_parent_package() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        let config = query.struct_by_name("Config").unwrap();
        assert_eq!(config.package, "app");
        assert_eq!(query.list_all(EntityKind::Struct).len(), 3);
    }

    #[test]
    fn test_name_only_in_child_package_is_found() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        let store = query.get_by_name(EntityKind::Struct, "Store").unwrap();
        assert_eq!(store.package(), "store");
    }

    #[test]
    fn test_missing_name_is_none() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        assert!(query.get_by_name(EntityKind::Function, "Nope").is_none());
        assert!(query.get_by_name(EntityKind::Struct, "Load").is_none());
    }

    #[test]
    fn test_methods_of_across_files() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        let config = query.struct_by_name("Config").unwrap();
        let methods = query.methods_of(config);
        assert_eq!(methods.len(), 1);
        assert_eq!(methods[0].name, "Load");

        let store = query.struct_by_name("Store").unwrap();
        assert_eq!(query.methods_of(store)[0].name, "Get");
    }

    #[test]
    fn test_constants_and_variables_are_separate_kinds() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        assert!(query.get_by_name(EntityKind::Constant, "Limit").is_some());
        assert!(query.get_by_name(EntityKind::Variable, "Limit").is_none());
        let name = query.get_by_name(EntityKind::Variable, "Name").unwrap();
        assert_eq!(name.kind(), EntityKind::Variable);
    }

    #[test]
    fn test_import_lookup_by_alias_or_path() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        assert!(query.get_by_name(EntityKind::Import, "log").is_some());
        assert!(query.get_by_name(EntityKind::Import, "github.com/x/log").is_some());
        assert_eq!(query.import_by_name("os").unwrap().path, "\"os\"");
    }

    #[test]
    fn test_qualified_method_lookup() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        assert!(query.get_by_name(EntityKind::Method, "Store.Get").is_some());
        assert!(query.get_by_name(EntityKind::Method, "Config.Get").is_none());
    }

    #[test]
    fn test_packages_pre_order() {
        let graph = graph();
        let query = ModelQuery::new(&graph);
        let names: Vec<&str> = query.packages().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["app", "store"]);
        assert_eq!(query.package_by_directory("/r/store").unwrap().name, "store");
    }
}
