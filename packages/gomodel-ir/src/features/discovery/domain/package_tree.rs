//! Discovered package hierarchy

use std::path::PathBuf;

use crate::features::parsing::RawFile;

/// One parsed source file of a package
#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    pub path: PathBuf,
    pub raw: RawFile,
}

impl FileNode {
    pub fn path_str(&self) -> &str {
        self.raw.path.as_str()
    }
}

/// A directory holding at least one source file.
///
/// Owns its child packages; the hierarchy is a tree even when the
/// filesystem walk followed symbolic links.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageNode {
    /// From the `package` clause of the first file in listing order
    pub name: String,
    pub directory: PathBuf,
    pub files: Vec<FileNode>,
    pub children: Vec<PackageNode>,
}

impl PackageNode {
    /// Number of packages in this subtree, self included
    pub fn package_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(PackageNode::package_count)
            .sum::<usize>()
    }
}

/// Result of one discovery walk
#[derive(Debug, Clone, PartialEq)]
pub struct PackageTree {
    pub root: PathBuf,
    /// Top-level packages in listing order. A root holding source files is
    /// the single top-level package.
    pub packages: Vec<PackageNode>,
}

impl PackageTree {
    pub fn new(root: impl Into<PathBuf>, packages: Vec<PackageNode>) -> Self {
        Self {
            root: root.into(),
            packages,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn package_count(&self) -> usize {
        self.packages.iter().map(PackageNode::package_count).sum()
    }

    pub fn file_count(&self) -> usize {
        self.iter().map(|p| p.files.len()).sum()
    }

    /// Packages in pre-order: a package, then its children in listing order
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder {
            stack: self.packages.iter().rev().collect(),
        }
    }
}

/// Pre-order iterator over a package tree
pub struct PreOrder<'a> {
    stack: Vec<&'a PackageNode>,
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a PackageNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}
