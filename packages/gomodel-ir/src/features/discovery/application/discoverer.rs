//! Recursive package discovery
//!
//! Walks a root directory depth-first in file-name order, parses every
//! source file and groups files into packages. A directory with no source
//! files is not a package; packages found below it are attached to the
//! nearest ancestor package (or to the top level of the tree).
//!
//! The walk is fail-fast: the first unreadable entry, filesystem loop or
//! unparsable file aborts it and no partial tree is returned.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::DiscoveryConfig;
use crate::features::discovery::domain::{
    CancellationToken, FileNode, PackageNode, PackageTree, StopCondition,
};
use crate::features::parsing::{GoSourceParser, SourceParser};
use crate::shared::models::{ModelError, Result};

/// Builds a [`PackageTree`] from a directory
pub struct PackageDiscoverer {
    parser: Arc<dyn SourceParser>,
    config: DiscoveryConfig,
}

impl PackageDiscoverer {
    pub fn new(parser: Arc<dyn SourceParser>, config: DiscoveryConfig) -> Self {
        Self { parser, config }
    }

    /// Discoverer backed by the tree-sitter Go front-end
    pub fn go(config: DiscoveryConfig) -> Self {
        Self::new(Arc::new(GoSourceParser::new()), config)
    }

    pub fn config(&self) -> &DiscoveryConfig {
        &self.config
    }

    pub fn discover(&self, root: impl AsRef<Path>) -> Result<PackageTree> {
        self.discover_with_cancel(root, &CancellationToken::new())
    }

    pub fn discover_with_cancel(
        &self,
        root: impl AsRef<Path>,
        token: &CancellationToken,
    ) -> Result<PackageTree> {
        let root = root.as_ref();
        let root_str = root.display().to_string();

        let metadata = std::fs::metadata(root)
            .map_err(|e| ModelError::from(e).with_file(root_str.as_str()))?;
        if !metadata.is_dir() {
            return Err(ModelError::io("root is not a directory").with_file(root_str));
        }

        info!(
            root = %root_str,
            language = self.parser.language_name(),
            "discovering packages"
        );
        if !self.parser.supports_extension(&self.config.extension) {
            warn!(
                extension = %self.config.extension,
                language = self.parser.language_name(),
                "parser does not claim this extension"
            );
        }
        let stop = StopCondition::new(token.clone(), self.config.timeout());

        let mut walker = WalkDir::new(root)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name();
        if let Some(max_depth) = self.config.max_depth {
            // Files one level below the deepest walked directory still count
            walker = walker.max_depth(max_depth.saturating_add(1));
        }

        let mut stack = vec![DirFrame::new(0, root.to_path_buf())];

        for entry in walker
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_pruned(e))
        {
            let entry = entry?;
            let depth = entry.depth();
            if depth == 0 {
                stop.check(&root_str)?;
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_dir() {
                if self.config.max_depth.is_some_and(|max| depth > max) {
                    continue;
                }
                stop.check(&entry.path().display().to_string())?;
                close_frames(&mut stack, depth);
                debug!(directory = %entry.path().display(), depth, "entering directory");
                stack.push(DirFrame::new(depth, entry.path().to_path_buf()));
            } else if file_type.is_file() {
                let Some(name) = entry.file_name().to_str() else {
                    continue;
                };
                if !self.config.is_source_file(name) {
                    continue;
                }
                let path_str = entry.path().display().to_string();
                stop.check(&path_str)?;
                close_frames(&mut stack, depth);
                let file = self.parse_file(entry.path(), &path_str)?;
                if let Some(frame) = stack.last_mut() {
                    frame.files.push(file);
                }
            } else if file_type.is_symlink() {
                warn!(path = %entry.path().display(), "skipping symbolic link");
            }
        }

        close_frames(&mut stack, 1);
        let packages = stack.pop().map(DirFrame::finish).unwrap_or_default();
        let tree = PackageTree::new(root, packages);

        info!(
            root = %root_str,
            packages = tree.package_count(),
            files = tree.file_count(),
            "discovery complete"
        );
        Ok(tree)
    }

    fn is_pruned(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.config.is_excluded_dir(name))
    }

    fn parse_file(&self, path: &Path, path_str: &str) -> Result<FileNode> {
        let source =
            std::fs::read_to_string(path).map_err(|e| ModelError::from(e).with_file(path_str))?;
        let raw = self.parser.parse(&source, path_str)?;
        debug!(file = path_str, package = %raw.package_name, "parsed file");
        Ok(FileNode {
            path: path.to_path_buf(),
            raw,
        })
    }
}

/// A directory whose subtree is still being walked
struct DirFrame {
    depth: usize,
    directory: PathBuf,
    files: Vec<FileNode>,
    children: Vec<PackageNode>,
}

impl DirFrame {
    fn new(depth: usize, directory: PathBuf) -> Self {
        Self {
            depth,
            directory,
            files: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The package this directory forms, or its hoisted children
    fn finish(self) -> Vec<PackageNode> {
        let Some(first) = self.files.first() else {
            return self.children;
        };
        vec![PackageNode {
            name: first.raw.package_name.clone(),
            directory: self.directory,
            files: self.files,
            children: self.children,
        }]
    }
}

/// Finish every open directory at `depth` or deeper.
/// The root frame is never closed here.
fn close_frames(stack: &mut Vec<DirFrame>, depth: usize) {
    while stack.len() > 1 && stack.last().is_some_and(|top| top.depth >= depth) {
        let Some(done) = stack.pop() else { break };
        let finished = done.finish();
        if let Some(parent) = stack.last_mut() {
            parent.children.extend(finished);
        }
    }
}
