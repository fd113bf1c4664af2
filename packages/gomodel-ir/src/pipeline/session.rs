//! Model session
//!
//! One session = one discovery walk + one build. Either both succeed and the
//! session holds an immutable model, or the first error is returned.
//!
//! ```text
//! root ─► PackageDiscoverer ─► PackageTree
//!      ─► EntityBuilder     ─► ModelGraph ─► ModelQuery
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::info;

use crate::config::ModelConfig;
use crate::features::discovery::{CancellationToken, PackageDiscoverer, PackageTree};
use crate::features::entity_building::{Diagnostic, EntityBuilder, ModelGraph};
use crate::features::parsing::{GoSourceParser, SourceParser};
use crate::features::query::ModelQuery;
use crate::shared::models::Result;

/// Counters and timings of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    pub packages: usize,
    pub files: usize,
    pub entities: usize,
    pub diagnostics: usize,
    pub discovery_ms: u64,
    pub build_ms: u64,
}

#[derive(Debug)]
pub struct ModelSession {
    tree: PackageTree,
    graph: ModelGraph,
    stats: SessionStats,
}

impl ModelSession {
    pub fn open(root: impl AsRef<Path>, config: &ModelConfig) -> Result<Self> {
        Self::open_with_cancel(root, config, &CancellationToken::new())
    }

    pub fn open_with_cancel(
        root: impl AsRef<Path>,
        config: &ModelConfig,
        token: &CancellationToken,
    ) -> Result<Self> {
        Self::open_with_parser(root, config, Arc::new(GoSourceParser::new()), token)
    }

    /// Open with a caller-supplied front-end
    pub fn open_with_parser(
        root: impl AsRef<Path>,
        config: &ModelConfig,
        parser: Arc<dyn SourceParser>,
        token: &CancellationToken,
    ) -> Result<Self> {
        config.validate()?;
        let root = root.as_ref();

        let started = Instant::now();
        let tree = PackageDiscoverer::new(parser, config.discovery.clone())
            .discover_with_cancel(root, token)?;
        let discovery_ms = started.elapsed().as_millis() as u64;

        let started = Instant::now();
        let graph = EntityBuilder::new(config.build.clone()).build(&tree)?;
        let build_ms = started.elapsed().as_millis() as u64;

        let stats = SessionStats {
            packages: tree.package_count(),
            files: tree.file_count(),
            entities: graph.entity_count(),
            diagnostics: graph.diagnostics().len(),
            discovery_ms,
            build_ms,
        };
        info!(
            root = %root.display(),
            packages = stats.packages,
            files = stats.files,
            entities = stats.entities,
            discovery_ms,
            build_ms,
            "session ready"
        );

        Ok(Self { tree, graph, stats })
    }

    pub fn tree(&self) -> &PackageTree {
        &self.tree
    }

    pub fn graph(&self) -> &ModelGraph {
        &self.graph
    }

    pub fn query(&self) -> ModelQuery<'_> {
        ModelQuery::new(&self.graph)
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.graph.diagnostics()
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}
