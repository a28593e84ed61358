//! Immutable graph snapshots.

use std::path::Path;

use crate::error::AppError;
use crate::graph::{GraphIndex, IndexedGraph};
use crate::models::Graph;

/// A resource graph together with its adjacency index.
///
/// Built once per fetched graph and shared read-only (typically behind an
/// `Arc`) by every view computed from it.
#[derive(Debug, Clone)]
pub struct Snapshot {
    graph: Graph,
    index: GraphIndex,
}

impl Snapshot {
    /// Indexes `graph`.
    pub fn new(graph: Graph) -> Self {
        let index = GraphIndex::build(&graph);

        if index.node_count() != graph.nodes.len() {
            tracing::warn!(
                nodes = graph.nodes.len(),
                unique = index.node_count(),
                "Graph has duplicate node ids; first occurrence wins"
            );
        }
        let dangling = index.dangling_ids().count();
        if dangling > 0 {
            tracing::warn!(dangling, "Graph has edge endpoints without a node");
        }
        tracing::debug!(
            project = graph.project_name.as_deref().unwrap_or("-"),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "Indexed graph snapshot"
        );

        Self { graph, index }
    }

    /// Parses a snapshot from the `{nodes, edges}` JSON wire shape.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let graph: Graph = serde_json::from_str(json)?;
        Ok(Self::new(graph))
    }

    /// Reads and parses a snapshot file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        tracing::info!("Loading graph snapshot from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| AppError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The snapshot's graph.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The graph paired with its prebuilt index.
    pub fn indexed(&self) -> IndexedGraph<'_> {
        IndexedGraph::with_index(&self.graph, &self.index)
    }
}

impl From<Graph> for Snapshot {
    fn from(graph: Graph) -> Self {
        Self::new(graph)
    }
}
