//! Adjacency index over a graph snapshot.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::models::{Edge, Graph, Node};

/// Position-based lookup tables for a [`Graph`].
///
/// Maps each node ID to the position of its first node record, and each
/// ID appearing as an edge endpoint to the positions of its incident edges
/// in edge order. Built once per snapshot; turns neighbor lookups from a
/// scan of every edge into a walk over the node's own edges.
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    nodes: HashMap<String, usize>,
    incident: HashMap<String, Vec<usize>>,
}

impl GraphIndex {
    /// Builds the index for `graph`.
    pub fn build(graph: &Graph) -> Self {
        let mut nodes = HashMap::with_capacity(graph.nodes.len());
        for (pos, node) in graph.nodes.iter().enumerate() {
            nodes.entry(node.id.clone()).or_insert(pos);
        }

        let mut incident: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, edge) in graph.edges.iter().enumerate() {
            incident.entry(edge.from.clone()).or_default().push(pos);
            if edge.to != edge.from {
                incident.entry(edge.to.clone()).or_default().push(pos);
            }
        }

        Self { nodes, incident }
    }

    /// Number of distinct node IDs.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Edge endpoint IDs that have no node record.
    pub fn dangling_ids(&self) -> impl Iterator<Item = &str> {
        self.incident
            .keys()
            .filter(|id| !self.nodes.contains_key(id.as_str()))
            .map(String::as_str)
    }
}

/// A graph paired with its index.
///
/// Either owns a freshly built index or borrows one kept alongside a
/// long-lived snapshot.
#[derive(Debug, Clone)]
pub struct IndexedGraph<'g> {
    graph: &'g Graph,
    index: Cow<'g, GraphIndex>,
}

impl<'g> IndexedGraph<'g> {
    /// Indexes `graph`.
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            index: Cow::Owned(GraphIndex::build(graph)),
        }
    }

    /// Pairs `graph` with an index previously built from it.
    pub fn with_index(graph: &'g Graph, index: &'g GraphIndex) -> Self {
        Self {
            graph,
            index: Cow::Borrowed(index),
        }
    }

    /// The underlying graph.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The node record for `id`, if any.
    pub fn node(&self, id: &str) -> Option<&'g Node> {
        let graph = self.graph;
        self.index.nodes.get(id).map(|&pos| &graph.nodes[pos])
    }

    /// Edges touching `id`, in edge order. A self-loop is yielded once.
    pub fn incident(&self, id: &str) -> impl Iterator<Item = &'g Edge> + '_ {
        let graph = self.graph;
        self.index
            .incident
            .get(id)
            .into_iter()
            .flatten()
            .map(move |&pos| &graph.edges[pos])
    }

    /// `(edge, neighbor id)` pairs for every edge touching `id`, in edge order.
    pub fn neighbors<'a>(&'a self, id: &'a str) -> impl Iterator<Item = (&'g Edge, &'g str)> + 'a {
        self.incident(id).filter_map(move |edge| {
            edge.other_endpoint(id).map(|other| (edge, other))
        })
    }
}
