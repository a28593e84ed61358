//! Neighborhood extraction for graph visualization.
//!
//! Without a focal node the whole graph passes through. With one, the view
//! is the focal node, its direct neighbors, and one extra hop through every
//! neighboring port, since ports are where security groups, floating IPs and
//! networks hang off a server.

use std::collections::HashSet;

use crate::graph::IndexedGraph;
use crate::models::{Edge, Graph, ResourceType, SubgraphView, ViewLink, ViewNode};

/// Highlight weight of the focal node.
pub const FOCUS_WEIGHT: u32 = 3;
/// Highlight weight of every other node.
pub const DEFAULT_WEIGHT: u32 = 1;

/// Computes the view for `focal_id` over `graph`.
///
/// See [`extract_indexed`] for the traversal policy.
pub fn extract(graph: &Graph, focal_id: Option<&str>) -> SubgraphView {
    extract_indexed(&IndexedGraph::new(graph), focal_id)
}

/// Computes the view for `focal_id` over an indexed graph.
///
/// `None` or an empty id returns every node and edge unchanged. Otherwise
/// the node set is the focal node, every node sharing an edge with it, and
/// every node sharing an edge with a neighboring port. Only ports trigger
/// the second hop and there is no third. Links are the collected edges with
/// both endpoints among the emitted nodes, de-duplicated on
/// `(source, target, type)` in first-seen order.
///
/// Ids without a node record are never emitted, so an unknown focal id
/// degrades to an empty view rather than an error.
pub fn extract_indexed(graph: &IndexedGraph<'_>, focal_id: Option<&str>) -> SubgraphView {
    match focal_id.filter(|id| !id.is_empty()) {
        None => full_view(graph.graph()),
        Some(focal) => focused_view(graph, focal),
    }
}

fn full_view(graph: &Graph) -> SubgraphView {
    let nodes = graph
        .nodes
        .iter()
        .map(|node| ViewNode {
            node: node.clone(),
            val: DEFAULT_WEIGHT,
        })
        .collect();
    let links = graph.edges.iter().map(to_link).collect();

    SubgraphView {
        focus: None,
        nodes,
        links,
    }
}

fn focused_view(graph: &IndexedGraph<'_>, focal: &str) -> SubgraphView {
    let mut members: HashSet<&str> = HashSet::from([focal]);
    let mut collected: Vec<&Edge> = Vec::new();

    for (edge, neighbor) in graph.neighbors(focal) {
        members.insert(neighbor);
        collected.push(edge);

        let is_port = neighbor != focal
            && graph
                .node(neighbor)
                .is_some_and(|node| node.resource_type == ResourceType::Port);
        if !is_port {
            continue;
        }

        for (port_edge, beyond) in graph.neighbors(neighbor) {
            if beyond != focal {
                members.insert(beyond);
                collected.push(port_edge);
            }
        }
    }

    // Node order follows the graph; duplicate ids are emitted once.
    let mut emitted: HashSet<&str> = HashSet::with_capacity(members.len());
    let nodes: Vec<ViewNode> = graph
        .graph()
        .nodes
        .iter()
        .filter(|&node| members.contains(node.id.as_str()))
        .filter(|&node| emitted.insert(node.id.as_str()))
        .map(|node| ViewNode {
            node: node.clone(),
            val: if node.id == focal {
                FOCUS_WEIGHT
            } else {
                DEFAULT_WEIGHT
            },
        })
        .collect();

    let mut seen: HashSet<(&str, &str, &str)> = HashSet::new();
    let links: Vec<ViewLink> = collected
        .into_iter()
        .filter(|&edge| emitted.contains(edge.from.as_str()) && emitted.contains(edge.to.as_str()))
        .filter(|&edge| seen.insert((edge.from.as_str(), edge.to.as_str(), edge.relation.as_str())))
        .map(to_link)
        .collect();

    tracing::debug!(
        focus = focal,
        nodes = nodes.len(),
        links = links.len(),
        "Extracted neighborhood view"
    );

    SubgraphView {
        focus: Some(focal.to_string()),
        nodes,
        links,
    }
}

fn to_link(edge: &Edge) -> ViewLink {
    ViewLink {
        source: edge.from.clone(),
        target: edge.to.clone(),
        relation: edge.relation.clone(),
    }
}
