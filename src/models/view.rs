//! Output models handed to the presentation layer.

use serde::{Deserialize, Serialize};

use super::{Node, ResourceType};

// ============================================================================
// Neighborhood View
// ============================================================================

/// A node in a neighborhood view, carrying a highlight weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewNode {
    #[serde(flatten)]
    pub node: Node,
    /// Visual emphasis hint (focal node is heavier).
    pub val: u32,
}

/// A link in a neighborhood view.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ViewLink {
    /// Source node ID (the edge's `from`).
    pub source: String,
    /// Target node ID (the edge's `to`).
    pub target: String,
    /// Relation label.
    #[serde(rename = "type")]
    pub relation: String,
}

/// Nodes and links to visualize around an optional focal node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubgraphView {
    /// The focal node ID that was requested, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<String>,
    pub nodes: Vec<ViewNode>,
    pub links: Vec<ViewLink>,
}

// ============================================================================
// Relation Bundle
// ============================================================================

/// A port attached to the focal node, with what hangs off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRelation {
    /// The port itself.
    pub node: Node,
    /// Security groups governing the port.
    #[serde(rename = "securityGroups")]
    pub security_groups: Vec<Node>,
    /// Floating IPs associated with the port.
    pub ips: Vec<Node>,
}

impl PortRelation {
    /// Creates a relation for `port` with empty buckets.
    pub fn new(port: Node) -> Self {
        Self {
            node: port,
            security_groups: Vec::new(),
            ips: Vec::new(),
        }
    }
}

/// Direct neighbors of a focal node, bucketed by kind for a detail panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RelationBundle {
    pub volumes: Vec<Node>,
    pub ports: Vec<PortRelation>,
    pub others: Vec<Node>,
}

impl RelationBundle {
    /// Returns true if no bucket has any entry.
    pub fn is_empty(&self) -> bool {
        self.volumes.is_empty() && self.ports.is_empty() && self.others.is_empty()
    }

    /// Number of direct neighbors across all buckets.
    pub fn len(&self) -> usize {
        self.volumes.len() + self.ports.len() + self.others.len()
    }
}

// ============================================================================
// Direct Relations
// ============================================================================

/// Which way an edge points relative to the focal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// The focal node is the edge's `from`.
    Outgoing,
    /// The focal node is the edge's `to`.
    Incoming,
}

/// One edge touching the focal node, seen from the focal node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectRelation {
    /// Edge type, or an arrow (`->` / `<-`) when the edge has none.
    pub relation: String,
    pub direction: Direction,
    /// ID of the node at the other end.
    pub other_id: String,
    /// The node at the other end, if the graph has it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other: Option<Node>,
}

// ============================================================================
// Inventory
// ============================================================================

/// All nodes of one resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGroup {
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub count: usize,
    pub nodes: Vec<Node>,
}

/// A summary row for a resource listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRow {
    pub id: String,
    pub name: String,
    pub status: String,
}
