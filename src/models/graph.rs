//! Resource graph snapshot: nodes, edges and the graph that holds them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::ResourceType;

/// A cloud resource in the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique, opaque resource identifier.
    pub id: String,
    /// Resource kind.
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
    /// Resource name as reported by the cloud (may differ from the label).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Arbitrary per-type attributes.
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: Map<String, Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
    /// Set when discovery could only fetch part of the resource.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub partial: bool,
}

impl Node {
    /// Creates a node with an empty meta map.
    pub fn new(
        id: impl Into<String>,
        resource_type: ResourceType,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            resource_type,
            label: label.into(),
            name: None,
            meta: Map::new(),
            created_at: None,
            updated_at: None,
            partial: false,
        }
    }

    /// Adds a meta attribute.
    pub fn with_meta(mut self, key: impl Into<String>, value: Value) -> Self {
        self.meta.insert(key.into(), value);
        self
    }

    /// Best name to show for this node: label, then name, then id.
    pub fn display_name(&self) -> &str {
        if !self.label.is_empty() {
            &self.label
        } else {
            self.name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(&self.id)
        }
    }

    /// String-valued meta attribute, if present.
    pub fn meta_str(&self, key: &str) -> Option<&str> {
        self.meta.get(key).and_then(Value::as_str)
    }
}

/// A relation between two resources.
///
/// Stored directed (`from` → `to`) but searched undirected: a node's
/// neighbors are found through either endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// Relation label (`attached`, `has_port`, `has_sg`, ...). May be empty.
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub relation: String,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Map::is_empty"
    )]
    pub meta: Map<String, Value>,
}

impl Edge {
    /// Creates an edge without meta attributes.
    pub fn new(from: impl Into<String>, to: impl Into<String>, relation: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            relation: relation.into(),
            meta: Map::new(),
        }
    }

    /// Returns true if `id` is either endpoint.
    pub fn touches(&self, id: &str) -> bool {
        self.from == id || self.to == id
    }

    /// The endpoint opposite to `id`, or `None` if the edge does not touch it.
    ///
    /// For a self-loop on `id` this is `id` itself.
    pub fn other_endpoint(&self, id: &str) -> Option<&str> {
        if self.from == id {
            Some(&self.to)
        } else if self.to == id {
            Some(&self.from)
        } else {
            None
        }
    }
}

/// A snapshot of a project's resource graph.
///
/// Node ids are expected to be unique but this is not enforced; lookups
/// resolve to the first node carrying an id. Edge endpoints may reference
/// ids that have no node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    /// Discovery timestamp as reported by the producer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Node>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph without project metadata.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self {
            nodes,
            edges,
            ..Self::default()
        }
    }

    /// Returns true if the graph has neither nodes nor edges.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

/// Treats an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
