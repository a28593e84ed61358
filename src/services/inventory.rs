//! Resource inventory: nodes grouped and listed by type.

use std::collections::HashMap;

use serde_json::Value;

use crate::models::{Graph, Node, ResourceGroup, ResourceRow, ResourceType};

const UNKNOWN_STATUS: &str = "UNKNOWN";

/// Groups nodes by resource type.
///
/// Groups appear in the order their type is first seen; nodes keep graph
/// order. An empty `filter` keeps every type.
pub fn group_by_type(graph: &Graph, filter: &[ResourceType]) -> Vec<ResourceGroup> {
    let mut groups: Vec<ResourceGroup> = Vec::new();
    let mut positions: HashMap<&ResourceType, usize> = HashMap::new();

    for node in &graph.nodes {
        if !filter.is_empty() && !filter.contains(&node.resource_type) {
            continue;
        }
        let pos = *positions.entry(&node.resource_type).or_insert_with(|| {
            groups.push(ResourceGroup {
                resource_type: node.resource_type.clone(),
                count: 0,
                nodes: Vec::new(),
            });
            groups.len() - 1
        });
        let group = &mut groups[pos];
        group.count += 1;
        group.nodes.push(node.clone());
    }

    groups
}

/// Lists every node of `resource_type` as an id/name/status row.
pub fn list_type(graph: &Graph, resource_type: &ResourceType) -> Vec<ResourceRow> {
    graph
        .nodes
        .iter()
        .filter(|node| &node.resource_type == resource_type)
        .map(resource_row)
        .collect()
}

fn resource_row(node: &Node) -> ResourceRow {
    let name = node
        .name
        .as_deref()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| node.display_name());

    ResourceRow {
        id: node.id.clone(),
        name: name.to_string(),
        status: status_text(node.meta.get("status")),
    }
}

// Non-string statuses render as their JSON text.
fn status_text(status: Option<&Value>) -> String {
    match status {
        None | Some(Value::Null) => UNKNOWN_STATUS.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
