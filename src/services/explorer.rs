//! Explorer service: every read operation over one shared snapshot.

use std::sync::Arc;

use crate::error::AppError;
use crate::models::{
    DirectRelation, Node, RelationBundle, ResourceGroup, ResourceRow, ResourceType, RuleRow,
    SubgraphView,
};
use crate::snapshot::Snapshot;

use super::{inventory, relations, rules, subgraph};

/// Service for inspecting a resource graph snapshot.
///
/// Cheap to clone; clones share the snapshot and its index. All methods
/// are pure reads, so identical arguments give identical results.
#[derive(Debug, Clone)]
pub struct ExplorerService {
    snapshot: Arc<Snapshot>,
}

impl ExplorerService {
    /// Creates a service over `snapshot`.
    pub fn new(snapshot: Arc<Snapshot>) -> Self {
        Self { snapshot }
    }

    /// The snapshot this service reads.
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Get a node by ID.
    pub fn node(&self, id: &str) -> Result<&Node, AppError> {
        self.snapshot
            .indexed()
            .node(id)
            .ok_or_else(|| AppError::NodeNotFound(id.to_string()))
    }

    /// Neighborhood view around `focus`, or the whole graph without one.
    pub fn view(&self, focus: Option<&str>) -> SubgraphView {
        subgraph::extract_indexed(&self.snapshot.indexed(), focus)
    }

    /// Direct neighbors of `id` bucketed into volumes, ports and others.
    pub fn relations(&self, id: &str) -> RelationBundle {
        relations::classify_indexed(&self.snapshot.indexed(), id)
    }

    /// Every edge touching `id`, seen from `id`.
    pub fn neighbors(&self, id: &str) -> Vec<DirectRelation> {
        relations::direct_relations(&self.snapshot.indexed(), id)
    }

    /// Rule table of the security group `id`.
    pub fn rules(&self, id: &str) -> Result<Vec<RuleRow>, AppError> {
        let node = self.node(id)?;
        if node.resource_type != ResourceType::SecurityGroup {
            return Err(AppError::NotSecurityGroup {
                id: id.to_string(),
                actual: node.resource_type.to_string(),
            });
        }
        Ok(rules::rule_rows(node))
    }

    /// Nodes grouped by type, optionally restricted to `filter`.
    pub fn inventory(&self, filter: &[ResourceType]) -> Vec<ResourceGroup> {
        inventory::group_by_type(self.snapshot.graph(), filter)
    }

    /// Summary rows for every node of `resource_type`.
    pub fn list(&self, resource_type: &ResourceType) -> Vec<ResourceRow> {
        inventory::list_type(self.snapshot.graph(), resource_type)
    }
}
