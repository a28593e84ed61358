//! Relation classification for the resource detail panel.

use crate::graph::IndexedGraph;
use crate::models::{
    DirectRelation, Direction, Graph, Node, PortRelation, RelationBundle, ResourceType,
};

/// Bucket a direct neighbor lands in.
enum Bucket {
    Volume,
    Port,
    Other,
}

/// What a node reached through a port is surfaced as.
enum PortAttachment {
    SecurityGroup,
    FloatingIp,
}

fn bucket_for(resource_type: &ResourceType) -> Bucket {
    match resource_type {
        ResourceType::Volume => Bucket::Volume,
        ResourceType::Port => Bucket::Port,
        ResourceType::Server
        | ResourceType::Snapshot
        | ResourceType::Network
        | ResourceType::Subnet
        | ResourceType::FloatingIp
        | ResourceType::SecurityGroup
        | ResourceType::Router
        | ResourceType::LoadBalancer
        | ResourceType::Listener
        | ResourceType::Pool
        | ResourceType::Member
        | ResourceType::HealthMonitor
        | ResourceType::L7Policy
        | ResourceType::L7Rule
        | ResourceType::Other(_) => Bucket::Other,
    }
}

// Networks, subnets and the rest behind a port are not surfaced yet.
fn port_attachment(resource_type: &ResourceType) -> Option<PortAttachment> {
    match resource_type {
        ResourceType::SecurityGroup => Some(PortAttachment::SecurityGroup),
        ResourceType::FloatingIp => Some(PortAttachment::FloatingIp),
        ResourceType::Server
        | ResourceType::Volume
        | ResourceType::Snapshot
        | ResourceType::Network
        | ResourceType::Subnet
        | ResourceType::Port
        | ResourceType::Router
        | ResourceType::LoadBalancer
        | ResourceType::Listener
        | ResourceType::Pool
        | ResourceType::Member
        | ResourceType::HealthMonitor
        | ResourceType::L7Policy
        | ResourceType::L7Rule
        | ResourceType::Other(_) => None,
    }
}

/// Classifies the direct neighbors of `focal_id` in `graph`.
///
/// See [`classify_indexed`].
pub fn classify(graph: &Graph, focal_id: &str) -> RelationBundle {
    classify_indexed(&IndexedGraph::new(graph), focal_id)
}

/// Classifies the direct neighbors of `focal_id`.
///
/// Volumes and ports get their own buckets; everything else lands in
/// `others`. Each port is expanded one hop (never back to the focal node)
/// to collect its security groups and floating IPs. Buckets follow edge
/// order. Neighbors without a node record are skipped, so an unknown focal
/// id yields an empty bundle.
pub fn classify_indexed(graph: &IndexedGraph<'_>, focal_id: &str) -> RelationBundle {
    let mut bundle = RelationBundle::default();

    for (_, neighbor_id) in graph.neighbors(focal_id) {
        if neighbor_id == focal_id {
            continue;
        }
        let Some(neighbor) = graph.node(neighbor_id) else {
            continue;
        };

        match bucket_for(&neighbor.resource_type) {
            Bucket::Volume => bundle.volumes.push(neighbor.clone()),
            Bucket::Port => bundle.ports.push(port_relation(graph, neighbor, focal_id)),
            Bucket::Other => bundle.others.push(neighbor.clone()),
        }
    }

    tracing::debug!(
        focus = focal_id,
        volumes = bundle.volumes.len(),
        ports = bundle.ports.len(),
        others = bundle.others.len(),
        "Classified relations"
    );

    bundle
}

fn port_relation(graph: &IndexedGraph<'_>, port: &Node, focal_id: &str) -> PortRelation {
    let mut relation = PortRelation::new(port.clone());

    for (_, attached_id) in graph.neighbors(&port.id) {
        if attached_id == focal_id {
            continue;
        }
        let Some(attached) = graph.node(attached_id) else {
            continue;
        };

        match port_attachment(&attached.resource_type) {
            Some(PortAttachment::SecurityGroup) => relation.security_groups.push(attached.clone()),
            Some(PortAttachment::FloatingIp) => relation.ips.push(attached.clone()),
            None => {}
        }
    }

    relation
}

/// Every edge touching `focal_id`, seen from the focal node, in edge order.
///
/// Unlike [`classify`] this keeps edges whose other end has no node record.
pub fn direct_relations(graph: &IndexedGraph<'_>, focal_id: &str) -> Vec<DirectRelation> {
    graph
        .neighbors(focal_id)
        .map(|(edge, other_id)| {
            let direction = if edge.from == focal_id {
                Direction::Outgoing
            } else {
                Direction::Incoming
            };
            let relation = if edge.relation.is_empty() {
                match direction {
                    Direction::Outgoing => "->".to_string(),
                    Direction::Incoming => "<-".to_string(),
                }
            } else {
                edge.relation.clone()
            };

            DirectRelation {
                relation,
                direction,
                other_id: other_id.to_string(),
                other: graph.node(other_id).cloned(),
            }
        })
        .collect()
}
