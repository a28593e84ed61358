//! Integration tests for the public explorer API.
//!
//! Exercise the view, relation and rule operations end to end on graph
//! snapshots in the JSON wire shape produced by resource discovery.

use std::collections::HashSet;
use std::sync::Arc;

use os_explorer::models::{Graph, RelationBundle, ResourceType, SubgraphView};
use os_explorer::output::{OutputFormat, Response};
use os_explorer::services::{classify, extract, rule_rows, ExplorerService};
use os_explorer::snapshot::Snapshot;
use serde_json::json;

fn worked_example() -> Graph {
    serde_json::from_value(json!({
        "nodes": [
            {"id": "s1", "type": "server", "label": "s1"},
            {"id": "p1", "type": "port", "label": "p1"},
            {"id": "sg1", "type": "security_group", "label": "sg1", "meta": {
                "security_group_rules": [{
                    "direction": "ingress",
                    "protocol": "tcp",
                    "port_range_min": 22,
                    "port_range_max": 22,
                    "remote_ip_prefix": "0.0.0.0/0",
                    "ethertype": "IPv4"
                }]
            }},
            {"id": "v1", "type": "volume", "label": "v1"}
        ],
        "edges": [
            {"from": "s1", "to": "p1", "type": "attached_to"},
            {"from": "p1", "to": "sg1", "type": "secured_by"},
            {"from": "s1", "to": "v1", "type": "attached_to"}
        ]
    }))
    .unwrap()
}

/// A small project as discovery would emit it: two servers sharing a
/// network, a load balancer, a dangling snapshot edge and duplicate edges.
fn project() -> Graph {
    serde_json::from_value(json!({
        "project_id": "8f2c",
        "project_name": "shop",
        "generated_at": "2024-05-01T10:00:00",
        "nodes": [
            {"id": "web", "type": "server", "name": "web", "label": "web", "meta": {"status": "ACTIVE"}},
            {"id": "db", "type": "server", "name": "db", "label": "db", "meta": {"status": "SHUTOFF"}},
            {"id": "web-eth0", "type": "port", "name": "", "label": null, "meta": {"mac_address": "fa:16:3e:00:00:01"}},
            {"id": "db-eth0", "type": "port", "name": "db-eth0", "label": "db-eth0", "meta": {}},
            {"id": "net", "type": "network", "name": "private", "label": "private", "meta": {}},
            {"id": "subnet", "type": "subnet", "name": "private-v4", "label": "private-v4", "meta": {"cidr": "10.0.0.0/24"}},
            {"id": "sg-web", "type": "security_group", "name": "web", "label": "web", "meta": {"security_group_rules": [
                {"direction": "ingress", "protocol": "tcp", "port_range_min": 80, "port_range_max": 443, "remote_ip_prefix": "0.0.0.0/0", "ethertype": "IPv4"},
                {"direction": "egress", "ethertype": "IPv6"}
            ]}},
            {"id": "sg-db", "type": "security_group", "name": "db", "label": "db", "meta": {"security_group_rules": [
                {"direction": "ingress", "protocol": "tcp", "port_range_min": 5432, "port_range_max": 5432, "remote_group_id": "sg-web", "ethertype": "IPv4"}
            ]}},
            {"id": "fip", "type": "floating_ip", "name": "203.0.113.7", "label": "203.0.113.7", "meta": {}},
            {"id": "data", "type": "volume", "name": "data", "label": "data", "meta": {"size": 100, "status": "in-use"}},
            {"id": "lb", "type": "load_balancer", "name": "lb", "label": "lb", "meta": {}},
            {"id": "router", "type": "router", "name": "gw", "label": "gw", "meta": {}}
        ],
        "edges": [
            {"from": "web", "to": "web-eth0", "type": "has_port"},
            {"from": "web-eth0", "to": "sg-web", "type": "has_sg"},
            {"from": "fip", "to": "web-eth0", "type": "associated"},
            {"from": "web-eth0", "to": "net", "type": "on_network"},
            {"from": "db", "to": "db-eth0", "type": "has_port"},
            {"from": "db-eth0", "to": "sg-db", "type": "has_sg"},
            {"from": "db-eth0", "to": "net", "type": "on_network"},
            {"from": "db", "to": "data", "type": "attached", "meta": {"device": "/dev/vdb"}},
            {"from": "data", "to": "snap-deleted", "type": "has_snapshot"},
            {"from": "net", "to": "subnet", "type": "has_subnet"},
            {"from": "router", "to": "net", "type": ""},
            {"from": "lb", "to": "web-eth0", "type": "member"},
            {"from": "web", "to": "web-eth0", "type": "has_port"},
            {"from": "web-eth0", "to": "sg-web", "type": "has_sg"}
        ]
    }))
    .unwrap()
}

fn ids(view: &SubgraphView) -> HashSet<&str> {
    view.nodes.iter().map(|n| n.node.id.as_str()).collect()
}

fn assert_view_invariants(view: &SubgraphView) {
    let node_ids = ids(view);
    let mut keys = HashSet::new();
    for link in &view.links {
        assert!(node_ids.contains(link.source.as_str()), "dangling source {}", link.source);
        assert!(node_ids.contains(link.target.as_str()), "dangling target {}", link.target);
        assert!(
            keys.insert((&link.source, &link.target, &link.relation)),
            "duplicate link {:?}",
            link
        );
    }
}

fn direct_neighbor_ids<'g>(graph: &'g Graph, focal: &str) -> Vec<&'g str> {
    graph
        .edges
        .iter()
        .filter_map(|e| e.other_endpoint(focal))
        .filter(|&id| id != focal && graph.nodes.iter().any(|n| n.id == id))
        .collect()
}

fn bundle_ids(bundle: &RelationBundle) -> Vec<&str> {
    bundle
        .volumes
        .iter()
        .chain(bundle.ports.iter().map(|p| &p.node))
        .chain(bundle.others.iter())
        .map(|n| n.id.as_str())
        .collect()
}

#[test]
fn test_worked_example_view() {
    let graph = worked_example();
    let view = extract(&graph, Some("s1"));

    assert_eq!(ids(&view), HashSet::from(["s1", "p1", "sg1", "v1"]));
    assert_eq!(view.links.len(), 3);
    assert_view_invariants(&view);
}

#[test]
fn test_worked_example_relations() {
    let graph = worked_example();
    let bundle = classify(&graph, "s1");

    assert_eq!(bundle.volumes.len(), 1);
    assert_eq!(bundle.volumes[0].id, "v1");
    assert_eq!(bundle.ports.len(), 1);
    assert_eq!(bundle.ports[0].node.id, "p1");
    assert_eq!(bundle.ports[0].security_groups.len(), 1);
    assert_eq!(bundle.ports[0].security_groups[0].id, "sg1");
    assert!(bundle.ports[0].ips.is_empty());
    assert!(bundle.others.is_empty());
}

#[test]
fn test_worked_example_rules() {
    let graph = worked_example();
    let sg = graph.nodes.iter().find(|n| n.id == "sg1").unwrap();
    let rows = rule_rows(sg);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].port_range, "22");
    assert_eq!(rows[0].remote, "0.0.0.0/0");
    assert_eq!(rows[0].protocol, "tcp");
}

#[test]
fn test_pass_through_matches_graph() {
    let graph = project();
    let view = extract(&graph, None);

    let view_ids: Vec<&str> = view.nodes.iter().map(|n| n.node.id.as_str()).collect();
    let graph_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(view_ids, graph_ids);
    assert_eq!(view.links.len(), graph.edges.len());
}

#[test]
fn test_view_invariants_for_every_focus() {
    let graph = project();
    for node in &graph.nodes {
        let view = extract(&graph, Some(&node.id));

        assert!(ids(&view).contains(node.id.as_str()), "focus {} missing", node.id);
        assert_view_invariants(&view);
        assert_eq!(view, extract(&graph, Some(&node.id)), "non-deterministic for {}", node.id);
    }
}

#[test]
fn test_relations_partition_direct_neighbors() {
    let graph = project();
    for node in &graph.nodes {
        let bundle = classify(&graph, &node.id);
        let mut expected = direct_neighbor_ids(&graph, &node.id);
        let mut actual = bundle_ids(&bundle);
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected, "partition for {}", node.id);

        assert!(bundle.volumes.iter().all(|n| n.resource_type == ResourceType::Volume));
        assert!(bundle.ports.iter().all(|p| p.node.resource_type == ResourceType::Port));
        assert!(bundle
            .others
            .iter()
            .all(|n| n.resource_type != ResourceType::Volume && n.resource_type != ResourceType::Port));
    }
}

#[test]
fn test_web_server_view() {
    let graph = project();
    let view = extract(&graph, Some("web"));

    // The port hop pulls in the security group, floating IP, network and
    // load balancer, but the network is not expanded to the db side.
    assert_eq!(
        ids(&view),
        HashSet::from(["web", "web-eth0", "net", "sg-web", "fip", "lb"])
    );
    // Duplicate has_port / has_sg edges collapse.
    assert_eq!(view.links.len(), 5);
}

#[test]
fn test_db_relations() {
    let graph = project();
    let bundle = classify(&graph, "db");

    assert_eq!(bundle.volumes[0].id, "data");
    assert_eq!(bundle.ports[0].node.id, "db-eth0");
    assert_eq!(bundle.ports[0].security_groups[0].id, "sg-db");
    assert!(bundle.ports[0].ips.is_empty());
}

#[test]
fn test_explorer_service_end_to_end() {
    let snapshot = Snapshot::new(project());
    let explorer = ExplorerService::new(Arc::new(snapshot));

    let rows = explorer.rules("sg-web").unwrap();
    assert_eq!(rows[0].port_range, "80-443");
    assert_eq!(rows[1].protocol, "Any");
    assert_eq!(rows[1].remote, "Any");
    assert_eq!(explorer.rules("sg-db").unwrap()[0].remote, "sg-web");

    let inventory = explorer.inventory(&[ResourceType::SecurityGroup]);
    assert_eq!(inventory.len(), 1);
    assert_eq!(inventory[0].count, 2);

    let servers = explorer.list(&ResourceType::Server);
    assert_eq!(servers[1].status, "SHUTOFF");

    let neighbors = explorer.neighbors("net");
    assert_eq!(neighbors.len(), 4);
    assert_eq!(neighbors[3].relation, "<-");
}

#[test]
fn test_results_render_in_every_format() {
    let explorer = ExplorerService::new(Arc::new(Snapshot::new(worked_example())));
    let view = explorer.view(Some("s1"));

    let json = Response::new(view.clone(), OutputFormat::Json)
        .render(false)
        .unwrap();
    let parsed: SubgraphView = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, view);

    let text = Response::new(view.clone(), OutputFormat::Text)
        .render(true)
        .unwrap();
    assert!(text.contains("* s1 (s1) [server]"));
    assert!(text.contains("p1 -[secured_by]-> sg1"));

    let rules = explorer.rules("sg1").unwrap();
    let toon = Response::new(rules, OutputFormat::Toon).render(true).unwrap();
    assert!(toon.contains("0.0.0.0/0"));
}

#[test]
fn test_empty_graph() {
    let graph = Graph::default();
    assert_eq!(extract(&graph, None), SubgraphView::default());
    assert!(extract(&graph, Some("s1")).nodes.is_empty());
    assert!(classify(&graph, "s1").is_empty());
}
