//! Security group rule table projection.

use serde_json::Value;

use crate::models::{Node, RuleRow, SecurityGroupRule};

/// Meta key holding a security group's rule list.
pub const RULES_META_KEY: &str = "security_group_rules";

const ANY: &str = "Any";

/// Parses the rules stored in a security group's meta.
///
/// A missing or non-list entry yields no rules. List entries that are not
/// rule objects are skipped with a warning.
pub fn parse_rules(node: &Node) -> Vec<SecurityGroupRule> {
    let Some(Value::Array(entries)) = node.meta.get(RULES_META_KEY) else {
        return Vec::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(idx, entry)| {
            if !entry.is_object() {
                tracing::warn!(node = %node.id, idx, "Skipping security group rule that is not an object");
                return None;
            }
            match serde_json::from_value::<SecurityGroupRule>(entry.clone()) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    tracing::warn!(node = %node.id, idx, error = %e, "Skipping malformed security group rule");
                    None
                }
            }
        })
        .collect()
}

/// Display rows for every rule of a security group, in stored order.
pub fn rule_rows(node: &Node) -> Vec<RuleRow> {
    parse_rules(node).iter().map(RuleRow::from).collect()
}

impl From<&SecurityGroupRule> for RuleRow {
    fn from(rule: &SecurityGroupRule) -> Self {
        Self {
            direction: rule.direction.clone().unwrap_or_default(),
            protocol: non_empty(rule.protocol.as_deref())
                .unwrap_or(ANY)
                .to_string(),
            port_range: port_range(
                rule.port_range_min.as_ref(),
                rule.port_range_max.as_ref(),
            ),
            remote: non_empty(rule.remote_ip_prefix.as_deref())
                .or_else(|| non_empty(rule.remote_group_id.as_deref()))
                .unwrap_or(ANY)
                .to_string(),
            ethertype: rule.ethertype.clone().unwrap_or_default(),
        }
    }
}

impl RuleRow {
    /// One-line form: `ingress tcp 22 -> 0.0.0.0/0`.
    pub fn summary(&self) -> String {
        format!(
            "{} {} {} -> {}",
            self.direction, self.protocol, self.port_range, self.remote
        )
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Text form of a port bound. Null and empty strings count as absent;
/// integral floats drop their fraction so `22.0` and `22` compare equal.
fn bound_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) => non_empty(Some(s.trim())).map(str::to_string),
        Value::Number(n) => Some(
            n.as_i64()
                .map(|i| i.to_string())
                .or_else(|| n.as_u64().map(|u| u.to_string()))
                .or_else(|| n.as_f64().map(|f| f.to_string()))
                .unwrap_or_else(|| n.to_string()),
        ),
        other => Some(other.to_string()),
    }
}

// A collapsed range on port 0 renders as `Any`.
fn port_range(min: Option<&Value>, max: Option<&Value>) -> String {
    match (bound_text(min), bound_text(max)) {
        (None, _) => ANY.to_string(),
        (Some(min), max) if max.as_ref().map_or(true, |max| *max == min) => {
            if min == "0" {
                ANY.to_string()
            } else {
                min
            }
        }
        (Some(min), Some(max)) => format!("{}-{}", min, max),
        (Some(min), None) => min,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResourceType;
    use serde_json::json;

    fn group(rules: Value) -> Node {
        Node::new("sg1", ResourceType::SecurityGroup, "default").with_meta(RULES_META_KEY, rules)
    }

    #[test]
    fn test_single_port_rule() {
        let node = group(json!([{
            "direction": "ingress",
            "protocol": "tcp",
            "port_range_min": 22,
            "port_range_max": 22,
            "remote_ip_prefix": "0.0.0.0/0",
            "ethertype": "IPv4"
        }]));
        let rows = rule_rows(&node);

        assert_eq!(
            rows,
            vec![RuleRow {
                direction: "ingress".to_string(),
                protocol: "tcp".to_string(),
                port_range: "22".to_string(),
                remote: "0.0.0.0/0".to_string(),
                ethertype: "IPv4".to_string(),
            }]
        );
        assert_eq!(rows[0].summary(), "ingress tcp 22 -> 0.0.0.0/0");
    }

    #[test]
    fn test_any_defaults() {
        let node = group(json!([{
            "direction": "egress",
            "protocol": null,
            "port_range_min": null,
            "port_range_max": null,
            "remote_ip_prefix": null,
            "remote_group_id": null,
            "ethertype": "IPv6"
        }]));
        let row = &rule_rows(&node)[0];

        assert_eq!(row.protocol, "Any");
        assert_eq!(row.port_range, "Any");
        assert_eq!(row.remote, "Any");
    }

    fn range(min: Value, max: Value) -> String {
        port_range(Some(&min), Some(&max))
    }

    #[test]
    fn test_port_range() {
        assert_eq!(range(json!(8000), json!(8080)), "8000-8080");
        assert_eq!(range(json!(443), json!(443)), "443");
        assert_eq!(range(json!(53), Value::Null), "53");
        assert_eq!(port_range(Some(&json!(53)), None), "53");
        assert_eq!(range(Value::Null, json!(80)), "Any");
        assert_eq!(port_range(None, None), "Any");
    }

    #[test]
    fn test_zero_port_range_is_any() {
        assert_eq!(range(json!(0), json!(0)), "Any");
        assert_eq!(range(json!(0), json!(65535)), "0-65535");
    }

    #[test]
    fn test_non_integer_bounds_are_rendered() {
        let node = group(json!([
            {"direction": "ingress", "port_range_min": 0, "port_range_max": 0, "ethertype": "IPv4"},
            {"direction": "ingress", "port_range_min": "22", "port_range_max": "22", "ethertype": "IPv4"},
            {"direction": "ingress", "port_range_min": 22.0, "port_range_max": 22.0, "ethertype": "IPv4"},
            {"direction": "ingress", "port_range_min": "8000", "port_range_max": 8080.0, "ethertype": "IPv4"},
            {"direction": "ingress", "port_range_min": 22, "port_range_max": "22", "ethertype": "IPv4"}
        ]));
        let ranges: Vec<String> = rule_rows(&node).into_iter().map(|r| r.port_range).collect();

        assert_eq!(ranges, vec!["Any", "22", "22", "8000-8080", "22"]);
    }

    #[test]
    fn test_remote_falls_back_to_group() {
        let node = group(json!([
            {"direction": "ingress", "remote_group_id": "sg-web", "ethertype": "IPv4"},
            {"direction": "ingress", "remote_ip_prefix": "", "remote_group_id": "sg-db", "ethertype": "IPv4"},
            {"direction": "ingress", "remote_ip_prefix": "10.0.0.0/8", "remote_group_id": "sg-db", "ethertype": "IPv4"}
        ]));
        let remotes: Vec<String> = rule_rows(&node).into_iter().map(|r| r.remote).collect();

        assert_eq!(remotes, vec!["sg-web", "sg-db", "10.0.0.0/8"]);
    }

    #[test]
    fn test_empty_protocol_is_any() {
        let node = group(json!([{"direction": "ingress", "protocol": "", "ethertype": "IPv4"}]));
        assert_eq!(rule_rows(&node)[0].protocol, "Any");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let node = group(json!([
            "not a rule",
            {"direction": 5, "ethertype": "IPv4"},
            {"direction": "egress", "ethertype": "IPv4"}
        ]));
        let rows = rule_rows(&node);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].direction, "egress");
    }

    #[test]
    fn test_missing_rules() {
        let node = Node::new("sg1", ResourceType::SecurityGroup, "default");
        assert!(rule_rows(&node).is_empty());

        let node = group(json!({"not": "a list"}));
        assert!(rule_rows(&node).is_empty());
    }
}
