//! Security group rule models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A security group rule as stored in a security group's
/// `meta.security_group_rules` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityGroupRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `ingress` or `egress`.
    #[serde(default)]
    pub direction: Option<String>,
    /// IP protocol (`tcp`, `udp`, `icmp`, ...). Absent means any.
    #[serde(default)]
    pub protocol: Option<String>,
    /// Lower port bound. Kept as raw JSON since producers emit numbers,
    /// floats or numeric strings.
    #[serde(default)]
    pub port_range_min: Option<Value>,
    /// Upper port bound, same encoding as `port_range_min`.
    #[serde(default)]
    pub port_range_max: Option<Value>,
    /// Remote CIDR the rule matches.
    #[serde(default)]
    pub remote_ip_prefix: Option<String>,
    /// Remote security group the rule matches.
    #[serde(default)]
    pub remote_group_id: Option<String>,
    /// `IPv4` or `IPv6`.
    #[serde(default)]
    pub ethertype: Option<String>,
}

/// A security group rule rendered for display. Every column is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleRow {
    pub direction: String,
    pub protocol: String,
    pub port_range: String,
    pub remote: String,
    pub ethertype: String,
}
