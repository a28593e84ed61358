//! Resource type enum for the nodes of a cloud resource graph.

use std::convert::Infallible;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of cloud resource a node represents.
///
/// Known OpenStack resource kinds get their own variant so that code
/// dispatching on them is checked for exhaustiveness. Anything else the
/// graph producer emits is kept verbatim in [`ResourceType::Other`] and
/// serializes back to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResourceType {
    Server,
    Volume,
    Snapshot,
    Network,
    Subnet,
    Port,
    FloatingIp,
    SecurityGroup,
    Router,
    LoadBalancer,
    Listener,
    Pool,
    Member,
    HealthMonitor,
    L7Policy,
    L7Rule,
    /// A resource kind without a dedicated variant.
    Other(String),
}

impl ResourceType {
    /// Returns the wire name of this type (e.g. `"floating_ip"`).
    pub fn as_str(&self) -> &str {
        match self {
            ResourceType::Server => "server",
            ResourceType::Volume => "volume",
            ResourceType::Snapshot => "snapshot",
            ResourceType::Network => "network",
            ResourceType::Subnet => "subnet",
            ResourceType::Port => "port",
            ResourceType::FloatingIp => "floating_ip",
            ResourceType::SecurityGroup => "security_group",
            ResourceType::Router => "router",
            ResourceType::LoadBalancer => "load_balancer",
            ResourceType::Listener => "listener",
            ResourceType::Pool => "pool",
            ResourceType::Member => "member",
            ResourceType::HealthMonitor => "health_monitor",
            ResourceType::L7Policy => "l7_policy",
            ResourceType::L7Rule => "l7_rule",
            ResourceType::Other(name) => name,
        }
    }

    /// Human-readable, title-cased name (e.g. `"Floating Ip"`).
    pub fn title(&self) -> String {
        self.as_str()
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "server" => ResourceType::Server,
            "volume" => ResourceType::Volume,
            "snapshot" => ResourceType::Snapshot,
            "network" => ResourceType::Network,
            "subnet" => ResourceType::Subnet,
            "port" => ResourceType::Port,
            "floating_ip" => ResourceType::FloatingIp,
            "security_group" => ResourceType::SecurityGroup,
            "router" => ResourceType::Router,
            "load_balancer" => ResourceType::LoadBalancer,
            "listener" => ResourceType::Listener,
            "pool" => ResourceType::Pool,
            "member" => ResourceType::Member,
            "health_monitor" => ResourceType::HealthMonitor,
            "l7_policy" => ResourceType::L7Policy,
            "l7_rule" => ResourceType::L7Rule,
            other => ResourceType::Other(other.to_string()),
        })
    }
}

impl From<&str> for ResourceType {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(resource_type) => resource_type,
            Err(never) => match never {},
        }
    }
}

impl From<String> for ResourceType {
    fn from(s: String) -> Self {
        ResourceType::from(s.as_str())
    }
}

impl From<ResourceType> for String {
    fn from(resource_type: ResourceType) -> Self {
        match resource_type {
            ResourceType::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}
