//! Output rendering for command results.

use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::{
    DirectRelation, Direction, Node, RelationBundle, ResourceGroup, ResourceRow, RuleRow,
    SubgraphView,
};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON format (default).
    #[default]
    Json,
    /// TOON (Token-Oriented Object Notation) - compact, token-friendly.
    Toon,
    /// Human-readable plain text.
    Text,
}

/// Plain-text rendering of a result.
pub trait TextRender {
    /// Renders `self` as terminal text (no trailing newline required).
    fn render_text(&self) -> String;
}

/// A command result paired with the format it should be printed in.
///
/// # Example
///
/// ```ignore
/// let view = explorer.view(Some("s1"));
/// println!("{}", Response::new(view, OutputFormat::Text).render(true)?);
/// ```
pub struct Response<T>(pub T, pub OutputFormat);

impl<T> Response<T> {
    /// Create a response in the given format.
    pub fn new(data: T, format: OutputFormat) -> Self {
        Response(data, format)
    }

    /// Create a response with JSON format.
    pub fn json(data: T) -> Self {
        Response(data, OutputFormat::Json)
    }
}

impl<T: Serialize> Serialize for Response<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T: Serialize + TextRender> Response<T> {
    /// Renders the inner value. `pretty` only affects JSON.
    pub fn render(&self, pretty: bool) -> Result<String, AppError> {
        match self.1 {
            OutputFormat::Json if pretty => {
                serde_json::to_string_pretty(&self.0).map_err(AppError::Render)
            }
            OutputFormat::Json => serde_json::to_string(&self.0).map_err(AppError::Render),
            OutputFormat::Toon => {
                serde_toon::to_string(&self.0).map_err(|e| AppError::Toon(e.to_string()))
            }
            OutputFormat::Text => Ok(self.0.render_text()),
        }
    }
}

fn node_line(node: &Node) -> String {
    format!("{} ({}) [{}]", node.display_name(), node.id, node.resource_type)
}

/// `ip_address` of every entry in a port's `meta.fixed_ips`.
fn fixed_ips(port: &Node) -> impl Iterator<Item = &str> {
    port.meta
        .get("fixed_ips")
        .and_then(serde_json::Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(|ip| ip.get("ip_address").and_then(serde_json::Value::as_str))
}

impl TextRender for Node {
    fn render_text(&self) -> String {
        let mut out = node_line(self);
        for (key, value) in &self.meta {
            let _ = write!(out, "\n  {}: {}", key, value);
        }
        out
    }
}

impl TextRender for SubgraphView {
    fn render_text(&self) -> String {
        let mut out = String::new();
        if let Some(focus) = &self.focus {
            let _ = writeln!(out, "Focus: {}", focus);
        }
        let _ = writeln!(out, "Nodes ({}):", self.nodes.len());
        for view_node in &self.nodes {
            let marker = if Some(&view_node.node.id) == self.focus.as_ref() {
                '*'
            } else {
                '-'
            };
            let _ = writeln!(out, "  {} {}", marker, node_line(&view_node.node));
        }
        let _ = write!(out, "Links ({}):", self.links.len());
        for link in &self.links {
            let _ = write!(out, "\n  {} -[{}]-> {}", link.source, link.relation, link.target);
        }
        out
    }
}

impl TextRender for RelationBundle {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No related resources found.".to_string();
        }

        let mut out = String::new();
        if !self.volumes.is_empty() {
            let _ = writeln!(out, "Attached Volumes:");
            for volume in &self.volumes {
                let size = volume.meta.get("size").map(|v| v.to_string());
                let status = volume.meta_str("status");
                let _ = writeln!(
                    out,
                    "  - {} (size: {}GB, status: {})",
                    node_line(volume),
                    size.as_deref().unwrap_or("?"),
                    status.unwrap_or("?")
                );
            }
        }
        if !self.ports.is_empty() {
            let _ = writeln!(out, "Network Interfaces:");
            for port in &self.ports {
                let status = port.node.meta_str("status").unwrap_or("ACTIVE");
                let _ = writeln!(out, "  - Port {} {}", node_line(&port.node), status);
                if let Some(mac) = port.node.meta_str("mac_address") {
                    let _ = writeln!(out, "      mac: {}", mac);
                }
                for address in fixed_ips(&port.node) {
                    let _ = writeln!(out, "      fixed ip: {}", address);
                }
                for group in &port.security_groups {
                    let _ = writeln!(out, "      security group: {}", node_line(group));
                }
                for ip in &port.ips {
                    let _ = writeln!(out, "      floating ip: {}", node_line(ip));
                }
            }
        }
        if !self.others.is_empty() {
            let _ = writeln!(out, "Other Relations:");
            for other in &self.others {
                let _ = writeln!(out, "  - {}", node_line(other));
            }
        }
        out.trim_end().to_string()
    }
}

impl TextRender for Vec<DirectRelation> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No related resources found.".to_string();
        }
        self.iter()
            .map(|relation| {
                let arrow = match relation.direction {
                    Direction::Outgoing => "->",
                    Direction::Incoming => "<-",
                };
                let other = relation
                    .other
                    .as_ref()
                    .map(node_line)
                    .unwrap_or_else(|| format!("{} (missing)", relation.other_id));
                format!("{} {} {}", arrow, relation.relation, other)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextRender for Vec<RuleRow> {
    fn render_text(&self) -> String {
        if self.is_empty() {
            return "No rules.".to_string();
        }
        self.iter()
            .map(|row| format!("{} ({})", row.summary(), row.ethertype))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl TextRender for Vec<ResourceGroup> {
    fn render_text(&self) -> String {
        let mut out = String::new();
        for group in self {
            let _ = writeln!(out, "{} ({})", group.resource_type.title(), group.count);
            for node in &group.nodes {
                let _ = writeln!(out, "  {} ({})", node.display_name(), node.id);
            }
        }
        out.trim_end().to_string()
    }
}

impl TextRender for Vec<ResourceRow> {
    fn render_text(&self) -> String {
        let id_width = self.iter().map(|r| r.id.len()).max().unwrap_or(0).max(2);
        let name_width = self.iter().map(|r| r.name.len()).max().unwrap_or(0).max(4);

        let mut lines = vec![format!(
            "{:<id_width$}  {:<name_width$}  STATUS",
            "ID", "NAME"
        )];
        lines.extend(self.iter().map(|row| {
            format!(
                "{:<id_width$}  {:<name_width$}  {}",
                row.id, row.name, row.status
            )
        }));
        lines.join("\n")
    }
}
