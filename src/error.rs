//! Application error types.

use std::path::PathBuf;

use thiserror::Error;

/// Application-level errors for os-explorer.
///
/// The view and relation algorithms never fail; these cover loading
/// snapshots, looking up specific resources and rendering output.
#[derive(Error, Debug)]
pub enum AppError {
    // Snapshot errors
    #[error("Failed to read graph snapshot {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid graph JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No graph snapshot given. Pass --graph or set graph.path in the configuration.")]
    MissingGraphPath,

    // Domain errors
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("Node {id} is a {actual}, not a security group")]
    NotSecurityGroup { id: String, actual: String },

    // Output errors
    #[error("Failed to serialize output: {0}")]
    Render(#[source] serde_json::Error),

    #[error("TOON serialization error: {0}")]
    Toon(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

impl AppError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Io { .. } => "SNAPSHOT_IO",
            AppError::Parse(_) => "SNAPSHOT_PARSE",
            AppError::MissingGraphPath => "MISSING_GRAPH_PATH",
            AppError::NodeNotFound(_) => "NODE_NOT_FOUND",
            AppError::NotSecurityGroup { .. } => "NOT_SECURITY_GROUP",
            AppError::Render(_) => "RENDER_ERROR",
            AppError::Toon(_) => "TOON_ERROR",
            AppError::Config(_) => "CONFIG_ERROR",
        }
    }
}
