//! Configuration with layered resolution using figment.
//!
//! Resolution order (highest priority last):
//! 1. User config: `~/.config/os-explorer/config.toml` (XDG) or platform config dir
//! 2. Project config: `.os-explorer.toml`
//! 3. Environment variables: `OS_EXPLORER_*`
//!
//! Every key is optional.
//!
//! ```toml
//! [graph]
//! path = "graph.json"
//!
//! [output]
//! format = "text"   # json | toon | text
//! pretty = true
//! ```
//!
//! Environment variables split on `_` after the prefix, so
//! `OS_EXPLORER_OUTPUT_FORMAT=toon` sets `output.format`.

use std::ops::Deref;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use crate::output::OutputFormat;

/// Project config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".os-explorer.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "OS_EXPLORER_";

/// Boxed wrapper for figment::Error to reduce Result size on the stack.
#[derive(Debug)]
pub struct ConfigError(Box<figment::Error>);

impl Deref for ConfigError {
    type Target = figment::Error;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self(Box::new(err))
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub graph: GraphConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where graph snapshots come from.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphConfig {
    /// Snapshot file used when none is given on the command line.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// How results are printed.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl Config {
    /// Load config with layered resolution (user → project → env).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::user_config_path(), Path::new(PROJECT_CONFIG_FILE))
    }

    /// Load config from explicit user and project file paths plus the
    /// environment. Missing files are skipped.
    pub fn load_from(user_config: &Path, project_config: &Path) -> Result<Self, ConfigError> {
        Figment::new()
            // Layer 1: User config (lowest priority)
            .merge(Toml::file(user_config))
            // Layer 2: Project config
            .merge(Toml::file(project_config))
            // Layer 3: Environment variables (highest priority)
            .merge(Env::prefixed(ENV_PREFIX).split("_"))
            .extract()
            .map_err(ConfigError::from)
    }

    /// User config path: ~/.config/os-explorer/config.toml (XDG) or platform config dir.
    fn user_config_path() -> PathBuf {
        // Prefer XDG config location (~/.config) on all platforms
        if let Some(home) = dirs::home_dir() {
            let xdg_path = home.join(".config").join("os-explorer").join("config.toml");
            if xdg_path.exists() {
                return xdg_path;
            }
        }
        // Fall back to platform-specific config dir
        dirs::config_dir()
            .map(|p| p.join("os-explorer").join("config.toml"))
            .unwrap_or_default()
    }
}
