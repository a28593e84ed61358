//! CLI module for os-explorer.
//!
//! Subcommands:
//! - `view`: Neighborhood view around a resource (or the whole graph)
//! - `relations`: Volumes, ports and other relations of a resource
//! - `neighbors`: Every edge touching a resource
//! - `show`: A single resource with its metadata
//! - `rules`: Rule table of a security group
//! - `inventory`: Resources grouped by type
//! - `list`: Id/name/status listing of one resource type

mod inventory;
mod relations;
mod view;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use serde::Serialize;

use crate::config::Config;
use crate::error::AppError;
use crate::output::{OutputFormat, Response, TextRender};
use crate::services::ExplorerService;
use crate::snapshot::Snapshot;

/// os-explorer - Cloud resource graph explorer
#[derive(Parser)]
#[command(name = "os-explorer")]
#[command(about = "Inspect cloud resources and their relationships in a resource graph snapshot")]
#[command(version)]
pub struct App {
    /// Run in verbose mode
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Graph snapshot JSON file (defaults to graph.path from configuration)
    #[arg(short, long, global = true)]
    pub graph: Option<PathBuf>,

    /// Output format (defaults to output.format from configuration)
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Neighborhood view around a resource, or the whole graph
    View {
        /// Focal resource ID
        #[arg(long)]
        focus: Option<String>,
    },

    /// Volumes, ports (with security groups and floating IPs) and other relations
    Relations {
        /// Resource ID
        id: String,
    },

    /// Every edge touching a resource
    Neighbors {
        /// Resource ID
        id: String,
    },

    /// A single resource with its metadata
    Show {
        /// Resource ID
        id: String,
    },

    /// Rule table of a security group
    Rules {
        /// Security group ID
        id: String,
    },

    /// Resources grouped by type
    Inventory {
        /// Only include these resource types (repeatable)
        #[arg(short = 't', long = "type")]
        types: Vec<String>,
    },

    /// Id, name and status of every resource of one type
    List {
        /// Resource type (e.g. server, volume, floating_ip)
        resource_type: String,
    },
}

/// Everything a subcommand needs to run.
struct Session {
    explorer: ExplorerService,
    format: OutputFormat,
    pretty: bool,
}

impl Session {
    /// Print a result to stdout in the session's format.
    fn print<T: Serialize + TextRender>(&self, data: T) -> Result<(), AppError> {
        let rendered = Response::new(data, self.format).render(self.pretty)?;
        println!("{}", rendered);
        Ok(())
    }
}

impl App {
    /// Run the CLI application.
    pub fn run(self) -> color_eyre::Result<()> {
        let session = self
            .open_session()
            .map_err(|e| eyre!("[{}] {}", e.code(), e))?;

        let result = match &self.command {
            Command::View { focus } => self.run_view(&session, focus.as_deref()),
            Command::Relations { id } => self.run_relations(&session, id),
            Command::Neighbors { id } => self.run_neighbors(&session, id),
            Command::Show { id } => self.run_show(&session, id),
            Command::Rules { id } => self.run_rules(&session, id),
            Command::Inventory { types } => self.run_inventory(&session, types),
            Command::List { resource_type } => self.run_list(&session, resource_type),
        };

        result.map_err(|e| eyre!("[{}] {}", e.code(), e))
    }

    /// Load configuration and the graph snapshot.
    fn open_session(&self) -> Result<Session, AppError> {
        let config = Config::load()?;

        let path = self
            .graph
            .clone()
            .or(config.graph.path)
            .ok_or(AppError::MissingGraphPath)?;
        let snapshot = Snapshot::load(&path)?;
        tracing::info!(
            "Loaded {} nodes and {} edges",
            snapshot.graph().nodes.len(),
            snapshot.graph().edges.len()
        );

        Ok(Session {
            explorer: ExplorerService::new(Arc::new(snapshot)),
            format: self.format.unwrap_or(config.output.format),
            pretty: config.output.pretty,
        })
    }
}
