//! Inventory subcommand handlers.

use crate::error::AppError;
use crate::models::ResourceType;

use super::{App, Session};

impl App {
    /// Print resources grouped by type.
    pub(super) fn run_inventory(&self, session: &Session, types: &[String]) -> Result<(), AppError> {
        let filter: Vec<ResourceType> = types
            .iter()
            .map(|t| ResourceType::from(t.to_lowercase()))
            .collect();
        session.print(session.explorer.inventory(&filter))
    }

    /// Print the id/name/status listing of one resource type.
    pub(super) fn run_list(&self, session: &Session, resource_type: &str) -> Result<(), AppError> {
        let resource_type = ResourceType::from(resource_type.to_lowercase());
        let rows = session.explorer.list(&resource_type);
        if rows.is_empty() {
            tracing::info!("No resources of type '{}' found", resource_type);
        }
        session.print(rows)
    }
}
