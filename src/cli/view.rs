//! View subcommand handler.

use crate::error::AppError;

use super::{App, Session};

impl App {
    /// Print the neighborhood view around `focus`, or the whole graph.
    pub(super) fn run_view(&self, session: &Session, focus: Option<&str>) -> Result<(), AppError> {
        let view = session.explorer.view(focus);
        if let Some(id) = focus {
            if view.nodes.is_empty() {
                tracing::warn!("Resource {} is not in the graph; view is empty", id);
            }
        }
        session.print(view)
    }
}
