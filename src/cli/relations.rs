//! Relation subcommand handlers: relations, neighbors, show and rules.

use crate::error::AppError;

use super::{App, Session};

impl App {
    /// Print the relation bundle of a resource.
    pub(super) fn run_relations(&self, session: &Session, id: &str) -> Result<(), AppError> {
        // Unknown ids classify to an empty bundle; report them instead.
        session.explorer.node(id)?;
        session.print(session.explorer.relations(id))
    }

    /// Print every edge touching a resource.
    pub(super) fn run_neighbors(&self, session: &Session, id: &str) -> Result<(), AppError> {
        session.print(session.explorer.neighbors(id))
    }

    /// Print a single resource.
    pub(super) fn run_show(&self, session: &Session, id: &str) -> Result<(), AppError> {
        let node = session.explorer.node(id)?;
        session.print(node.clone())
    }

    /// Print the rule table of a security group.
    pub(super) fn run_rules(&self, session: &Session, id: &str) -> Result<(), AppError> {
        session.print(session.explorer.rules(id)?)
    }
}
