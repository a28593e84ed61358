//! Read-side services over a resource graph.
//!
//! The free functions in each module are pure transformations of a graph
//! snapshot; [`ExplorerService`] bundles them over one shared, indexed
//! snapshot.

mod explorer;
pub mod inventory;
pub mod relations;
pub mod rules;
pub mod subgraph;

pub use explorer::ExplorerService;
pub use inventory::{group_by_type, list_type};
pub use relations::{classify, direct_relations};
pub use rules::{parse_rules, rule_rows};
pub use subgraph::extract;
