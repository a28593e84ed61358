//! Domain models for the resource graph and the views derived from it.

mod graph;
mod resource;
mod rule;
mod view;

pub use graph::{Edge, Graph, Node};
pub use resource::ResourceType;
pub use rule::{RuleRow, SecurityGroupRule};
pub use view::{
    DirectRelation, Direction, PortRelation, RelationBundle, ResourceGroup, ResourceRow,
    SubgraphView, ViewLink, ViewNode,
};
