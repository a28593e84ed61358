//! Graph access layer.
//!
//! Wraps a [`Graph`](crate::models::Graph) snapshot with an adjacency index so
//! the view and relation services can walk a node's edges without scanning
//! the whole edge list.

mod index;

pub use index::{GraphIndex, IndexedGraph};
