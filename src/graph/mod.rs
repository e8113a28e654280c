//! Core graph data structures

mod edge;
mod error;
mod multigraph;
mod node;

#[cfg(test)]
mod tests;

pub use edge::{CollapsedEdge, EdgeData};
pub use error::{GraphError, GraphResult};
pub use multigraph::{CollapsedGraph, EdgeKey, EdgeView, MultiGraph};
pub use node::{AttrValue, Node, NodeId, Side};
