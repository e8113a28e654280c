//! Synaptome: Multiplex Connectome Analysis
//!
//! A directed multigraph model of a connectome, partitioned by connection
//! modality (chemical synapses, electrical gap junctions) with operations
//! for composing, collapsing, and expanding those layers, pruning by
//! contact strength or path membership, bilateral merging, receptor and
//! transmitter knockout, and degree-preserving random rewiring.
//!
//! # Core Concepts
//!
//! - **MultiGraph**: directed graph where parallel edges between the same
//!   neuron pair are first-class, each carrying its own attributes
//! - **Multiplex**: a whole graph held together with its per-modality
//!   partitions, kept consistent as one unit
//! - **Pruning**: reductions that drop weak contacts or everything outside
//!   a set of bounded sensory-to-motor paths
//!
//! # Example
//!
//! ```
//! use synaptome::{EdgeData, Multiplex, MultiGraph};
//!
//! let mut graph = MultiGraph::new();
//! graph.add_edge(
//!     &"AVAL".into(),
//!     &"AVBR".into(),
//!     EdgeData::new().with_type("chemical").with_weight(2.0),
//! );
//! let plex = Multiplex::new(graph, "type").unwrap();
//! let layers: Vec<&str> = plex.partition_names().collect();
//! assert_eq!(layers, ["chemical"]);
//! ```

mod graph;
pub mod multiplex;
pub mod ops;
pub mod prune;
pub mod storage;

pub use graph::{
    AttrValue, CollapsedEdge, CollapsedGraph, EdgeData, EdgeKey, EdgeView, GraphError,
    GraphResult, MultiGraph, Node, NodeId, Side,
};
pub use multiplex::{GraphSource, Multiplex};
pub use ops::{
    collapse_bilateral, degree_sequence, knockout, rescale_degree_sequence,
    split_on_edge_attribute, split_on_node_attribute, DegreePreservingRandom,
    InterclassPolicy,
};
pub use prune::{
    classify_nodes, contact_numbers, enumerate_paths, izq_beer_constraints,
    prune_by_contact_threshold, prune_isolated_nodes, prune_to_paths, PathTable,
};
pub use storage::{load_graph, save_graph, StorageError, StorageResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
