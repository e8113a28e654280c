//! Stateless operations over a single multigraph: partitioning, bilateral
//! merging, knockout, degree extraction, and null-model generation

mod bilateral;
mod degree;
mod knockout;
mod random;
mod split;

pub use bilateral::collapse_bilateral;
pub use degree::{degree_sequence, rescale_degree_sequence};
pub use knockout::knockout;
pub use random::DegreePreservingRandom;
pub use split::{split_on_edge_attribute, split_on_node_attribute, InterclassPolicy};
