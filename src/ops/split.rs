//! Partitioning a connectome by edge or node category

use std::collections::BTreeMap;
use tracing::debug;

use crate::graph::{GraphError, GraphResult, MultiGraph};

/// How edges whose endpoints classify to different node classes are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterclassPolicy {
    /// Keep an edge only when both endpoints classify to the same value
    #[default]
    Strict,
    /// Additionally route each interclass edge into both endpoint classes'
    /// graphs, so either class's subnetwork shows its boundary connections
    IncludeBoth,
}

/// Group edges by the value of an edge attribute
///
/// Every observed attribute value yields one output graph carrying the full
/// node set of `g` plus exactly the edges whose attribute equals that value,
/// so composing all partitions reproduces the edge multiset of `g`. An edge
/// lacking the attribute fails the whole split.
pub fn split_on_edge_attribute(
    g: &MultiGraph,
    attribute: &str,
) -> GraphResult<BTreeMap<String, MultiGraph>> {
    let mut partitions: BTreeMap<String, MultiGraph> = BTreeMap::new();

    for edge in g.edges() {
        let value = edge.data.get(attribute).ok_or_else(|| GraphError::MissingAttribute {
            element: format!("edge {}->{}", edge.source, edge.target),
            attribute: attribute.to_string(),
        })?;

        partitions
            .entry(value.to_string())
            .or_insert_with(|| g.empty_copy())
            .add_edge(edge.source, edge.target, edge.data.clone());
    }

    debug!(
        attribute,
        partitions = partitions.len(),
        "split on edge attribute"
    );
    Ok(partitions)
}

/// Group nodes by the value of a node attribute
///
/// Every observed attribute value yields one output graph carrying the full
/// node set of `g`. With [`InterclassPolicy::Strict`] an edge lands in the
/// class graph only when both endpoints classify to that class; with
/// [`InterclassPolicy::IncludeBoth`] an edge whose endpoints disagree is
/// additionally copied into both endpoint classes' graphs. A node lacking
/// the attribute fails the whole split.
pub fn split_on_node_attribute(
    g: &MultiGraph,
    attribute: &str,
    policy: InterclassPolicy,
) -> GraphResult<BTreeMap<String, MultiGraph>> {
    let mut classes: BTreeMap<_, String> = BTreeMap::new();
    for node in g.nodes() {
        let value = node.get(attribute).ok_or_else(|| GraphError::MissingAttribute {
            element: format!("node {}", node.id),
            attribute: attribute.to_string(),
        })?;
        classes.insert(node.id.clone(), value.to_string());
    }

    let mut partitions: BTreeMap<String, MultiGraph> = BTreeMap::new();
    for class in classes.values() {
        partitions
            .entry(class.clone())
            .or_insert_with(|| g.empty_copy());
    }

    for edge in g.edges() {
        let src_class = &classes[edge.source];
        let tgt_class = &classes[edge.target];

        if src_class == tgt_class {
            partitions
                .get_mut(src_class)
                .expect("every observed class is pre-seeded")
                .add_edge(edge.source, edge.target, edge.data.clone());
        } else if policy == InterclassPolicy::IncludeBoth {
            for class in [src_class, tgt_class] {
                partitions
                    .get_mut(class)
                    .expect("every observed class is pre-seeded")
                    .add_edge(edge.source, edge.target, edge.data.clone());
            }
        }
    }

    debug!(
        attribute,
        ?policy,
        partitions = partitions.len(),
        "split on node attribute"
    );
    Ok(partitions)
}
