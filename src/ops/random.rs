//! Degree-preserving random graph generation (null model)

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use super::degree::{degree_sequence, rescale_degree_sequence};
use crate::graph::{EdgeData, GraphError, GraphResult, MultiGraph, Node, NodeId};

/// Builder for a random directed multigraph matching a source graph's
/// per-node in/out-degree sequence
///
/// Generation uses the configuration model: one out-stub per unit of
/// out-degree, one in-stub per unit of in-degree, stubs paired uniformly at
/// random. Self-loops and parallel edges are permitted. Only topology is
/// preserved; the output carries no edge attributes. The random source is
/// always supplied by the caller.
#[derive(Debug, Clone)]
pub struct DegreePreservingRandom<'a> {
    source: &'a MultiGraph,
    keep_labels: bool,
    target_edge_count: Option<usize>,
}

impl<'a> DegreePreservingRandom<'a> {
    /// Start from the graph whose degree sequence is to be preserved
    pub fn from_graph(source: &'a MultiGraph) -> Self {
        Self {
            source,
            keep_labels: false,
            target_edge_count: None,
        }
    }

    /// Label output nodes with the source's identifiers (in sorted order)
    /// instead of anonymous integers
    pub fn keep_labels(mut self, keep: bool) -> Self {
        self.keep_labels = keep;
        self
    }

    /// Rescale the degree sequence to approximately this many edges via
    /// [`rescale_degree_sequence`]
    pub fn target_edge_count(mut self, edges: usize) -> Self {
        self.target_edge_count = Some(edges);
        self
    }

    /// Generate one random graph
    ///
    /// Fails with [`GraphError::IncompatibleDegreeSequence`] if the in- and
    /// out-degree totals disagree after any rescaling; the check runs before
    /// generation starts.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> GraphResult<MultiGraph> {
        let seq = degree_sequence(self.source);
        let ids: Vec<NodeId> = seq.keys().cloned().collect();

        let mut in_deg: BTreeMap<NodeId, usize> =
            seq.iter().map(|(id, &(i, _))| (id.clone(), i)).collect();
        let mut out_deg: BTreeMap<NodeId, usize> =
            seq.iter().map(|(id, &(_, o))| (id.clone(), o)).collect();

        if let Some(edges) = self.target_edge_count {
            in_deg = rescale_degree_sequence(&in_deg, edges, rng)?;
            out_deg = rescale_degree_sequence(&out_deg, edges, rng)?;
        }

        let in_sum: usize = in_deg.values().sum();
        let out_sum: usize = out_deg.values().sum();
        if in_sum != out_sum {
            return Err(GraphError::IncompatibleDegreeSequence { in_sum, out_sum });
        }

        let labels: Vec<NodeId> = if self.keep_labels {
            ids.clone()
        } else {
            (0..ids.len()).map(|i| NodeId::new(i.to_string())).collect()
        };

        let mut out = MultiGraph::new();
        for label in &labels {
            out.add_node(Node::new(label.clone()));
        }

        let mut out_stubs: Vec<usize> = Vec::with_capacity(out_sum);
        let mut in_stubs: Vec<usize> = Vec::with_capacity(in_sum);
        for (pos, id) in ids.iter().enumerate() {
            out_stubs.extend(std::iter::repeat(pos).take(out_deg[id]));
            in_stubs.extend(std::iter::repeat(pos).take(in_deg[id]));
        }
        in_stubs.shuffle(rng);

        for (s, t) in out_stubs.into_iter().zip(in_stubs) {
            out.add_edge(&labels[s], &labels[t], EdgeData::new());
        }

        debug!(
            nodes = out.node_count(),
            edges = out.edge_count(),
            keep_labels = self.keep_labels,
            "generated degree-preserving random graph"
        );
        Ok(out)
    }
}
