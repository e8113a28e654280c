//! Directed attributed multigraph over a petgraph backbone
//!
//! The structure itself is petgraph's `StableDiGraph`: parallel edges are
//! first-class, and stable edge indices serve as the multiplicity keys that
//! distinguish them. This wrapper adds addressing by neuron name and
//! deterministic (sorted) node iteration, which the degree sampler and the
//! partition maps rely on.

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Direction;
use std::collections::BTreeMap;

use super::edge::{CollapsedEdge, EdgeData};
use super::node::{Node, NodeId};

/// Multiplicity key distinguishing parallel edges between one ordered pair
pub type EdgeKey = petgraph::stable_graph::EdgeIndex;

/// A directed multigraph of neurons and attributed connections
///
/// `E` is the edge payload: [`EdgeData`] for raw connectomes, or
/// [`CollapsedEdge`] for the output of a collapse (see [`CollapsedGraph`]).
/// Every edge's endpoints are always members of the node set; adding an
/// edge inserts missing endpoints as bare nodes.
#[derive(Debug, Clone)]
pub struct MultiGraph<E = EdgeData> {
    graph: StableDiGraph<Node, E>,
    index: BTreeMap<NodeId, NodeIndex>,
}

/// A collapse result: at most one edge per ordered pair, aggregated attributes
pub type CollapsedGraph = MultiGraph<CollapsedEdge>;

/// Borrowed view of one edge: endpoints, multiplicity key, and attributes
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a, E> {
    pub source: &'a NodeId,
    pub target: &'a NodeId,
    pub key: EdgeKey,
    pub data: &'a E,
}

impl<E> Default for MultiGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MultiGraph<E> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::default(),
            index: BTreeMap::new(),
        }
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.index.len()
    }

    /// Number of edges, counting parallel edges individually
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Whether a node with this identifier exists
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Insert a node, replacing any existing node with the same identifier
    pub fn add_node(&mut self, node: Node) {
        if let Some(&ix) = self.index.get(&node.id) {
            self.graph[ix] = node;
        } else {
            let id = node.id.clone();
            let ix = self.graph.add_node(node);
            self.index.insert(id, ix);
        }
    }

    /// Get a node by identifier
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).map(|&ix| &self.graph[ix])
    }

    /// Get a mutable reference to a node
    pub fn node_mut(&mut self, id: &NodeId) -> Option<&mut Node> {
        self.index.get(id).map(|&ix| &mut self.graph[ix])
    }

    /// Iterate nodes in sorted identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> + '_ {
        self.index.values().map(move |&ix| &self.graph[ix])
    }

    /// Iterate node identifiers in sorted order
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> + '_ {
        self.index.keys()
    }

    /// Insert an edge, creating bare endpoint nodes as needed
    ///
    /// Returns the new edge's multiplicity key. Parallel edges between the
    /// same ordered pair are never merged.
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId, data: E) -> EdgeKey {
        let s = self.ensure_node(source);
        let t = self.ensure_node(target);
        self.graph.add_edge(s, t, data)
    }

    fn ensure_node(&mut self, id: &NodeId) -> NodeIndex {
        if let Some(&ix) = self.index.get(id) {
            ix
        } else {
            let ix = self.graph.add_node(Node::new(id.clone()));
            self.index.insert(id.clone(), ix);
            ix
        }
    }

    /// Iterate all edges in insertion order
    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_, E>> + '_ {
        self.graph.edge_references().map(move |e| EdgeView {
            source: &self.graph[e.source()].id,
            target: &self.graph[e.target()].id,
            key: e.id(),
            data: e.weight(),
        })
    }

    /// All parallel edges between one ordered pair
    pub fn edges_between(&self, source: &NodeId, target: &NodeId) -> Vec<(EdgeKey, &E)> {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&s), Some(&t)) => self
                .graph
                .edges_directed(s, Direction::Outgoing)
                .filter(|e| e.target() == t)
                .map(|e| (e.id(), e.weight()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Get an edge's attributes by multiplicity key
    pub fn edge(&self, key: EdgeKey) -> Option<&E> {
        self.graph.edge_weight(key)
    }

    /// The (source, target) identifiers of an edge
    pub fn edge_endpoints(&self, key: EdgeKey) -> Option<(&NodeId, &NodeId)> {
        self.graph
            .edge_endpoints(key)
            .map(|(s, t)| (&self.graph[s].id, &self.graph[t].id))
    }

    /// Remove an edge, returning its attributes
    pub fn remove_edge(&mut self, key: EdgeKey) -> Option<E> {
        self.graph.remove_edge(key)
    }

    /// Remove a node and all its incident edges
    pub fn remove_node(&mut self, id: &NodeId) -> Option<Node> {
        let ix = self.index.remove(id)?;
        self.graph.remove_node(ix)
    }

    /// All multiplicity keys, in insertion order
    pub fn edge_keys(&self) -> Vec<EdgeKey> {
        self.graph.edge_indices().collect()
    }

    /// In-degree of a node (0 when absent)
    pub fn in_degree(&self, id: &NodeId) -> usize {
        self.index
            .get(id)
            .map(|&ix| self.graph.edges_directed(ix, Direction::Incoming).count())
            .unwrap_or(0)
    }

    /// Out-degree of a node (0 when absent)
    pub fn out_degree(&self, id: &NodeId) -> usize {
        self.index
            .get(id)
            .map(|&ix| self.graph.edges_directed(ix, Direction::Outgoing).count())
            .unwrap_or(0)
    }

    /// Total degree of a node (0 when absent)
    pub fn degree(&self, id: &NodeId) -> usize {
        self.in_degree(id) + self.out_degree(id)
    }

    /// Copy of this graph's full node set with no edges
    ///
    /// The edge payload type of the copy is free, which is how a collapse
    /// starts from the composed graph's node set.
    pub fn empty_copy<F>(&self) -> MultiGraph<F> {
        let mut out = MultiGraph::new();
        for node in self.nodes() {
            out.add_node(node.clone());
        }
        out
    }

    pub(crate) fn inner(&self) -> &StableDiGraph<Node, E> {
        &self.graph
    }

    pub(crate) fn node_index(&self, id: &NodeId) -> Option<NodeIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn node_id_of(&self, ix: NodeIndex) -> &NodeId {
        &self.graph[ix].id
    }
}
