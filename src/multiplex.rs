//! The multiplex connectome: one whole graph, partitioned into named layers

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::graph::{
    CollapsedEdge, CollapsedGraph, EdgeData, GraphError, GraphResult, MultiGraph, NodeId,
};
use crate::ops::split_on_edge_attribute;
use crate::storage;

/// Where a multiplex's whole graph comes from
///
/// Either an in-memory graph (defensively copied) or a path to a stored
/// JSON graph document resolved by the [`storage`] module.
#[derive(Debug, Clone)]
pub enum GraphSource {
    FromGraph(MultiGraph),
    FromPath(PathBuf),
}

impl From<MultiGraph> for GraphSource {
    fn from(g: MultiGraph) -> Self {
        GraphSource::FromGraph(g)
    }
}

impl From<&Path> for GraphSource {
    fn from(p: &Path) -> Self {
        GraphSource::FromPath(p.to_path_buf())
    }
}

impl From<PathBuf> for GraphSource {
    fn from(p: PathBuf) -> Self {
        GraphSource::FromPath(p)
    }
}

/// A connectome whose edges are partitioned into named layers by an edge
/// category attribute (typically `type`: chemical vs. electrical)
///
/// Partitions are computed eagerly at construction and are snapshots:
/// every partition shares the whole graph's full node set, and the whole
/// graph's edge multiset is exactly the disjoint union of the partitions'.
/// All transformations return new graphs; neither the whole graph nor any
/// partition is ever mutated after construction.
#[derive(Debug, Clone)]
pub struct Multiplex {
    whole: MultiGraph,
    category: String,
    partitions: BTreeMap<String, MultiGraph>,
}

impl Multiplex {
    /// Build a multiplex from a graph source, partitioning on `category`
    ///
    /// Fails with [`GraphError::MissingAttribute`] if any edge lacks the
    /// category attribute, or with a storage error if a path source cannot
    /// be loaded.
    pub fn new(source: impl Into<GraphSource>, category: &str) -> GraphResult<Self> {
        let whole = match source.into() {
            GraphSource::FromGraph(g) => g,
            GraphSource::FromPath(path) => storage::load_graph(&path)?,
        };
        let partitions = split_on_edge_attribute(&whole, category)?;

        info!(
            category,
            partitions = partitions.len(),
            nodes = whole.node_count(),
            edges = whole.edge_count(),
            "built multiplex"
        );
        Ok(Self {
            whole,
            category: category.to_string(),
            partitions,
        })
    }

    /// The whole graph all partitions were derived from
    pub fn whole(&self) -> &MultiGraph {
        &self.whole
    }

    /// The edge attribute this multiplex is partitioned on
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The known partition names, in sorted order
    pub fn partition_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.partitions.keys().map(String::as_str)
    }

    /// Direct lookup of one partition
    pub fn subgraph(&self, name: &str) -> GraphResult<&MultiGraph> {
        self.partitions
            .get(name)
            .ok_or_else(|| GraphError::UnknownPartition(name.to_string()))
    }

    /// Union of the named partitions' edge multisets over the shared node set
    ///
    /// With no names, composes all partitions (reproducing the whole graph's
    /// edge multiset). Repeated names are composed once: a partition's edges
    /// are never double-counted.
    pub fn compose(&self, names: &[&str]) -> GraphResult<MultiGraph> {
        let mut composed: MultiGraph = self.whole.empty_copy();
        for name in self.resolve(names)? {
            for edge in self.partitions[name].edges() {
                composed.add_edge(edge.source, edge.target, edge.data.clone());
            }
        }
        Ok(composed)
    }

    /// Compose the named partitions, then merge all parallel edges per
    /// ordered pair into one aggregated edge
    ///
    /// Each output edge carries the constituents' summed weight, the first
    /// encountered non-null length, and per-key provenance lists; see
    /// [`CollapsedEdge::aggregate`].
    pub fn collapse(&self, names: &[&str]) -> GraphResult<CollapsedGraph> {
        let composed = self.compose(names)?;

        let mut groups: BTreeMap<(NodeId, NodeId), Vec<EdgeData>> = BTreeMap::new();
        for edge in composed.edges() {
            groups
                .entry((edge.source.clone(), edge.target.clone()))
                .or_default()
                .push(edge.data.clone());
        }

        let mut collapsed: CollapsedGraph = composed.empty_copy();
        for ((source, target), constituents) in &groups {
            collapsed.add_edge(source, target, CollapsedEdge::aggregate(constituents));
        }
        Ok(collapsed)
    }

    /// Split every weighted edge into that many unit-weight parallel edges
    ///
    /// Operates on the whole graph when no names are given, otherwise on the
    /// composition of the named partitions. An edge of weight `w` becomes
    /// `w` parallel edges of weight 1 with all other attributes copied; a
    /// missing weight means 1. Non-positive or fractional weights are
    /// rejected. The full node set is retained regardless of isolated nodes.
    pub fn expand(&self, names: &[&str]) -> GraphResult<MultiGraph> {
        let g = if names.is_empty() {
            self.whole.clone()
        } else {
            self.compose(names)?
        };

        let mut expanded: MultiGraph = g.empty_copy();
        for edge in g.edges() {
            let weight = edge.data.effective_weight();
            if weight <= 0.0 || weight.fract() != 0.0 {
                return Err(GraphError::InvalidArgument(format!(
                    "cannot expand edge {}->{} with weight {weight}: expected a positive integer",
                    edge.source, edge.target
                )));
            }

            let mut unit = edge.data.clone();
            unit.weight = Some(1.0);
            for _ in 0..weight as usize {
                expanded.add_edge(edge.source, edge.target, unit.clone());
            }
        }
        Ok(expanded)
    }

    /// Resolve requested partition names: default to all, drop repeats,
    /// reject unknown names
    fn resolve<'a>(&'a self, names: &[&'a str]) -> GraphResult<Vec<&'a str>> {
        if names.is_empty() {
            return Ok(self.partitions.keys().map(String::as_str).collect());
        }
        let mut seen = BTreeSet::new();
        let mut resolved = Vec::new();
        for &name in names {
            if !self.partitions.contains_key(name) {
                return Err(GraphError::UnknownPartition(name.to_string()));
            }
            if seen.insert(name) {
                resolved.push(name);
            }
        }
        Ok(resolved)
    }
}
