//! Bounded path enumeration between functional node classes

use petgraph::algo::all_simple_paths;
use petgraph::stable_graph::NodeIndex;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::debug;

use crate::graph::{AttrValue, GraphError, GraphResult, MultiGraph, NodeId};

/// Nodes whose attribute equals the given value
///
/// Classification, not validation: nodes lacking the attribute simply do
/// not match.
pub fn classify_nodes(g: &MultiGraph, attribute: &str, value: &str) -> BTreeSet<NodeId> {
    g.nodes()
        .filter(|node| node.get(attribute) == Some(AttrValue::String(value.to_string())))
        .map(|node| node.id.clone())
        .collect()
}

/// All bounded simple paths between two node classes
///
/// Maps each source to each target to the list of simple paths found
/// between them; a pair with no path is still recorded, with an empty
/// list, which is what the fully-connected verdict inspects.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathTable {
    table: BTreeMap<NodeId, BTreeMap<NodeId, Vec<Vec<NodeId>>>>,
}

impl PathTable {
    /// Whether every recorded (source, target) pair has at least one path
    ///
    /// An empty table is vacuously true; pre-filter to the intended classes
    /// if vacuous truth is undesired.
    pub fn is_fully_connected(&self) -> bool {
        self.table
            .values()
            .all(|targets| targets.values().all(|paths| !paths.is_empty()))
    }

    /// The paths recorded for one (source, target) pair
    pub fn paths(&self, source: &NodeId, target: &NodeId) -> Option<&[Vec<NodeId>]> {
        self.table
            .get(source)
            .and_then(|targets| targets.get(target))
            .map(Vec::as_slice)
    }

    /// Iterate all (source, target, paths) entries in sorted order
    pub fn iter(
        &self,
    ) -> impl Iterator<Item = (&NodeId, &NodeId, &Vec<Vec<NodeId>>)> + '_ {
        self.table.iter().flat_map(|(source, targets)| {
            targets.iter().map(move |(target, paths)| (source, target, paths))
        })
    }

    /// Every ordered node pair appearing consecutively in some path
    pub fn edge_pairs(&self) -> BTreeSet<(NodeId, NodeId)> {
        let mut pairs = BTreeSet::new();
        for (_, _, paths) in self.iter() {
            for path in paths {
                for hop in path.windows(2) {
                    pairs.insert((hop[0].clone(), hop[1].clone()));
                }
            }
        }
        pairs
    }

    /// Number of recorded (source, target) pairs
    pub fn pair_count(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    /// Total number of paths across all pairs
    pub fn path_count(&self) -> usize {
        self.table
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    /// Whether no pair is recorded at all
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn insert(&mut self, source: NodeId, target: NodeId, paths: Vec<Vec<NodeId>>) {
        self.table.entry(source).or_default().insert(target, paths);
    }
}

/// Enumerate all simple paths of length at most `cutoff` edges from every
/// source-class node to every target-class node
///
/// `cutoff` is the sole bound on this search (worst case exponential in
/// graph density) and is mandatory; zero is rejected. Parallel edges do not
/// duplicate paths: a path is a node sequence. A node belonging to both
/// classes records an empty path list against itself.
pub fn enumerate_paths(
    g: &MultiGraph,
    sources: &BTreeSet<NodeId>,
    targets: &BTreeSet<NodeId>,
    cutoff: usize,
) -> GraphResult<PathTable> {
    if cutoff == 0 {
        return Err(GraphError::InvalidArgument(
            "path cutoff must be at least 1 edge".to_string(),
        ));
    }

    let mut table = PathTable::default();
    for source in sources {
        for target in targets {
            let paths = if source == target {
                Vec::new()
            } else {
                simple_paths_between(g, source, target, cutoff)
            };
            table.insert(source.clone(), target.clone(), paths);
        }
    }

    debug!(
        sources = sources.len(),
        targets = targets.len(),
        cutoff,
        paths = table.path_count(),
        "enumerated bounded paths"
    );
    Ok(table)
}

fn simple_paths_between(
    g: &MultiGraph,
    source: &NodeId,
    target: &NodeId,
    cutoff: usize,
) -> Vec<Vec<NodeId>> {
    let (s, t) = match (g.node_index(source), g.node_index(target)) {
        (Some(s), Some(t)) => (s, t),
        _ => return Vec::new(),
    };

    // A path of <= cutoff edges has <= cutoff - 1 intermediate nodes.
    let mut seen: HashSet<Vec<NodeIndex>> = HashSet::new();
    let mut paths = Vec::new();
    for path in
        all_simple_paths::<Vec<NodeIndex>, _, std::hash::RandomState>(
            g.inner(),
            s,
            t,
            0,
            Some(cutoff - 1),
        )
    {
        // parallel edges make petgraph revisit the same node sequence
        if seen.insert(path.clone()) {
            paths.push(path.iter().map(|&ix| g.node_id_of(ix).clone()).collect());
        }
    }
    paths
}

/// Keep only edges appearing as a consecutive node pair in some path of
/// the table
pub fn prune_to_paths(g: &MultiGraph, table: &PathTable) -> MultiGraph {
    let keep = table.edge_pairs();
    let mut out = g.clone();

    let doomed: Vec<_> = out
        .edges()
        .filter(|e| !keep.contains(&(e.source.clone(), e.target.clone())))
        .map(|e| e.key)
        .collect();
    for key in doomed {
        out.remove_edge(key);
    }
    out
}

/// Remove every node with total degree 0
pub fn prune_isolated_nodes<E: Clone>(g: &MultiGraph<E>) -> MultiGraph<E> {
    let mut out = g.clone();
    let isolated: Vec<NodeId> = out
        .node_ids()
        .filter(|id| out.degree(id) == 0)
        .cloned()
        .collect();
    for id in &isolated {
        out.remove_node(id);
    }
    out
}
