//! Merging left/right homologue pairs

use std::collections::BTreeMap;
use tracing::debug;

use crate::graph::{MultiGraph, Node, NodeId, Side};

/// Merge every mirrored `L`/`R` node pair into one node named by the
/// shared prefix
///
/// Only nodes whose contralateral homologue actually exists are merged;
/// everything else is kept unchanged. The merged node keeps the attributes
/// of `keep`'s original node. All edges are re-pointed at merged names,
/// which can create self-loops (mirror-symmetric connections) and duplicate
/// parallel edges; both are preserved, never deduplicated.
pub fn collapse_bilateral(g: &MultiGraph, keep: Side) -> MultiGraph {
    let mut renames: BTreeMap<NodeId, NodeId> = BTreeMap::new();
    let mut out = MultiGraph::new();
    let mut merged_pairs = 0usize;

    for node in g.nodes() {
        let mirrored = node
            .id
            .mirror()
            .map(|m| g.contains_node(&m))
            .unwrap_or(false);

        if mirrored {
            let merged = NodeId::new(node.id.base());
            renames.insert(node.id.clone(), merged.clone());
            if node.id.side() == Some(keep) {
                merged_pairs += 1;
                out.add_node(Node {
                    id: merged,
                    node_type: node.node_type.clone(),
                    extra: node.extra.clone(),
                });
            }
        } else {
            renames.insert(node.id.clone(), node.id.clone());
            out.add_node(node.clone());
        }
    }

    for edge in g.edges() {
        out.add_edge(&renames[edge.source], &renames[edge.target], edge.data.clone());
    }

    debug!(merged_pairs, keep = %keep, "collapsed bilateral pairs");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeData;

    #[test]
    fn mirrored_pair_merges_into_self_loop() {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("AVAL").with_type("inter"));
        g.add_node(Node::new("AVAR").with_type("motor"));
        g.add_edge(&"AVAL".into(), &"AVAR".into(), EdgeData::new().with_weight(2.0));

        let merged = collapse_bilateral(&g, Side::Left);

        assert_eq!(merged.node_count(), 1);
        let ava = merged.node(&"AVA".into()).unwrap();
        // attributes come from the kept side's original node
        assert_eq!(ava.node_type.as_deref(), Some("inter"));

        let loops = merged.edges_between(&"AVA".into(), &"AVA".into());
        assert_eq!(loops.len(), 1);
        assert_eq!(loops[0].1.weight, Some(2.0));
    }

    #[test]
    fn keep_right_keeps_right_attributes() {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("AVAL").with_type("inter"));
        g.add_node(Node::new("AVAR").with_type("motor"));

        let merged = collapse_bilateral(&g, Side::Right);
        assert_eq!(
            merged.node(&"AVA".into()).unwrap().node_type.as_deref(),
            Some("motor")
        );
    }

    #[test]
    fn unpaired_nodes_survive_unchanged() {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("AVAL"));
        g.add_node(Node::new("AVAR"));
        g.add_node(Node::new("AQR")); // ends in R but AQL does not exist
        g.add_node(Node::new("PVT"));
        g.add_edge(&"AQR".into(), &"PVT".into(), EdgeData::new());

        let merged = collapse_bilateral(&g, Side::Left);

        assert!(merged.contains_node(&"AQR".into()));
        assert!(merged.contains_node(&"PVT".into()));
        assert!(merged.contains_node(&"AVA".into()));
        assert_eq!(merged.node_count(), 3);
        assert_eq!(merged.edges_between(&"AQR".into(), &"PVT".into()).len(), 1);
    }

    #[test]
    fn symmetric_connections_become_parallel_duplicates() {
        let mut g = MultiGraph::new();
        for id in ["AVAL", "AVAR", "PVCL", "PVCR"] {
            g.add_node(Node::new(id));
        }
        g.add_edge(&"PVCL".into(), &"AVAL".into(), EdgeData::new());
        g.add_edge(&"PVCR".into(), &"AVAR".into(), EdgeData::new());

        let merged = collapse_bilateral(&g, Side::Left);
        // both symmetric edges survive as parallel PVC->AVA copies
        assert_eq!(merged.edges_between(&"PVC".into(), &"AVA".into()).len(), 2);
    }
}
