//! Connectivity pruning and bounded path enumeration

mod contact;
mod paths;

pub use contact::{contact_numbers, prune_by_contact_threshold};
pub use paths::{
    classify_nodes, enumerate_paths, prune_isolated_nodes, prune_to_paths, PathTable,
};

use crate::graph::{GraphResult, MultiGraph};

/// The Izquierdo & Beer circuit-reduction pipeline
///
/// Threshold-prunes at a contact number of 2, then enumerates paths from
/// `type=sensory` to `type=motor` neurons with a cutoff of 3 edges. One
/// concrete end-to-end scenario from the C. elegans literature, not a
/// generic API.
pub fn izq_beer_constraints(g: &MultiGraph) -> GraphResult<(MultiGraph, PathTable)> {
    let pruned = prune_by_contact_threshold(g, 2.0);
    let sensory = classify_nodes(&pruned, "type", "sensory");
    let motor = classify_nodes(&pruned, "type", "motor");
    let table = enumerate_paths(&pruned, &sensory, &motor, 3)?;
    Ok((pruned, table))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{EdgeData, Node};

    #[test]
    fn izq_beer_prunes_then_enumerates() {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("s1").with_type("sensory"));
        g.add_node(Node::new("i1").with_type("inter"));
        g.add_node(Node::new("m1").with_type("motor"));
        // strong two-hop route
        g.add_edge(&"s1".into(), &"i1".into(), EdgeData::new().with_weight(2.0));
        g.add_edge(&"i1".into(), &"m1".into(), EdgeData::new().with_weight(3.0));
        // weak direct contact, pruned before enumeration
        g.add_edge(&"s1".into(), &"m1".into(), EdgeData::new().with_weight(1.0));

        let (pruned, table) = izq_beer_constraints(&g).unwrap();

        assert_eq!(pruned.edge_count(), 2);
        let paths = table.paths(&"s1".into(), &"m1".into()).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3); // s1 -> i1 -> m1
        assert!(table.is_fully_connected());
    }
}
