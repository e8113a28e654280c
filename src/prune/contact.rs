//! Contact-number pruning: dropping weakly connected node pairs

use std::collections::BTreeMap;
use tracing::debug;

use crate::graph::{MultiGraph, NodeId};

/// Summed weight of all parallel edges per ordered node pair
///
/// An edge with no recorded weight contributes 1.
pub fn contact_numbers(g: &MultiGraph) -> BTreeMap<(NodeId, NodeId), f64> {
    let mut contacts: BTreeMap<(NodeId, NodeId), f64> = BTreeMap::new();
    for edge in g.edges() {
        *contacts
            .entry((edge.source.clone(), edge.target.clone()))
            .or_insert(0.0) += edge.data.effective_weight();
    }
    contacts
}

/// Drop every edge of any ordered pair whose contact number is below
/// `minimum`
///
/// The decision is per pair and all-or-nothing: a pair at or above the
/// threshold keeps every parallel edge unmodified, a pair below it loses
/// them all. Applying the same threshold twice changes nothing.
pub fn prune_by_contact_threshold(g: &MultiGraph, minimum: f64) -> MultiGraph {
    let contacts = contact_numbers(g);

    let mut out = g.empty_copy();
    let mut dropped = 0usize;
    for edge in g.edges() {
        let contact = contacts[&(edge.source.clone(), edge.target.clone())];
        if contact >= minimum {
            out.add_edge(edge.source, edge.target, edge.data.clone());
        } else {
            dropped += 1;
        }
    }

    debug!(minimum, dropped, kept = out.edge_count(), "contact threshold prune");
    out
}
