//! Receptor/transmitter knockout: modelling genetic or pharmacological ablation

use tracing::debug;

use crate::graph::{GraphError, GraphResult, MultiGraph};

/// Remove every edge whose receptor or transmitter matches a selector
///
/// An edge is dropped when its `receptor` equals `receptor` OR its
/// `transmitter` equals `transmitter`; an edge lacking the attribute is
/// never matched by that selector. At least one selector is required.
pub fn knockout(
    g: &MultiGraph,
    receptor: Option<&str>,
    transmitter: Option<&str>,
) -> GraphResult<MultiGraph> {
    if receptor.is_none() && transmitter.is_none() {
        return Err(GraphError::InvalidArgument(
            "must select a receptor or transmitter to knock out".to_string(),
        ));
    }

    let mut out = g.empty_copy();
    let mut dropped = 0usize;

    for edge in g.edges() {
        let receptor_hit = match (receptor, edge.data.receptor.as_deref()) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        };
        let transmitter_hit = match (transmitter, edge.data.transmitter.as_deref()) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        };

        if receptor_hit || transmitter_hit {
            dropped += 1;
            continue;
        }
        out.add_edge(edge.source, edge.target, edge.data.clone());
    }

    debug!(?receptor, ?transmitter, dropped, "knockout");
    Ok(out)
}
