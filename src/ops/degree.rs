//! Degree sequences and GCD-based stochastic rescaling

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;

use crate::graph::{GraphError, GraphResult, MultiGraph, NodeId};

/// Per-node (in-degree, out-degree), in sorted node order
///
/// The sorted order matters: the random-graph generator consumes this map
/// as an ordered degree list, one entry per vertex.
pub fn degree_sequence<E>(g: &MultiGraph<E>) -> BTreeMap<NodeId, (usize, usize)> {
    g.node_ids()
        .map(|id| (id.clone(), (g.in_degree(id), g.out_degree(id))))
        .collect()
}

fn gcd(a: usize, b: usize) -> usize {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Stochastically rescale a degree mapping to a target total
///
/// Reduces the degrees by their greatest common divisor, builds a multiset
/// of nodes weighted by reduced degree, and draws `sample_size` independent
/// uniform samples with replacement from it. The result preserves relative
/// degree proportions in expectation (nodes never sampled get 0); it is an
/// approximation, not an exact rescale.
pub fn rescale_degree_sequence<R: Rng>(
    degrees: &BTreeMap<NodeId, usize>,
    sample_size: usize,
    rng: &mut R,
) -> GraphResult<BTreeMap<NodeId, usize>> {
    let divisor = degrees.values().fold(0, |acc, &d| gcd(acc, d));
    if divisor == 0 {
        if sample_size == 0 {
            return Ok(degrees.keys().map(|id| (id.clone(), 0)).collect());
        }
        return Err(GraphError::InvalidArgument(
            "cannot sample from an all-zero degree sequence".to_string(),
        ));
    }

    let mut choices: Vec<&NodeId> = Vec::new();
    for (id, &reps) in degrees {
        for _ in 0..reps / divisor {
            choices.push(id);
        }
    }

    let mut counts: BTreeMap<NodeId, usize> =
        degrees.keys().map(|id| (id.clone(), 0)).collect();
    for _ in 0..sample_size {
        let picked = choices.choose(rng).expect("choices is non-empty");
        *counts.get_mut(picked).expect("all nodes pre-seeded") += 1;
    }

    Ok(counts)
}
