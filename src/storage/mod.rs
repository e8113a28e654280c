//! JSON persistence of a connectome graph
//!
//! The document layout is `{"nodes": {id: attrs}, "edges": {src: {tgt:
//! {multiplicity_key: attrs}}}}` with sorted keys, matching how the
//! surrounding tooling persists connectome snapshots. Decoding validates
//! well-formedness: a malformed document is a [`StorageError::Format`],
//! distinguished from a missing file ([`StorageError::NotFound`]).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

use crate::graph::{AttrValue, EdgeData, MultiGraph, Node, NodeId};

/// Errors that can occur while loading or saving graph documents
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("graph file not found: {0}")]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("malformed graph document: {0}")]
    Format(#[from] serde_json::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Serialize, Deserialize)]
struct GraphDocument {
    nodes: BTreeMap<NodeId, NodeRecord>,
    edges: BTreeMap<NodeId, BTreeMap<NodeId, BTreeMap<String, EdgeData>>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct NodeRecord {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    node_type: Option<String>,
    #[serde(flatten)]
    extra: BTreeMap<String, AttrValue>,
}

/// Encode a graph as a pretty-printed JSON document
pub fn to_json_string(g: &MultiGraph) -> StorageResult<String> {
    let mut nodes = BTreeMap::new();
    for node in g.nodes() {
        nodes.insert(
            node.id.clone(),
            NodeRecord {
                node_type: node.node_type.clone(),
                extra: node.extra.clone(),
            },
        );
    }

    let mut edges: BTreeMap<NodeId, BTreeMap<NodeId, BTreeMap<String, EdgeData>>> =
        BTreeMap::new();
    for edge in g.edges() {
        let keyed = edges
            .entry(edge.source.clone())
            .or_default()
            .entry(edge.target.clone())
            .or_default();
        // multiplicity keys are renumbered 0..n per ordered pair
        keyed.insert(keyed.len().to_string(), edge.data.clone());
    }

    Ok(serde_json::to_string_pretty(&GraphDocument { nodes, edges })?)
}

/// Decode a graph from a JSON document string
pub fn from_json_str(s: &str) -> StorageResult<MultiGraph> {
    let doc: GraphDocument = serde_json::from_str(s)?;

    let mut g = MultiGraph::new();
    for (id, record) in doc.nodes {
        g.add_node(Node {
            id,
            node_type: record.node_type,
            extra: record.extra,
        });
    }
    for (source, targets) in doc.edges {
        for (target, keyed) in targets {
            // BTreeMap ordering makes multiplicity insertion deterministic
            for data in keyed.into_values() {
                g.add_edge(&source, &target, data);
            }
        }
    }
    Ok(g)
}

/// Save a graph document to a file
pub fn save_graph(g: &MultiGraph, path: &Path) -> StorageResult<()> {
    fs::write(path, to_json_string(g)?)?;
    debug!(path = %path.display(), nodes = g.node_count(), edges = g.edge_count(), "saved graph");
    Ok(())
}

/// Load a graph document from a file
///
/// A missing file is [`StorageError::NotFound`]; a present but malformed
/// file is [`StorageError::Format`].
pub fn load_graph(path: &Path) -> StorageResult<MultiGraph> {
    let raw = fs::read_to_string(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            StorageError::NotFound(path.to_path_buf())
        } else {
            StorageError::Io(e)
        }
    })?;
    let g = from_json_str(&raw)?;
    debug!(path = %path.display(), nodes = g.node_count(), edges = g.edge_count(), "loaded graph");
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> MultiGraph {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("s1").with_type("sensory"));
        g.add_node(Node::new("m1").with_type("motor"));
        g.add_node(Node::new("alone"));
        g.add_edge(
            &"s1".into(),
            &"m1".into(),
            EdgeData::new()
                .with_type("chemical")
                .with_weight(2.0)
                .with_receptor("ACh"),
        );
        g.add_edge(
            &"s1".into(),
            &"m1".into(),
            EdgeData::new().with_type("electrical").with_weight(1.0),
        );
        g
    }

    #[test]
    fn json_round_trip_preserves_nodes_edges_and_attributes() {
        let g = sample_graph();
        let restored = from_json_str(&to_json_string(&g).unwrap()).unwrap();

        assert_eq!(restored.node_count(), g.node_count());
        assert_eq!(restored.edge_count(), g.edge_count());
        assert_eq!(
            restored.node(&"s1".into()).unwrap().node_type.as_deref(),
            Some("sensory")
        );

        let mut types: Vec<_> = restored
            .edges_between(&"s1".into(), &"m1".into())
            .into_iter()
            .filter_map(|(_, data)| data.edge_type.clone())
            .collect();
        types.sort();
        assert_eq!(types, ["chemical", "electrical"]);
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connectome.json");

        let g = sample_graph();
        save_graph(&g, &path).unwrap();
        let restored = load_graph(&path).unwrap();

        assert_eq!(restored.node_count(), 3);
        assert_eq!(restored.edge_count(), 2);
        assert!(restored.contains_node(&"alone".into()));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_graph(Path::new("/nonexistent/connectome.json")).unwrap_err();
        assert!(matches!(err, StorageError::NotFound(_)));
    }

    #[test]
    fn malformed_document_is_a_format_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"nodes\": 7}").unwrap();

        let err = load_graph(&path).unwrap_err();
        assert!(matches!(err, StorageError::Format(_)));
    }

    #[test]
    fn extra_attributes_survive_the_round_trip() {
        let mut g = MultiGraph::new();
        g.add_node(Node::new("n").with_attr("ganglion", AttrValue::from("lateral")));
        g.add_edge(
            &"n".into(),
            &"n".into(),
            EdgeData::new().with_attr("evidence", AttrValue::Int(3)),
        );

        let restored = from_json_str(&to_json_string(&g).unwrap()).unwrap();
        assert_eq!(
            restored.node(&"n".into()).unwrap().get("ganglion"),
            Some(AttrValue::from("lateral"))
        );
        let loops = restored.edges_between(&"n".into(), &"n".into());
        assert_eq!(loops[0].1.get("evidence"), Some(AttrValue::Int(3)));
    }
}
