//! Tests for the core graph model

use super::*;

#[test]
fn node_id_bilateral_helpers() {
    let aval = NodeId::from("AVAL");
    assert_eq!(aval.side(), Some(Side::Left));
    assert_eq!(aval.base(), "AVA");
    assert_eq!(aval.mirror(), Some(NodeId::from("AVAR")));

    let pvt = NodeId::from("PVT");
    assert_eq!(pvt.side(), None);
    assert_eq!(pvt.base(), "PVT");
    assert_eq!(pvt.mirror(), None);

    // a bare one-character name is not a suffix
    let just_l = NodeId::from("L");
    assert_eq!(just_l.side(), None);
    assert_eq!(just_l.mirror(), None);
}

#[test]
fn side_parsing() {
    assert_eq!("L".parse::<Side>().unwrap(), Side::Left);
    assert_eq!("R".parse::<Side>().unwrap(), Side::Right);
    assert!(matches!(
        "X".parse::<Side>(),
        Err(GraphError::InvalidArgument(_))
    ));
    assert_eq!(Side::Left.opposite(), Side::Right);
}

#[test]
fn node_attribute_access_is_uniform() {
    let node = Node::new("ASEL")
        .with_type("sensory")
        .with_attr("ganglion", AttrValue::from("lateral"));

    assert_eq!(node.get("type"), Some(AttrValue::from("sensory")));
    assert_eq!(node.get("ganglion"), Some(AttrValue::from("lateral")));
    assert_eq!(node.get("missing"), None);

    let attrs = node.attributes();
    assert_eq!(attrs.len(), 2);
    assert!(attrs.contains_key("type"));
}

#[test]
fn edge_attribute_access_is_uniform() {
    let data = EdgeData::new()
        .with_weight(2.0)
        .with_type("chemical")
        .with_attr("evidence", AttrValue::Int(3));

    assert_eq!(data.get("weight"), Some(AttrValue::Float(2.0)));
    assert_eq!(data.get("type"), Some(AttrValue::from("chemical")));
    assert_eq!(data.get("evidence"), Some(AttrValue::Int(3)));
    assert_eq!(data.get("receptor"), None);

    let keys: Vec<String> = data.keys().into_iter().collect();
    assert_eq!(keys, ["evidence", "type", "weight"]);
}

#[test]
fn effective_weight_defaults_to_one() {
    assert_eq!(EdgeData::new().effective_weight(), 1.0);
    assert_eq!(EdgeData::new().with_weight(4.0).effective_weight(), 4.0);
}

#[test]
fn parallel_edges_are_kept_distinct() {
    let mut g = MultiGraph::new();
    let k1 = g.add_edge(&"a".into(), &"b".into(), EdgeData::new().with_weight(1.0));
    let k2 = g.add_edge(&"a".into(), &"b".into(), EdgeData::new().with_weight(2.0));

    assert_ne!(k1, k2);
    assert_eq!(g.edge_count(), 2);
    assert_eq!(g.edges_between(&"a".into(), &"b".into()).len(), 2);

    g.remove_edge(k1);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edge(k2).unwrap().weight, Some(2.0));
}

#[test]
fn adding_an_edge_inserts_missing_endpoints() {
    let mut g = MultiGraph::new();
    g.add_edge(&"x".into(), &"y".into(), EdgeData::new());
    assert!(g.contains_node(&"x".into()));
    assert!(g.contains_node(&"y".into()));
    assert_eq!(g.node_count(), 2);
}

#[test]
fn node_iteration_is_sorted() {
    let mut g: MultiGraph<EdgeData> = MultiGraph::new();
    for id in ["m1", "a2", "z9", "a1"] {
        g.add_node(Node::new(id));
    }
    let ids: Vec<&str> = g.node_ids().map(NodeId::as_str).collect();
    assert_eq!(ids, ["a1", "a2", "m1", "z9"]);
}

#[test]
fn removing_a_node_removes_incident_edges() {
    let mut g = MultiGraph::new();
    g.add_edge(&"a".into(), &"b".into(), EdgeData::new());
    g.add_edge(&"b".into(), &"c".into(), EdgeData::new());
    g.add_edge(&"c".into(), &"a".into(), EdgeData::new());

    g.remove_node(&"b".into());
    assert_eq!(g.node_count(), 2);
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.degree(&"b".into()), 0);
}

#[test]
fn degrees_count_parallel_edges_and_self_loops() {
    let mut g = MultiGraph::new();
    g.add_edge(&"a".into(), &"a".into(), EdgeData::new());
    g.add_edge(&"a".into(), &"b".into(), EdgeData::new());
    g.add_edge(&"a".into(), &"b".into(), EdgeData::new());

    assert_eq!(g.out_degree(&"a".into()), 3);
    assert_eq!(g.in_degree(&"a".into()), 1);
    assert_eq!(g.degree(&"a".into()), 4);
    assert_eq!(g.degree(&"missing".into()), 0);
}

#[test]
fn empty_copy_keeps_nodes_and_attributes_only() {
    let mut g = MultiGraph::new();
    g.add_node(Node::new("a").with_type("sensory"));
    g.add_edge(&"a".into(), &"b".into(), EdgeData::new());

    let copy: MultiGraph = g.empty_copy();
    assert_eq!(copy.node_count(), 2);
    assert_eq!(copy.edge_count(), 0);
    assert_eq!(
        copy.node(&"a".into()).unwrap().node_type.as_deref(),
        Some("sensory")
    );
}

#[test]
fn collapsed_edge_aggregation() {
    let edges = [
        EdgeData::new().with_weight(2.0).with_type("chemical"),
        EdgeData::new().with_type("electrical").with_length(4.5),
        EdgeData::new().with_weight(1.0).with_type("chemical").with_length(9.0),
    ];
    let collapsed = CollapsedEdge::aggregate(&edges);

    // absent weights are excluded from the sum, not defaulted
    assert_eq!(collapsed.summed_weight, 3.0);
    // first non-null length wins
    assert_eq!(collapsed.length, Some(4.5));
    assert_eq!(
        collapsed.provenance["weight"],
        vec![AttrValue::Float(2.0), AttrValue::Null, AttrValue::Float(1.0)]
    );
    assert_eq!(
        collapsed.provenance["type"],
        vec![
            AttrValue::from("chemical"),
            AttrValue::from("electrical"),
            AttrValue::from("chemical")
        ]
    );
    assert!(!collapsed.provenance.contains_key("length"));
}
