use replgraph::{NodeId, Replica};

use crate::helpers::*;

#[test]
fn test_independent_replicas_agree_on_identity() {
    let mut left = Replica::new();
    left.add_node("X", minutes(1));
    let mut right = Replica::new();
    right.add_node("X", minutes(2));

    let left_id = &left.state().added_node("X").unwrap().id;
    let right_id = &right.state().added_node("X").unwrap().id;
    assert_eq!(left_id, right_id);
    assert_eq!(*left_id, NodeId::from_label("X"));

    left.merge(right.state());
    assert_eq!(left.state().nodes_added().len(), 1);
    assert_eq!(left.graph().len(), 1);
    // The later add survives the merge
    assert_eq!(left.state().added_node("X").unwrap().timestamp, minutes(2));
}

#[test]
fn test_identity_is_hex_sha256() {
    let id = NodeId::from_label("node1");
    assert_eq!(id.as_str().len(), 64);
    assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_empty_label_node_is_usable() {
    let mut replica = Replica::new();
    replica.add_node("", t0());
    replica.add_node("a", t0());
    replica.add_edge_pair("", "a", t0());

    let graph = replica.graph();
    assert!(graph.has_node(""));
    assert!(graph.has_edge("", "a"));
    assert!(graph.has_edge("a", ""));
}
