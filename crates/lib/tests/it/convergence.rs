//! Merge laws: commutativity, associativity, idempotence and delivery-order
//! independence.

use replgraph::{Replica, ReplicaState, crdt::CRDT};

use crate::helpers::*;

/// Three replicas diverging from the seeded base with operations that do not
/// naturally commute when applied out of order.
fn diverged_replicas() -> (Replica, Replica, Replica) {
    let mut a = seeded_replica();
    a.add_node("four", minutes(5));
    a.add_edge_pair("one", "four", minutes_seconds(5, 1));

    let mut b = seeded_replica();
    b.add_node("five", minutes(6));
    b.add_edge_pair("four", "five", minutes(6));
    b.add_edge_pair("two", "five", minutes_seconds(6, 1));

    let mut c = seeded_replica();
    c.remove_edge_pair("one", "two", minutes(7));
    let one = c.graph().node("one").unwrap().clone();
    c.remove_node(&one, minutes_seconds(7, 1));

    (a, b, c)
}

fn all_orders() -> Vec<[usize; 3]> {
    vec![
        [0, 1, 2],
        [0, 2, 1],
        [1, 0, 2],
        [1, 2, 0],
        [2, 0, 1],
        [2, 1, 0],
    ]
}

#[test]
fn test_merge_is_commutative_between_two_replicas() {
    let (mut x, mut y, _) = diverged_replicas();
    let x_state = x.state().clone();
    let y_state = y.state().clone();

    x.merge(&y_state);
    y.merge(&x_state);

    assert_eq!(x.graph(), y.graph());
    assert_eq!(x.state(), y.state());
}

#[test]
fn test_merge_is_idempotent() {
    let (mut x, y, _) = diverged_replicas();
    x.merge(y.state());
    let once_graph = x.graph();
    let once_state = x.state().clone();

    let report = x.merge(y.state());
    assert!(report.total().is_noop());
    assert_eq!(x.graph(), once_graph);

    let own = x.state().clone();
    let report = x.merge(&own);
    assert!(report.total().is_noop());
    assert_eq!(x.state(), &once_state);
}

#[test]
fn test_merge_order_does_not_matter() {
    let (a, b, c) = diverged_replicas();
    let states = [a.state().clone(), b.state().clone(), c.state().clone()];

    let mut results = Vec::new();
    for order in all_orders() {
        let mut local = seeded_replica();
        for index in order {
            local.merge(&states[index]);
        }
        results.push((order, local.graph(), local.into_state()));
    }

    let (_, expected_graph, expected_state) = &results[0];
    for (order, graph, state) in &results {
        assert_eq!(graph, expected_graph, "graph differs for order {order:?}");
        assert_eq!(state, expected_state, "state differs for order {order:?}");
    }

    assert_nodes(expected_graph, &["two", "three", "four", "five"]);
    assert_neighbors(expected_graph, "two", &["three", "five"]);
    assert_neighbors(expected_graph, "three", &["two"]);
    assert_neighbors(expected_graph, "four", &["five"]);
    assert_neighbors(expected_graph, "five", &["four", "two"]);
}

#[test]
fn test_merge_is_associative() {
    let (a, b, c) = diverged_replicas();
    let (a, b, c) = (a.into_state(), b.into_state(), c.into_state());

    let left = a.merge(&b).merge(&c);
    let right = a.merge(&b.merge(&c));
    assert_eq!(left, right);
}

#[test]
fn test_edge_merged_before_endpoint_node_surfaces_later() {
    // Replica holding the nodes
    let mut nodes_only = Replica::new();
    nodes_only.add_node("p", minutes(1));
    nodes_only.add_node("q", minutes(1));

    // Replica that learned of the nodes elsewhere and only recorded the edge
    let mut edge_only = Replica::new();
    edge_only.add_edge_pair("p", "q", minutes(2));

    let mut local = Replica::new();
    local.merge(edge_only.state());
    assert!(local.graph().is_empty());
    assert_eq!(local.state().edges_added().len(), 2);

    local.merge(nodes_only.state());
    let graph = local.graph();
    assert!(graph.has_edge("p", "q"));
    assert!(graph.has_edge("q", "p"));
}

#[test]
fn test_merging_into_empty_state_copies_everything() {
    let (a, _, _) = diverged_replicas();
    let mut empty = ReplicaState::new();
    let report = empty.merge_fields(a.state());

    assert_eq!(report.total().inserted, a.state().entry_count());
    assert_eq!(&empty, a.state());
}
