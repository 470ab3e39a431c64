use replgraph::{Replica, graph::format_route};

use crate::helpers::*;

#[test]
fn test_shortest_route_follows_fewest_hops() {
    let graph = replica_from_adjacency("A: B\nB: C, D\nC: E\nD: E\nE:\n").graph();

    let route = graph.find_shortest_route("A", "E").unwrap();
    assert_eq!(route.len(), 4);
    assert_eq!(route.first().map(String::as_str), Some("E"));
    assert_eq!(route.last().map(String::as_str), Some("A"));
    assert!(route[1] == "C" || route[1] == "D");
    assert_eq!(route[2], "B");
}

#[test]
fn test_shortest_route_in_family_tree() {
    let graph = replica_from_adjacency(FAMILY_TREE).graph();

    let route = graph.find_shortest_route("June", "Lizzie").unwrap();
    assert_eq!(route, vec!["Lizzie", "Tom", "Paul", "June"]);
    assert_eq!(format_route(&route), "June --> Paul --> Tom --> Lizzie");
}

#[test]
fn test_depth_first_search_reaches_whole_graph() {
    let graph = replica_from_adjacency(FAMILY_TREE).graph();

    let visited = graph.depth_first_search("Paul").unwrap();
    assert_eq!(visited.first().map(String::as_str), Some("Paul"));
    assert_eq!(visited.len(), 9);
    let visited: std::collections::BTreeSet<String> = visited.into_iter().collect();
    assert_eq!(
        visited,
        set(&[
            "Paul", "June", "Fliss", "Mark", "Lee", "Tom", "Marianne", "Jules", "Lizzie"
        ])
    );
}

#[test]
fn test_depth_first_order_follows_adjacency() {
    let mut replica = Replica::new();
    for label in ["r", "a", "b", "c"] {
        replica.add_node(label, t0());
    }
    replica.add_edge("r", "a", t0());
    replica.add_edge("r", "b", t0());
    replica.add_edge("a", "c", t0());

    let graph = replica.graph();
    let adjacency: Vec<&str> = graph
        .connected_nodes("r")
        .unwrap()
        .iter()
        .map(|n| n.label.as_str())
        .collect();
    assert_eq!(adjacency, vec!["a", "b"]);

    // Last pushed neighbor is explored first
    assert_eq!(graph.depth_first_search("r").unwrap(), vec!["r", "b", "a", "c"]);
    // Directed edges only: nothing leads back to r
    assert_eq!(graph.depth_first_search("a").unwrap(), vec!["a", "c"]);
}

#[test]
fn test_unreachable_destination_yields_single_label() {
    let mut replica = replica_from_adjacency("A: B\nB:\n");
    replica.add_node("island", t0());
    let graph = replica.graph();

    assert_eq!(graph.find_shortest_route("A", "island").unwrap(), vec!["island"]);
    // A label no replica ever added is just as unreachable
    assert_eq!(graph.find_shortest_route("A", "nowhere").unwrap(), vec!["nowhere"]);
    assert!(graph.find_shortest_route("nowhere", "A").unwrap_err().is_not_found());
}

#[test]
fn test_traversal_over_removed_node_fails_lookup() {
    let mut replica = replica_from_adjacency(FAMILY_TREE);
    let tom = replica.graph().node("Tom").unwrap().clone();
    replica.remove_node(&tom, minutes(1));
    let graph = replica.graph();

    let err = graph.depth_first_search("Tom").unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.module(), "graph");

    // Lizzie is now only reachable through the removed node
    assert_eq!(graph.find_shortest_route("June", "Lizzie").unwrap(), vec!["Lizzie"]);
    let reached = graph.breadth_first_search("June").unwrap();
    assert!(!reached.contains("Lizzie"));
    assert_eq!(reached.distance("Mark"), Some(2));
}

#[test]
fn test_breadth_first_visit_order_is_level_order() {
    let graph = replica_from_adjacency(FAMILY_TREE).graph();
    let tree = graph.breadth_first_search("June").unwrap();

    let distances: Vec<usize> = tree.iter().map(|(_, visit)| visit.distance_from_root).collect();
    let mut sorted = distances.clone();
    sorted.sort();
    assert_eq!(distances, sorted);
    assert_eq!(tree.path_to("Marianne").unwrap(), vec!["Marianne", "Mark", "Paul", "June"]);
}
