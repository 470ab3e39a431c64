//! Reachability and shortest routes over a materialized graph.
//!
//! All traversals follow outgoing edges only and take neighbors in stored adjacency
//! order, so results are deterministic for a given graph.

use std::collections::{HashMap, HashSet, VecDeque};

use super::MaterializedGraph;
use crate::Result;

/// Where breadth-first search reached a node from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedNode {
    /// Hops from the search root.
    pub distance_from_root: usize,
    /// Label of the node this one was first reached from; `None` for the root.
    pub parent: Option<String>,
}

/// The result of a breadth-first search: every reachable label with its distance
/// and BFS parent, in visit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchTree {
    order: Vec<String>,
    visited: HashMap<String, VisitedNode>,
}

impl SearchTree {
    fn visit(&mut self, label: &str, visit: VisitedNode) {
        self.order.push(label.to_string());
        self.visited.insert(label.to_string(), visit);
    }

    /// The search root, if the search visited anything.
    pub fn root(&self) -> Option<&str> {
        self.order.first().map(String::as_str)
    }

    /// True if the search reached `label`.
    pub fn contains(&self, label: &str) -> bool {
        self.visited.contains_key(label)
    }

    /// Visit record for `label`.
    pub fn get(&self, label: &str) -> Option<&VisitedNode> {
        self.visited.get(label)
    }

    /// Hops from the root to `label`, if reached.
    pub fn distance(&self, label: &str) -> Option<usize> {
        self.get(label).map(|visit| visit.distance_from_root)
    }

    /// Number of reached nodes, root included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reached labels and their visit records, in visit order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &VisitedNode)> {
        self.order
            .iter()
            .filter_map(|label| self.visited.get(label).map(|visit| (label.as_str(), visit)))
    }

    /// Labels from `destination` back to the root, following parent pointers.
    ///
    /// Returns `None` if `destination` was not reached.
    pub fn path_to(&self, destination: &str) -> Option<Vec<String>> {
        let mut path = vec![destination.to_string()];
        let mut current = self.visited.get(destination)?;
        while let Some(parent) = &current.parent {
            path.push(parent.clone());
            current = self.visited.get(parent)?;
        }
        Some(path)
    }
}

/// Renders a destination-first route root first, `A --> B --> C`.
pub fn format_route(route: &[String]) -> String {
    route
        .iter()
        .rev()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" --> ")
}

impl MaterializedGraph {
    /// Iterative depth-first traversal from `root`.
    ///
    /// Returns labels in visit order. Each node is visited once; neighbors are pushed
    /// in adjacency order, so the last neighbor listed is explored first.
    pub fn depth_first_search(&self, root: &str) -> Result<Vec<String>> {
        self.node(root)?;

        let mut visited = Vec::new();
        let mut seen = HashSet::new();
        let mut stack = vec![root.to_string()];

        while let Some(label) = stack.pop() {
            if !seen.insert(label.clone()) {
                continue;
            }
            for neighbor in self.connected_nodes(&label)? {
                stack.push(neighbor.label.clone());
            }
            visited.push(label);
        }

        tracing::trace!(root, visited = visited.len(), "Depth-first search complete");
        Ok(visited)
    }

    /// Level-order search from `root`, recording distance and parent per label.
    pub fn breadth_first_search(&self, root: &str) -> Result<SearchTree> {
        self.node(root)?;

        let mut tree = SearchTree::default();
        let mut queue = VecDeque::new();
        tree.visit(
            root,
            VisitedNode {
                distance_from_root: 0,
                parent: None,
            },
        );
        queue.push_back(root.to_string());

        while let Some(label) = queue.pop_front() {
            let distance = tree.distance(&label).unwrap_or_default();
            for neighbor in self.connected_nodes(&label)? {
                if tree.contains(&neighbor.label) {
                    continue;
                }
                tree.visit(
                    &neighbor.label,
                    VisitedNode {
                        distance_from_root: distance + 1,
                        parent: Some(label.clone()),
                    },
                );
                queue.push_back(neighbor.label.clone());
            }
        }

        tracing::trace!(root, reached = tree.len(), "Breadth-first search complete");
        Ok(tree)
    }

    /// Fewest-hop route from `root` to `destination`, as labels from destination back
    /// to root.
    ///
    /// `root` must be visible. If `destination` is not reached, including when no
    /// visible node carries that label, the result is the single label `[destination]`.
    pub fn find_shortest_route(&self, root: &str, destination: &str) -> Result<Vec<String>> {
        let tree = self.breadth_first_search(root)?;

        let route = tree
            .path_to(destination)
            .unwrap_or_else(|| vec![destination.to_string()]);
        tracing::debug!(route = %format_route(&route), "Shortest route");
        Ok(route)
    }
}
