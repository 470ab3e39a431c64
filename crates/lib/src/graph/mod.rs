//! Materialized graph views.
//!
//! [`MaterializedGraph::from_state`] projects a [`ReplicaState`] into the graph a user
//! sees. The projection is pure and recomputed on every call; nothing is cached.
//!
//! ## Visibility rules
//!
//! * A node is visible when it was added and either never removed, or added strictly
//!   after its latest removal. Equal timestamps favor the removal.
//! * An edge is visible under the same rule over the edge witness sets.
//! * A visible edge only shows up in adjacency when both endpoints are visible.
//!
//! The last rule is the only way node removal affects edges. Edge rows touching a
//! removed node stay in storage untouched; they are filtered out here. This keeps
//! node removal commutative with edge operations that arrive later, and lets an edge
//! whose endpoint add has not reached this replica yet sit invisibly until it does.

use std::collections::HashMap;
use std::fmt;

use crate::Result;
use crate::crdt::Witness;
use crate::state::{Edge, Node, ReplicaState};

mod errors;
mod traversal;

pub use errors::GraphError;
pub use traversal::{SearchTree, VisitedNode, format_route};

/// A visible node and its visible outgoing neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Vertex {
    node: Node,
    neighbors: Vec<Node>,
}

/// A read-only, consistent graph derived from a replica state.
#[derive(Debug, Clone, Default)]
pub struct MaterializedGraph {
    vertices: Vec<Vertex>,
    index: HashMap<String, usize>,
}

/// True if a node add survives the tombstones in `state`.
fn node_visible(state: &ReplicaState, node: &Node) -> bool {
    match state.nodes_removed().get(&node.key()) {
        None => true,
        Some(removed) => node.timestamp > removed.timestamp,
    }
}

/// True if an edge add survives the tombstones in `state`.
fn edge_visible(state: &ReplicaState, edge: &Edge) -> bool {
    match state.edges_removed().get(&edge.key()) {
        None => true,
        Some(removed) => edge.timestamp > removed.timestamp,
    }
}

impl MaterializedGraph {
    /// Builds the visible graph from `state`.
    ///
    /// Nodes appear in the order of the added witness set, neighbors in the order of
    /// the edge witness set. Both orders are derived from keys only, so equal states
    /// materialize identically on every replica.
    pub fn from_state(state: &ReplicaState) -> Self {
        let mut vertices: Vec<Vertex> = state
            .nodes_added()
            .iter()
            .filter(|node| node_visible(state, node))
            .map(|node| Vertex {
                node: node.clone(),
                neighbors: Vec::new(),
            })
            .collect();

        let index: HashMap<String, usize> = vertices
            .iter()
            .enumerate()
            .map(|(position, vertex)| (vertex.node.label.clone(), position))
            .collect();

        let mut hidden_edges = 0usize;
        for edge in state
            .edges_added()
            .iter()
            .filter(|edge| edge_visible(state, edge))
        {
            match (index.get(&edge.source), index.get(&edge.destination)) {
                (Some(&source), Some(&destination)) => {
                    let neighbor = vertices[destination].node.clone();
                    vertices[source].neighbors.push(neighbor);
                }
                _ => hidden_edges += 1,
            }
        }

        tracing::trace!(
            nodes = vertices.len(),
            hidden_edges,
            "Materialized graph from replica state"
        );
        Self { vertices, index }
    }

    /// Number of visible nodes.
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// True if no node is visible.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Visible nodes in materialization order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.vertices.iter().map(|vertex| &vertex.node)
    }

    /// Labels of the visible nodes in materialization order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.nodes().map(|node| node.label.as_str())
    }

    /// Visible nodes paired with their visible neighbors.
    pub fn iter(&self) -> impl Iterator<Item = (&Node, &[Node])> {
        self.vertices
            .iter()
            .map(|vertex| (&vertex.node, vertex.neighbors.as_slice()))
    }

    /// Total number of visible directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    fn vertex(&self, label: &str) -> Result<&Vertex> {
        self.index
            .get(label)
            .map(|&position| &self.vertices[position])
            .ok_or_else(|| {
                GraphError::NodeNotFound {
                    label: label.to_string(),
                }
                .into()
            })
    }

    /// The visible node carrying `label`.
    pub fn node(&self, label: &str) -> Result<&Node> {
        self.vertex(label).map(|vertex| &vertex.node)
    }

    /// True if a node with `label` is visible.
    pub fn has_node(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// True if the edge `source -> destination` is visible.
    ///
    /// Unknown labels answer `false` rather than failing.
    pub fn has_edge(&self, source: &str, destination: &str) -> bool {
        self.vertex(source)
            .map(|vertex| {
                vertex
                    .neighbors
                    .iter()
                    .any(|neighbor| neighbor.label == destination)
            })
            .unwrap_or(false)
    }

    /// The visible outgoing neighbors of `label`.
    pub fn connected_nodes(&self, label: &str) -> Result<&[Node]> {
        self.vertex(label).map(|vertex| vertex.neighbors.as_slice())
    }
}

impl From<&ReplicaState> for MaterializedGraph {
    fn from(state: &ReplicaState) -> Self {
        Self::from_state(state)
    }
}

/// Two graphs are equal when they expose the same nodes with the same neighbors.
impl PartialEq for MaterializedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices == other.vertices
    }
}

impl Eq for MaterializedGraph {}

impl fmt::Display for MaterializedGraph {
    /// One line per node: `label: [ neighbor neighbor ]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in self.iter() {
            write!(f, "{}: [ ", node.label)?;
            for neighbor in neighbors {
                write!(f, "{} ", neighbor.label)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}
