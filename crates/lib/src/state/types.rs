//! Node and edge witnesses.

use serde::{Deserialize, Serialize};

use crate::clock::Timestamp;
use crate::crdt::{Data, Witness};
use crate::identity::NodeId;

/// A logical vertex, stamped with the time of the operation that recorded it.
///
/// The label is the logical key. Two `Node` values with the same label are the same
/// node regardless of when they were stamped; witness sets deduplicate them through
/// the derived [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub label: String,
    pub timestamp: Timestamp,
}

impl Node {
    /// Creates a node for `label`, deriving its identity from the label.
    pub fn new(label: impl Into<String>, timestamp: Timestamp) -> Self {
        let label = label.into();
        Self {
            id: NodeId::from_label(&label),
            label,
            timestamp,
        }
    }

    /// The same node, restamped.
    pub fn at(&self, timestamp: Timestamp) -> Self {
        Self {
            id: self.id.clone(),
            label: self.label.clone(),
            timestamp,
        }
    }

    /// True if both values describe the same logical node.
    pub fn same_node(&self, other: &Node) -> bool {
        self.label == other.label
    }
}

impl Data for Node {}

impl Witness for Node {
    type Key = NodeId;

    fn key(&self) -> NodeId {
        self.id.clone()
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

/// Endpoint pair identifying a directed edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub source: String,
    pub destination: String,
}

impl EdgeKey {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// A directed relationship `source -> destination`, referring to nodes by label.
///
/// Undirected relationships are a pair of edges, one per direction, each added and
/// removed on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub destination: String,
    pub timestamp: Timestamp,
}

impl Edge {
    pub fn new(
        source: impl Into<String>,
        destination: impl Into<String>,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            timestamp,
        }
    }

    /// True if this edge runs from `source` to `destination`.
    pub fn connects(&self, source: &str, destination: &str) -> bool {
        self.source == source && self.destination == destination
    }

    /// The same edge in the opposite direction, with the same timestamp.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination.clone(),
            destination: self.source.clone(),
            timestamp: self.timestamp,
        }
    }
}

impl Data for Edge {}

impl Witness for Edge {
    type Key = EdgeKey;

    fn key(&self) -> EdgeKey {
        EdgeKey::new(self.source.as_str(), self.destination.as_str())
    }

    fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}
