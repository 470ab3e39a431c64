//! Replica state: the durable half of the graph CRDT.
//!
//! A [`ReplicaState`] is four witness sets. Nodes are witnessed by identity, edges by
//! their `(source, destination)` pair:
//!
//! | field           | records                        |
//! |-----------------|--------------------------------|
//! | `nodes_added`   | latest add of each node        |
//! | `nodes_removed` | latest removal of each node    |
//! | `edges_added`   | latest add of each edge        |
//! | `edges_removed` | latest removal of each edge    |
//!
//! The state only grows. Tombstones are kept forever so that a late-arriving add can
//! still be compared against the removal it raced with.
//!
//! The state is written by the merge engine ([`crate::Replica`]) only. Everything
//! here is read access, snapshot persistence and the merge itself.

use serde::{Deserialize, Serialize};

use crate::crdt::{CRDT, Data, MergeReport, WitnessSet};
use crate::identity::NodeId;

mod adjacency;
mod errors;
mod persistence;
mod types;

pub use adjacency::{AdjacencyLine, parse_adjacency};
pub use errors::StateError;
pub use types::{Edge, EdgeKey, Node};

/// Per-field outcome of merging one replica state into another.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateMergeReport {
    pub nodes_added: MergeReport,
    pub nodes_removed: MergeReport,
    pub edges_added: MergeReport,
    pub edges_removed: MergeReport,
}

impl StateMergeReport {
    /// All four fields combined.
    pub fn total(&self) -> MergeReport {
        let mut total = self.nodes_added;
        total += self.nodes_removed;
        total += self.edges_added;
        total += self.edges_removed;
        total
    }
}

/// A full snapshot of one replica's CRDT state.
///
/// This is the unit replicas exchange: transports serialize it, ship it and hand it
/// to [`crate::Replica::merge`] on the other side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReplicaState {
    #[serde(default)]
    nodes_added: WitnessSet<Node>,
    #[serde(default)]
    nodes_removed: WitnessSet<Node>,
    #[serde(default)]
    edges_added: WitnessSet<Edge>,
    #[serde(default)]
    edges_removed: WitnessSet<Edge>,
}

impl ReplicaState {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every node add ever witnessed, one per identity.
    pub fn nodes_added(&self) -> &WitnessSet<Node> {
        &self.nodes_added
    }

    /// Every node tombstone ever witnessed, one per identity.
    pub fn nodes_removed(&self) -> &WitnessSet<Node> {
        &self.nodes_removed
    }

    /// Every edge add ever witnessed, one per endpoint pair.
    pub fn edges_added(&self) -> &WitnessSet<Edge> {
        &self.edges_added
    }

    /// Every edge tombstone ever witnessed, one per endpoint pair.
    pub fn edges_removed(&self) -> &WitnessSet<Edge> {
        &self.edges_removed
    }

    /// The latest add witnessed for `label`.
    pub fn added_node(&self, label: &str) -> Option<&Node> {
        self.nodes_added.get(&NodeId::from_label(label))
    }

    /// The latest removal witnessed for `label`.
    pub fn removed_node(&self, label: &str) -> Option<&Node> {
        self.nodes_removed.get(&NodeId::from_label(label))
    }

    /// The latest add witnessed for the edge `source -> destination`.
    pub fn added_edge(&self, source: &str, destination: &str) -> Option<&Edge> {
        self.edges_added.get(&EdgeKey::new(source, destination))
    }

    /// The latest removal witnessed for the edge `source -> destination`.
    pub fn removed_edge(&self, source: &str, destination: &str) -> Option<&Edge> {
        self.edges_removed.get(&EdgeKey::new(source, destination))
    }

    /// True if nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes_added.is_empty()
            && self.nodes_removed.is_empty()
            && self.edges_added.is_empty()
            && self.edges_removed.is_empty()
    }

    /// Total number of witness entries across all four sets.
    pub fn entry_count(&self) -> usize {
        self.nodes_added.len()
            + self.nodes_removed.len()
            + self.edges_added.len()
            + self.edges_removed.len()
    }

    /// Folds `remote` into this state, field by field.
    ///
    /// Fields are reconciled in a fixed order: `nodes_added`, `nodes_removed`,
    /// `edges_added`, `edges_removed`. Each field keeps, per key, the entry with the
    /// strictly latest timestamp; ties leave the resident entry in place.
    pub fn merge_fields(&mut self, remote: &ReplicaState) -> StateMergeReport {
        let report = StateMergeReport {
            nodes_added: self.nodes_added.merge_from(&remote.nodes_added),
            nodes_removed: self.nodes_removed.merge_from(&remote.nodes_removed),
            edges_added: self.edges_added.merge_from(&remote.edges_added),
            edges_removed: self.edges_removed.merge_from(&remote.edges_removed),
        };
        tracing::trace!(?report, "Merged replica state fields");
        report
    }

    pub(crate) fn nodes_added_mut(&mut self) -> &mut WitnessSet<Node> {
        &mut self.nodes_added
    }

    pub(crate) fn nodes_removed_mut(&mut self) -> &mut WitnessSet<Node> {
        &mut self.nodes_removed
    }

    pub(crate) fn edges_added_mut(&mut self) -> &mut WitnessSet<Edge> {
        &mut self.edges_added
    }

    pub(crate) fn edges_removed_mut(&mut self) -> &mut WitnessSet<Edge> {
        &mut self.edges_removed
    }
}

impl Data for ReplicaState {}

impl CRDT for ReplicaState {
    fn merge_from(&mut self, other: &Self) -> MergeReport {
        self.merge_fields(other).total()
    }
}
