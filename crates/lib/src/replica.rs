//! The merge engine.
//!
//! A [`Replica`] owns one [`ReplicaState`] and is the only thing that writes to it.
//! Local operations are recorded with [`Replica::add_node`] and friends; foreign
//! snapshots are folded in with [`Replica::merge`]; the current graph is read with
//! [`Replica::graph`].
//!
//! # Example
//!
//! ```
//! use chrono::DateTime;
//! use replgraph::Replica;
//!
//! let t0 = DateTime::from_timestamp_millis(1_000).unwrap();
//! let t1 = DateTime::from_timestamp_millis(2_000).unwrap();
//!
//! let mut here = Replica::new();
//! here.add_node("one", t0);
//!
//! let mut there = Replica::new();
//! there.add_node("two", t1);
//! there.add_edge_pair("one", "two", t1);
//!
//! // "two" is known here only after merging; the edge needs both endpoints.
//! here.merge(there.state());
//! let graph = here.graph();
//! assert!(graph.has_edge("one", "two"));
//! assert!(graph.has_edge("two", "one"));
//! ```
//!
//! # Concurrency
//!
//! A replica is `Send + Sync` but has no internal locking. Callers sharing one across
//! threads wrap it in a mutex. Merges of different remote snapshots need no ordering
//! among themselves; the result is the same for any delivery order.

use std::sync::Arc;

use crate::Result;
use crate::clock::{Clock, SystemClock, Timestamp};
use crate::crdt::MergeReport;
use crate::graph::MaterializedGraph;
use crate::state::{Edge, Node, ReplicaState, StateMergeReport, parse_adjacency};

/// One replica of the graph: its state plus the clock used to stamp local
/// operations.
#[derive(Debug, Clone)]
pub struct Replica {
    state: ReplicaState,
    clock: Arc<dyn Clock>,
}

impl Default for Replica {
    fn default() -> Self {
        Self::new()
    }
}

impl Replica {
    /// Creates an empty replica stamping with system time.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Creates an empty replica stamping with `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: ReplicaState::new(),
            clock,
        }
    }

    /// Resumes a replica from a stored snapshot.
    pub fn from_state(state: ReplicaState) -> Self {
        Self {
            state,
            clock: Arc::new(SystemClock),
        }
    }

    /// The replica's current state, for shipping to other replicas.
    pub fn state(&self) -> &ReplicaState {
        &self.state
    }

    /// Consumes the replica, returning its state.
    pub fn into_state(self) -> ReplicaState {
        self.state
    }

    /// The clock used by the `*_now` operations.
    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Records that a node labelled `label` was added at `timestamp`.
    ///
    /// Re-adding replaces the stored add, so the latest add is the one compared
    /// against a concurrent removal.
    pub fn add_node(&mut self, label: impl Into<String>, timestamp: Timestamp) {
        let node = Node::new(label, timestamp);
        tracing::trace!(label = %node.label, id = %node.id, "Add node");
        self.state.nodes_added_mut().record(node);
    }

    /// Records that `node` was removed at `timestamp`.
    ///
    /// Unconditional: the node does not need to be visible, or even known.
    pub fn remove_node(&mut self, node: &Node, timestamp: Timestamp) {
        tracing::trace!(label = %node.label, id = %node.id, "Remove node");
        self.state.nodes_removed_mut().record(node.at(timestamp));
    }

    /// Records the directed edge `source -> destination` at `timestamp`.
    ///
    /// Endpoints need not exist yet; the edge stays hidden until both are visible.
    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        timestamp: Timestamp,
    ) {
        let edge = Edge::new(source, destination, timestamp);
        tracing::trace!(source = %edge.source, destination = %edge.destination, "Add edge");
        self.state.edges_added_mut().record(edge);
    }

    /// Records edges in both directions between `a` and `b`.
    pub fn add_edge_pair(&mut self, a: &str, b: &str, timestamp: Timestamp) {
        self.add_edge(a, b, timestamp);
        self.add_edge(b, a, timestamp);
    }

    /// Records that the directed edge `source -> destination` was removed at
    /// `timestamp`.
    pub fn remove_edge(
        &mut self,
        source: impl Into<String>,
        destination: impl Into<String>,
        timestamp: Timestamp,
    ) {
        let edge = Edge::new(source, destination, timestamp);
        tracing::trace!(source = %edge.source, destination = %edge.destination, "Remove edge");
        self.state.edges_removed_mut().record(edge);
    }

    /// Removes edges in both directions between `a` and `b`.
    pub fn remove_edge_pair(&mut self, a: &str, b: &str, timestamp: Timestamp) {
        self.remove_edge(a, b, timestamp);
        self.remove_edge(b, a, timestamp);
    }

    /// [`Replica::add_node`] stamped with the replica clock.
    pub fn add_node_now(&mut self, label: impl Into<String>) -> Timestamp {
        let now = self.clock.now();
        self.add_node(label, now);
        now
    }

    /// [`Replica::remove_node`] stamped with the replica clock.
    pub fn remove_node_now(&mut self, node: &Node) -> Timestamp {
        let now = self.clock.now();
        self.remove_node(node, now);
        now
    }

    /// [`Replica::add_edge_pair`] stamped with the replica clock.
    pub fn add_edge_pair_now(&mut self, a: &str, b: &str) -> Timestamp {
        let now = self.clock.now();
        self.add_edge_pair(a, b, now);
        now
    }

    /// [`Replica::remove_edge_pair`] stamped with the replica clock.
    pub fn remove_edge_pair_now(&mut self, a: &str, b: &str) -> Timestamp {
        let now = self.clock.now();
        self.remove_edge_pair(a, b, now);
        now
    }

    /// Folds a full remote snapshot into the local state.
    ///
    /// Total, commutative, associative and idempotent: merging the same snapshot
    /// twice, merging in any order, or merging a replica's own state leaves every
    /// replica with the same result.
    pub fn merge(&mut self, remote: &ReplicaState) -> StateMergeReport {
        let report = self.state.merge_fields(remote);
        let total: MergeReport = report.total();
        tracing::debug!(
            inserted = total.inserted,
            replaced = total.replaced,
            kept = total.kept,
            "Merged remote replica state"
        );
        report
    }

    /// Materializes the currently visible graph.
    pub fn graph(&self) -> MaterializedGraph {
        MaterializedGraph::from_state(&self.state)
    }

    /// Seeds the replica from adjacency text, all operations stamped `timestamp`.
    ///
    /// Every source node is added first, then an edge pair for each listed
    /// destination. Destinations only become visible if they also appear as a source.
    /// Returns the number of lines applied. Nothing is recorded if the text fails to
    /// parse.
    pub fn import_adjacency(&mut self, text: &str, timestamp: Timestamp) -> Result<usize> {
        let lines = parse_adjacency(text)?;
        for line in &lines {
            self.add_node(line.source.as_str(), timestamp);
        }
        for line in &lines {
            for destination in &line.destinations {
                self.add_edge_pair(&line.source, destination, timestamp);
            }
        }
        tracing::debug!(lines = lines.len(), "Imported adjacency list");
        Ok(lines.len())
    }
}
