//!
//! replgraph: a replicated directed graph that converges without coordination.
//! This library provides the state-based CRDT engine behind a graph that many
//! replicas may edit independently and later reconcile.
//!
//! ## Core Concepts
//!
//! * **Identities (`identity::NodeId`)**: Content-derived node identifiers. Every replica
//!   hashes the same label to the same identity, so no handshake is needed to agree on
//!   which node is which.
//! * **Replica state (`state::ReplicaState`)**: Four timestamped witness sets recording
//!   node additions, node tombstones, edge additions and edge tombstones.
//! * **Replicas (`replica::Replica`)**: The merge engine. Records local add/remove
//!   operations and folds remote snapshots in with last-write-wins reconciliation.
//! * **Materialized graphs (`graph::MaterializedGraph`)**: A read-only projection of a
//!   replica state in which an edge is visible only when both of its endpoints are.
//! * **CRDTs (`crdt::CRDT`)**: The merge contract shared by witness sets and replica
//!   states: commutative, associative and idempotent.

pub mod clock;
pub mod crdt;
pub mod graph;
pub mod identity;
pub mod replica;
pub mod state;

pub use clock::{Clock, SystemClock, Timestamp};
#[cfg(any(test, feature = "testing"))]
pub use clock::{ClockHold, FixedClock};
pub use graph::MaterializedGraph;
pub use identity::NodeId;
pub use replica::Replica;
pub use state::{Edge, Node, ReplicaState};

/// Result type used throughout the replgraph library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the replgraph library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured lookup errors from the graph module
    #[error(transparent)]
    Graph(graph::GraphError),

    /// Structured state errors from the state module
    #[error(transparent)]
    State(state::StateError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Graph(_) => "graph",
            Error::State(_) => "state",
            Error::Io(_) => "io",
            Error::Serialize(_) => "serialize",
        }
    }

    /// Check if this error indicates a label was not found in the materialized graph.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Graph(graph_err) => graph_err.is_not_found(),
            _ => false,
        }
    }

    /// Check if this error is graph-related.
    pub fn is_graph_error(&self) -> bool {
        matches!(self, Error::Graph(_))
    }

    /// Check if this error is state-related.
    pub fn is_state_error(&self) -> bool {
        matches!(self, Error::State(_))
    }

    /// Check if this error is I/O related.
    pub fn is_io_error(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// Check if this error came from (de)serializing a snapshot.
    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }

    /// Check if this error indicates malformed caller input.
    pub fn is_validation_error(&self) -> bool {
        match self {
            Error::State(state_err) => state_err.is_malformed_input(),
            _ => false,
        }
    }
}
