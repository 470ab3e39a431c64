//! Content-derived node identifiers.
//!
//! A [`NodeId`] is the hex-encoded SHA-256 digest of a node's label. Two replicas
//! that add a node with the same label compute the same identity without talking to
//! each other, which is what lets their witness sets line up on merge.

use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A content-addressable identifier for a graph node.
///
/// Represents a hex-encoded SHA-256 hash of the node label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    /// Derives the identity of the node carrying `label`.
    ///
    /// Pure and total: every string, including the empty string, hashes to a
    /// 64 character lowercase hex identifier.
    pub fn from_label(label: impl AsRef<str>) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(label.as_ref().as_bytes());
        let hash = hasher.finalize();
        Self(format!("{hash:x}"))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}
