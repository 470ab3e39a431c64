//! Core traits for the CRDT types in replgraph.
//!
//! This module defines the traits every mergeable structure satisfies:
//! - `Data`: A marker trait for types that can travel between replicas
//! - `CRDT`: The merge contract used to reconcile replica states

use std::ops::AddAssign;

/// Marker trait for data types that can be shipped between replicas.
///
/// Snapshots leave the engine through an external transport, so every mergeable
/// type must round-trip through serde and be cheap enough to clone.
///
/// # Examples
///
/// ```
/// use replgraph::crdt::Data;
///
/// #[derive(Clone, serde::Serialize, serde::Deserialize)]
/// struct Snapshot {
///     label: String,
/// }
///
/// impl Data for Snapshot {}
/// ```
pub trait Data: Clone + serde::Serialize + serde::de::DeserializeOwned {}

/// A state-based Conflict-free Replicated Data Type.
///
/// Replicas exchange whole states and fold them into their own. For replicas to
/// converge no matter how often or in which order states are delivered, `merge_from`
/// must be:
/// - **Commutative**: `a.merge(b) == b.merge(a)`
/// - **Associative**: `(a.merge(b)).merge(c) == a.merge(b.merge(c))`
/// - **Idempotent**: `a.merge(a) == a`
///
/// Merging is total. Any two well-formed states can be merged.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use replgraph::{Node, crdt::{CRDT, WitnessSet}};
///
/// let t = DateTime::from_timestamp_millis(1_000).unwrap();
/// let mut left = WitnessSet::new();
/// left.record(Node::new("one", t));
/// let mut right = WitnessSet::new();
/// right.record(Node::new("two", t));
///
/// let merged = left.merge(&right);
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged, right.merge(&left));
/// ```
pub trait CRDT: Data + Default {
    /// Fold `other` into `self`, reporting what changed.
    fn merge_from(&mut self, other: &Self) -> MergeReport;

    /// Merge this CRDT with another instance, returning a new merged instance.
    fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.merge_from(other);
        merged
    }
}

/// What a merge did to the local side, counted per incoming entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries whose key was unknown locally.
    pub inserted: usize,
    /// Entries that displaced an older local entry.
    pub replaced: usize,
    /// Entries that lost against the resident one.
    pub kept: usize,
}

impl MergeReport {
    /// Number of incoming entries that changed the local state.
    pub fn changed(&self) -> usize {
        self.inserted + self.replaced
    }

    /// Total number of incoming entries examined.
    pub fn examined(&self) -> usize {
        self.inserted + self.replaced + self.kept
    }

    /// True when the merge left the local state untouched.
    pub fn is_noop(&self) -> bool {
        self.changed() == 0
    }
}

impl AddAssign for MergeReport {
    fn add_assign(&mut self, other: Self) {
        self.inserted += other.inserted;
        self.replaced += other.replaced;
        self.kept += other.kept;
    }
}
