//! Keyed last-write-wins witness sets.
//!
//! A witness set records *that* something happened to a key (a node was added, an
//! edge was removed) together with the latest time it happened. It is not a log:
//! each key holds exactly one entry, and recording the same key again replaces it.
//!
//! Entries decide their own key through [`Witness::key`]. Nodes are keyed by
//! identity and edges by their endpoint pair, so two entries that differ only in
//! timestamp always collide. Whole-value equality is never used for deduplication.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::fmt::Debug;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::traits::{CRDT, Data, MergeReport};
use crate::clock::Timestamp;

/// An entry that can live in a [`WitnessSet`].
pub trait Witness: Data {
    /// The part of the entry that identifies it.
    type Key: Ord + Clone + Debug;

    /// Extracts the key this entry is deduplicated by.
    fn key(&self) -> Self::Key;

    /// The time the witnessed operation happened.
    fn timestamp(&self) -> Timestamp;
}

/// Result of folding a single entry into a witness set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The key was new.
    Inserted,
    /// The incoming entry was strictly newer and replaced the resident one.
    Replaced,
    /// The resident entry was as new or newer and stayed.
    Kept,
}

/// A set of witnesses, one per key, ordered by key.
///
/// The ordering makes iteration deterministic: two replicas holding equal sets
/// walk them in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct WitnessSet<W: Witness> {
    entries: BTreeMap<W::Key, W>,
}

impl<W: Witness> WitnessSet<W> {
    /// Creates an empty witness set.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Number of keys witnessed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been witnessed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entry recorded for `key`, if any.
    pub fn get(&self, key: &W::Key) -> Option<&W> {
        self.entries.get(key)
    }

    /// True if `key` has been witnessed.
    pub fn contains_key(&self, key: &W::Key) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &W> {
        self.entries.values()
    }

    /// Records a local operation.
    ///
    /// Unconditionally replaces whatever was stored for the entry's key and returns the
    /// previous entry. Local operations always carry the caller's intent, even when the
    /// caller's clock is behind the stored timestamp.
    pub fn record(&mut self, witness: W) -> Option<W> {
        self.entries.insert(witness.key(), witness)
    }

    /// Folds a foreign entry in with last-write-wins.
    ///
    /// The incoming entry survives only if its timestamp is strictly after the
    /// resident one. On equal timestamps the resident entry stays; since the key
    /// determines every other field, equal-timestamp entries are equal values and
    /// the choice cannot make replicas diverge.
    pub fn merge_entry(&mut self, witness: W) -> MergeOutcome {
        match self.entries.entry(witness.key()) {
            Entry::Vacant(slot) => {
                slot.insert(witness);
                MergeOutcome::Inserted
            }
            Entry::Occupied(mut slot) => {
                if witness.timestamp() > slot.get().timestamp() {
                    tracing::trace!(key = ?slot.key(), "Incoming witness is newer, replacing");
                    slot.insert(witness);
                    MergeOutcome::Replaced
                } else {
                    MergeOutcome::Kept
                }
            }
        }
    }
}

impl<W: Witness> Default for WitnessSet<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Witness> Data for WitnessSet<W> {}

impl<W: Witness> CRDT for WitnessSet<W> {
    fn merge_from(&mut self, other: &Self) -> MergeReport {
        let mut report = MergeReport::default();
        for witness in other.iter() {
            match self.merge_entry(witness.clone()) {
                MergeOutcome::Inserted => report.inserted += 1,
                MergeOutcome::Replaced => report.replaced += 1,
                MergeOutcome::Kept => report.kept += 1,
            }
        }
        report
    }
}

impl<W: Witness> FromIterator<W> for WitnessSet<W> {
    /// Builds a set by merging every entry, so duplicate keys resolve with
    /// last-write-wins rather than by position.
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut set = Self::new();
        for witness in iter {
            set.merge_entry(witness);
        }
        set
    }
}

// Serialized as a plain sequence of entries. Edge keys are composite and cannot be
// JSON object keys, and the key is always recoverable from the entry itself.
impl<W: Witness> Serialize for WitnessSet<W> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, W: Witness> Deserialize<'de> for WitnessSet<W> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<W>::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}
