//! Persistence operations for replica state
//!
//! This module handles saving and loading a [`ReplicaState`] snapshot to and from
//! JSON files. The same files are what the command line tool exchanges between
//! replicas.

use std::{fs, path::Path};

use serde::{Deserialize, Deserializer, Serialize};

use super::ReplicaState;
use crate::Result;

/// The current persistence file format version.
/// v0 indicates this is an unstable format subject to breaking changes.
const PERSISTENCE_VERSION: u8 = 0;

/// Helper to check if version is default (0) for serde skip_serializing_if
fn is_v0(v: &u8) -> bool {
    *v == 0
}

/// Validates the persistence version during deserialization.
fn validate_persistence_version<'de, D>(deserializer: D) -> std::result::Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let version = u8::deserialize(deserializer)?;
    if version != PERSISTENCE_VERSION {
        return Err(serde::de::Error::custom(format!(
            "unsupported persistence version {version}; only version {PERSISTENCE_VERSION} is supported"
        )));
    }
    Ok(version)
}

/// On-disk layout: the snapshot itself plus a version marker.
///
/// The state is flattened so a bare serialized `ReplicaState` also loads.
#[derive(Serialize, Deserialize)]
struct PersistedState {
    /// File format version for compatibility checking
    #[serde(
        rename = "_v",
        default,
        skip_serializing_if = "is_v0",
        deserialize_with = "validate_persistence_version"
    )]
    version: u8,
    #[serde(flatten)]
    state: ReplicaState,
}

impl ReplicaState {
    /// Saves this snapshot to `path` as pretty-printed JSON.
    ///
    /// # Returns
    /// A `Result` indicating success or an I/O or serialization error.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let persisted = PersistedState {
            version: PERSISTENCE_VERSION,
            state: self.clone(),
        };
        let json = serde_json::to_string_pretty(&persisted)?;
        fs::write(path.as_ref(), json)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = self.entry_count(),
            "Saved replica state"
        );
        Ok(())
    }

    /// Loads a snapshot previously written by [`ReplicaState::save_to_file`].
    ///
    /// Fails on I/O errors, malformed JSON and unknown format versions.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        let persisted: PersistedState = serde_json::from_str(&json)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            entries = persisted.state.entry_count(),
            "Loaded replica state"
        );
        Ok(persisted.state)
    }
}
