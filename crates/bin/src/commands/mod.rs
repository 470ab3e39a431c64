//! Subcommand implementations.
//!
//! Every command works on the local replica state file named by `--state`.

pub mod graph;
pub mod replica;

use std::path::Path;

use replgraph::{Replica, ReplicaState};

/// Loads the local replica, starting empty when the state file does not exist yet.
pub fn open_replica(path: &Path) -> replgraph::Result<Replica> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "No state file yet, starting empty");
        return Ok(Replica::new());
    }
    let state = ReplicaState::load_from_file(path)?;
    tracing::info!(path = %path.display(), entries = state.entry_count(), "Loaded replica state");
    Ok(Replica::from_state(state))
}
