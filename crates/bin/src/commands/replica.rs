//! Commands that change the local replica: `import` and `merge`.

use std::fs;
use std::path::Path;

use replgraph::ReplicaState;

use super::open_replica;
use crate::cli::{ImportArgs, MergeArgs, OutputFormat};
use crate::output::{merge_json, merge_row, print_table};

/// Run the import command
pub fn import(
    state_path: &Path,
    args: &ImportArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(&args.file)?;
    let mut replica = open_replica(state_path)?;

    let now = replica.clock().now();
    let lines = replica.import_adjacency(&text, now)?;
    replica.state().save_to_file(state_path)?;
    tracing::info!(file = %args.file.display(), lines, "Imported adjacency list");

    match format {
        OutputFormat::Human => {
            println!(
                "Imported {lines} nodes from {} into {}",
                args.file.display(),
                state_path.display()
            );
        }
        OutputFormat::Json => {
            let value = serde_json::json!({
                "file": args.file.display().to_string(),
                "nodes": lines,
                "timestamp": now.to_rfc3339(),
            });
            println!("{}", serde_json::to_string(&value)?);
        }
    }

    Ok(())
}

/// Run the merge command
///
/// All remotes are loaded before anything is merged, so one unreadable file leaves
/// the local state untouched.
pub fn merge(
    state_path: &Path,
    args: &MergeArgs,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut replica = open_replica(state_path)?;
    let remotes = args
        .remotes
        .iter()
        .map(|path| ReplicaState::load_from_file(path).map(|state| (path, state)))
        .collect::<replgraph::Result<Vec<_>>>()?;

    let reports: Vec<_> = remotes
        .iter()
        .map(|(path, state)| (*path, replica.merge(state)))
        .collect();
    replica.state().save_to_file(state_path)?;

    match format {
        OutputFormat::Human => {
            let rows: Vec<Vec<String>> = reports
                .iter()
                .map(|(path, report)| merge_row(path, report))
                .collect();
            print_table(
                &[
                    "REMOTE",
                    "NODES ADDED",
                    "NODES REMOVED",
                    "EDGES ADDED",
                    "EDGES REMOVED",
                ],
                &rows,
            );
        }
        OutputFormat::Json => {
            let entries: Vec<_> = reports
                .iter()
                .map(|(path, report)| merge_json(path, report))
                .collect();
            println!("{}", serde_json::to_string(&entries)?);
        }
    }

    Ok(())
}
