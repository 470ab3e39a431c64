//! Output formatting helpers for human-readable and JSON output.

use std::path::Path;

use replgraph::{MaterializedGraph, crdt::MergeReport, state::StateMergeReport};

/// Print a table with aligned columns in human-readable format.
///
/// `headers` and each row in `rows` must have the same length.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let col_count = headers.len();
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(col_count) {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let format_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", format_row(headers.to_vec()).trim_end());
    for row in rows {
        let cells = row.iter().take(col_count).map(String::as_str).collect();
        println!("{}", format_row(cells).trim_end());
    }
}

/// One table row for a merged remote: inserted/replaced counts per witness set.
pub fn merge_row(remote: &Path, report: &StateMergeReport) -> Vec<String> {
    let changed = |r: MergeReport| format!("+{}/~{}", r.inserted, r.replaced);
    vec![
        remote.display().to_string(),
        changed(report.nodes_added),
        changed(report.nodes_removed),
        changed(report.edges_added),
        changed(report.edges_removed),
    ]
}

/// JSON form of a merge report.
pub fn merge_json(remote: &Path, report: &StateMergeReport) -> serde_json::Value {
    let counts = |r: MergeReport| {
        serde_json::json!({
            "inserted": r.inserted,
            "replaced": r.replaced,
            "kept": r.kept,
        })
    };
    serde_json::json!({
        "remote": remote.display().to_string(),
        "nodes_added": counts(report.nodes_added),
        "nodes_removed": counts(report.nodes_removed),
        "edges_added": counts(report.edges_added),
        "edges_removed": counts(report.edges_removed),
    })
}

/// JSON form of a materialized graph: one object per visible node.
pub fn graph_json(graph: &MaterializedGraph) -> serde_json::Value {
    let nodes: Vec<serde_json::Value> = graph
        .iter()
        .map(|(node, neighbors)| {
            let neighbors: Vec<&str> = neighbors.iter().map(|n| n.label.as_str()).collect();
            serde_json::json!({
                "id": node.id.as_str(),
                "label": node.label,
                "neighbors": neighbors,
            })
        })
        .collect();
    serde_json::Value::Array(nodes)
}
