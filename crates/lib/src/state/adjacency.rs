//! Plain-text adjacency lists used to seed a replica.
//!
//! Each non-blank line names a node and the nodes it is connected to:
//!
//! ```text
//! June: Paul, Fliss
//! Paul: June, Tom
//! Tom:
//! ```
//!
//! Whitespace around labels is ignored. A source with nothing after the colon is a
//! node without edges.

use super::StateError;
use crate::Result;

/// One parsed line of an adjacency list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyLine {
    pub source: String,
    pub destinations: Vec<String>,
}

/// Parses adjacency text into lines, preserving input order.
pub fn parse_adjacency(text: &str) -> Result<Vec<AdjacencyLine>> {
    let mut lines = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line_number = index + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let Some((source, rest)) = raw.split_once(':') else {
            return Err(StateError::MalformedAdjacency {
                line_number,
                line: raw.to_string(),
            }
            .into());
        };
        let source = source.trim();
        if source.is_empty() {
            return Err(StateError::EmptySource { line_number }.into());
        }
        let destinations = rest
            .split(',')
            .map(str::trim)
            .filter(|label| !label.is_empty())
            .map(str::to_string)
            .collect();
        lines.push(AdjacencyLine {
            source: source.to_string(),
            destinations,
        });
    }
    Ok(lines)
}
