//! Error types for replica state handling.

use thiserror::Error;

/// Structured errors raised while building or loading replica state.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StateError {
    /// A line of adjacency input did not have the `source: dest, ...` shape
    #[error("Malformed adjacency line {line_number}: {line:?}")]
    MalformedAdjacency { line_number: usize, line: String },

    /// An adjacency line named no source node
    #[error("Adjacency line {line_number} has an empty source label")]
    EmptySource { line_number: usize },
}

impl StateError {
    /// Check if this error was caused by malformed caller input
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            StateError::MalformedAdjacency { .. } | StateError::EmptySource { .. }
        )
    }

    /// Get the 1-based input line this error refers to
    pub fn line_number(&self) -> Option<usize> {
        match self {
            StateError::MalformedAdjacency { line_number, .. }
            | StateError::EmptySource { line_number } => Some(*line_number),
        }
    }
}

impl From<StateError> for crate::Error {
    fn from(err: StateError) -> Self {
        crate::Error::State(err)
    }
}
