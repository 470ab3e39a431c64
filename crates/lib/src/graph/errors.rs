//! Error types for materialized graph queries.

use thiserror::Error;

/// Structured errors for lookups against a [`super::MaterializedGraph`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GraphError {
    /// No visible node carries the requested label
    #[error("No node matching label {label:?}")]
    NodeNotFound { label: String },
}

impl GraphError {
    /// Check if this error indicates a missing node
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NodeNotFound { .. })
    }

    /// Get the label that failed to resolve
    pub fn label(&self) -> Option<&str> {
        match self {
            GraphError::NodeNotFound { label } => Some(label),
        }
    }
}

impl From<GraphError> for crate::Error {
    fn from(err: GraphError) -> Self {
        crate::Error::Graph(err)
    }
}
