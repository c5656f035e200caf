//! Error types for the graph-theory library.

use thiserror::Error;

use super::Weight;

/// All errors that can occur in the graph-theory library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex label was never inserted into the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Edge weight is not usable by a shortest-path algorithm.
    #[error("Negative weight {weight} on edge {from} -> {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: Weight,
    },

    /// A shortest distance does not fit in [`Weight`].
    #[error("Distance from {from} to {to} overflows the weight range")]
    DistanceOverflow { from: String, to: String },

    /// Malformed edge-list input.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
