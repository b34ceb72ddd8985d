//! Error types for the incidence graph library.

use thiserror::Error;

use super::{EdgeHandle, VertexHandle};

/// All errors that can occur in the incidence graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Position was issued by a different list instance.
    #[error("Position does not belong to this list")]
    ForeignPosition,

    /// Position names a node that has already been removed.
    #[error("Position refers to a removed node")]
    StalePosition,

    /// Vertex handle is stale or belongs to another graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(VertexHandle),

    /// Edge handle is stale or belongs to another graph.
    #[error("Edge {0} not found")]
    EdgeNotFound(EdgeHandle),

    /// Edge weight is NaN or infinite.
    #[error("Edge weight must be finite: {0}")]
    InvalidWeight(f64),

    /// Shortest paths met an edge with a negative weight.
    #[error("Negative weight {weight} on edge {edge}")]
    NegativeWeight { edge: EdgeHandle, weight: f64 },

    /// Builder or reader index outside the declared vertex range.
    #[error("Vertex index {index} out of range for size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Graph description could not be parsed.
    #[error("Format error on line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Graph holds a value the description format cannot express.
    #[error("Cannot write description: {0}")]
    Unwritable(String),

    /// A vertex/edge cross-reference does not match list membership.
    #[error("Corrupt incidence structure: {0}")]
    Corrupt(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
