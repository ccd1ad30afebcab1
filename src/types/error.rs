//! Error types for the edge-graph library.

use thiserror::Error;

/// All errors that can occur in the edge-graph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A rendering call was made before a vertex formatter was bound.
    #[error("No vertex formatter bound to the renderer")]
    MissingFormatter,

    /// Edge-list text could not be parsed.
    #[error("Invalid edge: {0:?} (expected A-B or A:B)")]
    InvalidEdge(String),

    /// A vertex label in edge-list text was blank.
    #[error("Empty vertex label in edge list")]
    EmptyVertex,

    /// IO error from a line sink.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for edge-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
