//! Error types for the graph-convert library.

use thiserror::Error;

/// All errors that can occur while building, converting or parsing graphs.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An edge in an adjacency list points outside `[0, n)`.
    #[error("Edge {vertex} -> {target} is out of range for {vertices} vertices")]
    OutOfRangeIndex {
        vertex: usize,
        target: usize,
        vertices: usize,
    },

    /// A matrix row does not have as many columns as the matrix has rows.
    #[error("Matrix is not square: row {row} has {len} columns, expected {expected}")]
    NonSquareMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },

    /// A vertex index passed to an accessor is outside `[0, n)`.
    #[error("Vertex index {index} is out of range for {vertices} vertices")]
    VertexOutOfRange { index: usize, vertices: usize },

    /// Malformed matrix text input.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// JSON encoding or decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Convenience result type for graph-convert operations.
pub type GraphResult<T> = Result<T, GraphError>;
