//! graph-convert — conversions between adjacency-list and adjacency-matrix
//! representations of weighted directed graphs.
//!
//! Vertices are the indices `0..n`. A list stores each vertex's outgoing
//! edges in insertion order; a matrix stores one weight per ordered pair,
//! zero meaning no edge.

pub mod cli;
pub mod convert;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use convert::{to_list, to_matrix};
pub use format::{to_dot, MatrixTextReader, MatrixTextWriter};
pub use graph::{AdjacencyList, AdjacencyMatrix, Graph, GraphBuilder};
pub use types::{Edge, GraphError, GraphResult, Weight, WeightedEdge};
