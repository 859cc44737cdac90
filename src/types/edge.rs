//! Edge records used by both graph representations.

use serde::{Deserialize, Serialize};

/// An outgoing edge as stored in an adjacency list: the source is implied by
/// the list slot holding it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedEdge<W> {
    /// Index of the vertex this edge points to.
    pub target: usize,
    /// Weight of the edge.
    pub weight: W,
}

impl<W> WeightedEdge<W> {
    /// Create a new edge towards `target`.
    pub fn new(target: usize, weight: W) -> Self {
        Self { target, weight }
    }
}

impl<W> From<(usize, W)> for WeightedEdge<W> {
    fn from((target, weight): (usize, W)) -> Self {
        Self { target, weight }
    }
}

/// A fully qualified directed edge, as yielded by [`crate::graph::Graph::edges`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Edge<W> {
    /// Source vertex index.
    pub source: usize,
    /// Target vertex index.
    pub target: usize,
    /// Weight of the edge.
    pub weight: W,
}

impl<W: std::fmt::Display> std::fmt::Display for Edge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -- {} ( {} )", self.source, self.target, self.weight)
    }
}
