//! Fluent API for building graphs edge by edge.

use crate::convert;
use crate::types::{GraphError, GraphResult, Weight, WeightedEdge};

use super::{AdjacencyList, AdjacencyMatrix};

/// Fluent builder for a graph with a fixed number of vertices.
///
/// Indices are checked as edges are added, so the finished graph always
/// converts without error.
pub struct GraphBuilder<W> {
    adj: Vec<Vec<WeightedEdge<W>>>,
}

impl<W: Weight> GraphBuilder<W> {
    /// Create a builder for `vertices` vertices and no edges.
    pub fn new(vertices: usize) -> Self {
        Self {
            adj: vec![Vec::new(); vertices],
        }
    }

    fn check_index(&self, index: usize) -> GraphResult<()> {
        let vertices = self.adj.len();
        if index >= vertices {
            return Err(GraphError::VertexOutOfRange { index, vertices });
        }
        Ok(())
    }

    /// Add a directed edge `source -> target`.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: W) -> GraphResult<&mut Self> {
        self.check_index(source)?;
        self.check_index(target)?;
        self.adj[source].push(WeightedEdge::new(target, weight));
        Ok(self)
    }

    /// Finish as an adjacency list, edges in insertion order.
    pub fn build_list(self) -> AdjacencyList<W> {
        AdjacencyList::from_vec(self.adj)
    }

    /// Finish as an adjacency matrix.
    pub fn build_matrix(self) -> AdjacencyMatrix<W> {
        convert::fill_matrix(&AdjacencyList::from_vec(self.adj))
    }
}
