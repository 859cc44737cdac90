//! Graph representations — adjacency lists and adjacency matrices.

pub mod adjacency_list;
pub mod adjacency_matrix;
pub mod builder;

pub use adjacency_list::AdjacencyList;
pub use adjacency_matrix::AdjacencyMatrix;
pub use builder::GraphBuilder;

use crate::types::{Edge, GraphError, GraphResult, Weight};

/// Read-only view shared by both representations.
pub trait Graph<W: Weight> {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of stored edges.
    ///
    /// A list counts every entry, duplicates included; a matrix counts
    /// non-zero cells.
    fn edge_count(&self) -> usize;

    /// Weight of the edge `i -> j`, or zero when there is none.
    fn weight(&self, i: usize, j: usize) -> GraphResult<W>;

    /// Outgoing edges of vertex `i`.
    fn edges(&self, i: usize) -> GraphResult<Box<dyn Iterator<Item = Edge<W>> + '_>>;

    /// Whether `i -> j` carries a non-zero weight.
    fn is_edge(&self, i: usize, j: usize) -> GraphResult<bool> {
        Ok(!self.weight(i, j)?.is_zero())
    }

    /// Fail with [`GraphError::VertexOutOfRange`] unless `index < n`.
    fn check_index(&self, index: usize) -> GraphResult<()> {
        let vertices = self.vertex_count();
        if index >= vertices {
            return Err(GraphError::VertexOutOfRange { index, vertices });
        }
        Ok(())
    }
}
