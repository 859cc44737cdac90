//! Adjacency-list representation: one ordered edge list per vertex.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::types::{Edge, GraphError, GraphResult, Weight, WeightedEdge};

use super::{AdjacencyMatrix, Graph};

/// Per-vertex lists of outgoing weighted edges.
///
/// Slot `i` holds the edges leaving vertex `i`, in insertion order. Targets
/// are not checked on construction; [`AdjacencyList::validate`] and the
/// conversion to a matrix do that.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList<W> {
    adj: Vec<Vec<WeightedEdge<W>>>,
}

impl<W> AdjacencyList<W> {
    /// Wrap pre-built edge lists.
    pub fn from_vec(adj: Vec<Vec<WeightedEdge<W>>>) -> Self {
        Self { adj }
    }

    /// Number of vertices (slots), whatever the edges reference.
    pub fn len(&self) -> usize {
        self.adj.len()
    }

    /// True for the graph with no vertices.
    pub fn is_empty(&self) -> bool {
        self.adj.is_empty()
    }

    /// Edges leaving `vertex`, or `None` past the last slot.
    pub fn neighbours(&self, vertex: usize) -> Option<&[WeightedEdge<W>]> {
        self.adj.get(vertex).map(Vec::as_slice)
    }

    /// Iterate `(vertex, edges)` pairs in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[WeightedEdge<W>])> + '_ {
        self.adj.iter().map(Vec::as_slice).enumerate()
    }

    /// Borrow inner lists for callers expecting `&[Vec<_>]`.
    pub fn as_slice(&self) -> &[Vec<WeightedEdge<W>>] {
        &self.adj
    }

    /// Unwrap into the inner lists.
    pub fn into_inner(self) -> Vec<Vec<WeightedEdge<W>>> {
        self.adj
    }

    /// Check that every edge target lies in `[0, n)`.
    ///
    /// Reports the first offending edge in iteration order.
    pub fn validate(&self) -> GraphResult<()> {
        let vertices = self.adj.len();
        for (vertex, edges) in self.iter() {
            if let Some(edge) = edges.iter().find(|e| e.target >= vertices) {
                return Err(GraphError::OutOfRangeIndex {
                    vertex,
                    target: edge.target,
                    vertices,
                });
            }
        }
        Ok(())
    }

    /// Number of edge entries that share a `(source, target)` pair with a
    /// later entry, i.e. the entries a matrix cannot keep apart.
    pub fn collapsed_edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|edges| {
                let mut targets: Vec<usize> = edges.iter().map(|e| e.target).collect();
                targets.sort_unstable();
                targets.dedup();
                edges.len() - targets.len()
            })
            .sum()
    }
}

impl<W: Weight> AdjacencyList<W> {
    /// Convert to the dense matrix form. See [`convert::to_matrix`].
    pub fn to_matrix(&self) -> GraphResult<AdjacencyMatrix<W>> {
        convert::to_matrix(self)
    }

    /// Canonical form: each vertex's edges sorted by target, duplicate
    /// targets collapsed to the last weight, zero weights dropped.
    ///
    /// This is exactly what survives a round trip through a matrix.
    pub fn normalized(&self) -> Self {
        let adj = self
            .adj
            .iter()
            .map(|edges| {
                let mut last: BTreeMap<usize, W> = BTreeMap::new();
                for edge in edges {
                    last.insert(edge.target, edge.weight);
                }
                last.into_iter()
                    .filter(|(_, w)| !w.is_zero())
                    .map(|(target, weight)| WeightedEdge::new(target, weight))
                    .collect()
            })
            .collect();
        Self { adj }
    }
}

impl<W> From<Vec<Vec<WeightedEdge<W>>>> for AdjacencyList<W> {
    fn from(adj: Vec<Vec<WeightedEdge<W>>>) -> Self {
        Self::from_vec(adj)
    }
}

impl<W> From<Vec<Vec<(usize, W)>>> for AdjacencyList<W> {
    fn from(pairs: Vec<Vec<(usize, W)>>) -> Self {
        let adj = pairs
            .into_iter()
            .map(|edges| edges.into_iter().map(WeightedEdge::from).collect())
            .collect();
        Self { adj }
    }
}

impl<W: Weight> Graph<W> for AdjacencyList<W> {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn edge_count(&self) -> usize {
        self.adj.iter().map(Vec::len).sum()
    }

    fn weight(&self, i: usize, j: usize) -> GraphResult<W> {
        self.check_index(i)?;
        self.check_index(j)?;
        // The last entry wins, matching what the matrix form would hold.
        Ok(self.adj[i]
            .iter()
            .rev()
            .find(|e| e.target == j)
            .map(|e| e.weight)
            .unwrap_or_default())
    }

    fn edges(&self, i: usize) -> GraphResult<Box<dyn Iterator<Item = Edge<W>> + '_>> {
        self.check_index(i)?;
        let row = &self.adj[i];
        // Only the entries a matrix would keep: the last one per target, if
        // non-zero.
        Ok(Box::new(
            row.iter()
                .enumerate()
                .filter(move |(k, e)| {
                    !e.weight.is_zero()
                        && !row[k + 1..].iter().any(|later| later.target == e.target)
                })
                .map(move |(_, e)| Edge {
                    source: i,
                    target: e.target,
                    weight: e.weight,
                }),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_reports_first_bad_edge() {
        let list = AdjacencyList::from(vec![vec![(1, 1)], vec![(5, 1), (7, 1)]]);
        match list.validate() {
            Err(GraphError::OutOfRangeIndex {
                vertex,
                target,
                vertices,
            }) => {
                assert_eq!((vertex, target, vertices), (1, 5, 2));
            }
            other => panic!("Expected OutOfRangeIndex, got {:?}", other),
        }
    }

    #[test]
    fn collapsed_count() {
        let list = AdjacencyList::from(vec![vec![(0, 1), (0, 2), (1, 3), (0, 4)], vec![]]);
        assert_eq!(list.collapsed_edge_count(), 2);
    }

    #[test]
    fn edges_skip_overridden_and_zero_entries() {
        let list = AdjacencyList::from(vec![vec![(1, 1), (1, 0)], vec![(0, 2), (1, 4), (0, 3)]]);
        assert_eq!(list.edges(0).unwrap().count(), 0);
        let kept: Vec<(usize, i32)> = list
            .edges(1)
            .unwrap()
            .map(|e| (e.target, e.weight))
            .collect();
        assert_eq!(kept, vec![(1, 4), (0, 3)]);
    }

    #[test]
    fn normalized_sorts_and_collapses() {
        let list = AdjacencyList::from(vec![vec![(2, 5), (1, 3), (2, 7), (0, 0)]]);
        assert_eq!(
            list.normalized(),
            AdjacencyList::from(vec![vec![(1, 3), (2, 7)]])
        );
    }
}
