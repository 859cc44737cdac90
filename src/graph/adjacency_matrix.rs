//! Dense adjacency-matrix representation.

use serde::de::{self, Deserializer};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::convert;
use crate::types::{Edge, GraphError, GraphResult, Weight};

use super::{AdjacencyList, Graph};

/// An `n × n` grid of weights; cell `(i, j)` holds the weight of `i -> j`,
/// zero meaning no edge.
///
/// Cells are stored row-major in one buffer. Always square.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjacencyMatrix<W> {
    n: usize,
    cells: Vec<W>,
}

/// Fail with [`GraphError::NonSquareMatrix`] unless every row is as long as
/// there are rows.
pub(crate) fn check_square<W, R: AsRef<[W]>>(rows: &[R]) -> GraphResult<()> {
    let expected = rows.len();
    for (row, cells) in rows.iter().enumerate() {
        let len = cells.as_ref().len();
        if len != expected {
            return Err(GraphError::NonSquareMatrix { row, len, expected });
        }
    }
    Ok(())
}

impl<W> AdjacencyMatrix<W> {
    /// Build from rows, checking the grid is square.
    pub fn from_rows(rows: Vec<Vec<W>>) -> GraphResult<Self> {
        check_square::<W, _>(&rows)?;
        let n = rows.len();
        let cells = rows.into_iter().flatten().collect();
        Ok(Self { n, cells })
    }

    /// Number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.n
    }

    /// Cell `(i, j)`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<&W> {
        if i < self.n && j < self.n {
            self.cells.get(i * self.n + j)
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Option<&[W]> {
        if i < self.n {
            Some(&self.cells[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[W]> + '_ {
        // chunks(0) panics; an empty matrix has no cells anyway.
        self.cells.chunks(self.n.max(1))
    }

    /// Unwrap into a vector of rows.
    pub fn into_rows(self) -> Vec<Vec<W>> {
        if self.n == 0 {
            return Vec::new();
        }
        let mut rows = Vec::with_capacity(self.n);
        let mut cells = self.cells.into_iter();
        for _ in 0..self.n {
            rows.push(cells.by_ref().take(self.n).collect());
        }
        rows
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, weight: W) {
        self.cells[i * self.n + j] = weight;
    }
}

impl<W: Weight> AdjacencyMatrix<W> {
    /// An `n × n` matrix with no edges.
    pub fn zeros(n: usize) -> Self {
        Self {
            n,
            cells: vec![W::default(); n * n],
        }
    }

    /// Convert to per-vertex edge lists. The matrix is square by
    /// construction, so this cannot fail.
    pub fn to_list(&self) -> AdjacencyList<W> {
        convert::list_from_rows(self.rows())
    }

    /// The matrix of the reversed graph: `(j, i)` takes the weight of `(i, j)`.
    pub fn transpose(&self) -> Self {
        let mut transposed = Self::zeros(self.n);
        for i in 0..self.n {
            for j in 0..self.n {
                transposed.set(j, i, self.cells[i * self.n + j]);
            }
        }
        transposed
    }
}

impl<W: Weight> Graph<W> for AdjacencyMatrix<W> {
    fn vertex_count(&self) -> usize {
        self.n
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|w| !w.is_zero()).count()
    }

    fn weight(&self, i: usize, j: usize) -> GraphResult<W> {
        self.check_index(i)?;
        self.check_index(j)?;
        Ok(self.cells[i * self.n + j])
    }

    fn edges(&self, i: usize) -> GraphResult<Box<dyn Iterator<Item = Edge<W>> + '_>> {
        self.check_index(i)?;
        let row = &self.cells[i * self.n..(i + 1) * self.n];
        Ok(Box::new(
            row.iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(move |(j, &weight)| Edge {
                    source: i,
                    target: j,
                    weight,
                }),
        ))
    }
}

impl<W: Serialize> Serialize for AdjacencyMatrix<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rows())
    }
}

impl<'de, W: Deserialize<'de>> Deserialize<'de> for AdjacencyMatrix<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = Vec::<Vec<W>>::deserialize(deserializer)?;
        Self::from_rows(rows).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_roundtrip() {
        let rows = vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8]];
        let m = AdjacencyMatrix::from_rows(rows.clone()).unwrap();
        assert_eq!(m.dimension(), 3);
        assert_eq!(m.get(1, 2), Some(&5));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.row(2), Some(&[6, 7, 8][..]));
        assert_eq!(m.rows().count(), 3);
        assert_eq!(m.into_rows(), rows);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let m: AdjacencyMatrix<i64> = AdjacencyMatrix::zeros(0);
        assert_eq!(m.rows().count(), 0);
        assert!(m.into_rows().is_empty());
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = AdjacencyMatrix::from_rows(vec![vec![1, 2], vec![3]]).unwrap_err();
        match err {
            GraphError::NonSquareMatrix { row, len, expected } => {
                assert_eq!((row, len, expected), (1, 1, 2));
            }
            e => panic!("Expected NonSquareMatrix, got {:?}", e),
        }
    }
}
