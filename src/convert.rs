//! Conversions between the list and matrix representations.
//!
//! Both directions are pure: inputs are validated up front, nothing is
//! returned on failure, and the input is never modified.
//!
//! The matrix encoding is lossy. It keeps one weight per `(i, j)` pair (the
//! last one written) and cannot tell a zero-weighted edge from no edge, so
//! `to_list(to_matrix(l))` equals `l.normalized()` rather than `l`.

use crate::graph::adjacency_matrix::check_square;
use crate::graph::{AdjacencyList, AdjacencyMatrix};
use crate::types::{GraphResult, Weight, WeightedEdge};

/// Adjacency list → adjacency matrix.
///
/// Fails with [`crate::GraphError::OutOfRangeIndex`] if any edge target is
/// `>= n`. Duplicate targets of one vertex collapse to the weight of the
/// last such edge.
pub fn to_matrix<W: Weight>(list: &AdjacencyList<W>) -> GraphResult<AdjacencyMatrix<W>> {
    list.validate()?;
    let matrix = fill_matrix(list);
    log::debug!(
        "Converted adjacency list to {n}x{n} matrix ({} edges)",
        list.as_slice().iter().map(Vec::len).sum::<usize>(),
        n = list.len()
    );
    if log::log_enabled!(log::Level::Debug) {
        let collapsed = list.collapsed_edge_count();
        if collapsed > 0 {
            log::debug!("{} duplicate edges collapsed to their last weight", collapsed);
        }
    }
    Ok(matrix)
}

/// Adjacency matrix rows → adjacency list.
///
/// Fails with [`crate::GraphError::NonSquareMatrix`] unless every row has
/// as many cells as there are rows. Each vertex's edges come out in
/// increasing target order; zero cells produce no edge.
pub fn to_list<W: Weight, R: AsRef<[W]>>(rows: &[R]) -> GraphResult<AdjacencyList<W>> {
    check_square::<W, R>(rows)?;
    let list = list_from_rows(rows.iter().map(AsRef::as_ref));
    log::debug!("Converted {n}x{n} matrix to adjacency list", n = rows.len());
    Ok(list)
}

/// Write every edge of an already validated list into a zero matrix.
pub(crate) fn fill_matrix<W: Weight>(list: &AdjacencyList<W>) -> AdjacencyMatrix<W> {
    let mut matrix = AdjacencyMatrix::zeros(list.len());
    for (i, edges) in list.iter() {
        for edge in edges {
            matrix.set(i, edge.target, edge.weight);
        }
    }
    matrix
}

/// Scan square rows column by column, keeping non-zero cells.
pub(crate) fn list_from_rows<'a, W, I>(rows: I) -> AdjacencyList<W>
where
    W: Weight,
    I: Iterator<Item = &'a [W]>,
{
    let adj = rows
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(j, &w)| WeightedEdge::new(j, w))
                .collect()
        })
        .collect();
    AdjacencyList::from_vec(adj)
}
