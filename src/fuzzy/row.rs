//! Incremental Levenshtein rows.

use std::cmp::min;

/// One row of the Levenshtein table, tied to a node of the trie.
///
/// `row[i]` is the edit distance between the first `i` query characters and
/// the path spelled from the root to the node. `row[0]` is therefore the
/// node's depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceRow {
    cells: Vec<usize>,
}

impl DistanceRow {
    /// Row of the root: turning `i` query characters into the empty path costs `i`.
    pub fn initial(query_len: usize) -> Self {
        DistanceRow {
            cells: (0..=query_len).collect(),
        }
    }

    /// Compute the row of the child reached through edge `c`.
    pub fn step(&self, c: char, query: &[char]) -> Self {
        debug_assert_eq!(self.cells.len(), query.len() + 1);

        let mut cells = Vec::with_capacity(self.cells.len());
        cells.push(self.cells[0] + 1);

        for (i, &q) in query.iter().enumerate() {
            let cost = if q == c { 0 } else { 1 };
            let value = min(
                min(
                    self.cells[i + 1] + 1, // deletion from the trie path
                    cells[i] + 1,          // insertion into the trie path
                ),
                self.cells[i] + cost, // substitution
            );
            cells.push(value);
        }

        DistanceRow { cells }
    }

    /// Distance from the whole query to the current path.
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }

    /// Distance from the first `len` query characters to the current path.
    pub fn prefix_distance(&self, len: usize) -> usize {
        self.cells[len]
    }

    /// Smallest entry in the row.
    ///
    /// Any word extending the current path is at least this far from the
    /// query, which is what makes pruning on it exact.
    pub fn min(&self) -> usize {
        self.cells.iter().copied().min().unwrap_or(0)
    }

    /// Smallest entry among the first `len + 1` cells, i.e. the lower bound
    /// on the distance between the query's first `len` characters and any
    /// extension of the current path.
    pub fn min_prefix(&self, len: usize) -> usize {
        self.cells[..=len].iter().copied().min().unwrap_or(0)
    }

    /// Depth of the node this row belongs to.
    pub fn depth(&self) -> usize {
        self.cells[0]
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.cells
    }
}
