//! Bounded edit-distance search.
//!
//! This module provides the Levenshtein row propagation used to walk a trie,
//! the searcher built on it, the result types, and a whole-string Levenshtein
//! reference implementation.

pub mod levenshtein;
pub mod result;
pub mod row;
pub mod searcher;

pub use levenshtein::*;
pub use result::*;
pub use row::*;
pub use searcher::*;

use crate::error::{FbTrieError, Result};
use crate::trie::TrieTraversal;

/// Find every word in `trie` within `max_distance` edits of `query`.
///
/// Results are sorted by distance, then word. An empty result is a normal
/// outcome, not an error.
pub fn search<T: TrieTraversal + ?Sized>(
    trie: &T,
    query: &str,
    max_distance: usize,
) -> Vec<SearchResult> {
    FuzzySearcher::new(query, max_distance).search(trie)
}

/// Turn a signed distance budget from user input into a `usize`.
///
/// A negative budget is a contract violation and is rejected instead of being
/// clamped to zero.
pub fn validate_max_distance(max_distance: i64) -> Result<usize> {
    usize::try_from(max_distance).map_err(|_| {
        FbTrieError::invalid_argument(format!(
            "maximum edit distance must be non-negative, got {max_distance}"
        ))
    })
}
