//! # fbtrie
//!
//! Approximate dictionary lookup: given a query and an edit-distance budget
//! `k`, find every dictionary word within `k` Levenshtein edits of the query.
//!
//! ## Features
//!
//! - Arena-backed prefix trie built once from a word list
//! - Levenshtein rows propagated along trie edges, with exact pruning
//! - Forward/backward trie pair (FB-trie) with a two-phase split-query search
//! - Parallel and prefix search modes
//! - Distance or frequency tie-breaking, optional top-N results
//!
//! ```
//! use fbtrie::fuzzy::search;
//! use fbtrie::trie::DictionaryTrie;
//!
//! let trie = DictionaryTrie::build(["cat", "cats", "cot", "dog"]);
//! let words: Vec<_> = search(&trie, "cat", 1).into_iter().map(|r| r.word).collect();
//! assert_eq!(words, ["cat", "cats", "cot"]);
//! ```

pub mod cli;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod loader;
pub mod trie;

pub mod prelude {
    pub use crate::error::{FbTrieError, Result};
    pub use crate::fuzzy::{FuzzySearcher, Ranking, SearchResult, search, validate_max_distance};
    pub use crate::index::{SearchConfig, TrieStats, TrieVariant, WordIndex};
    pub use crate::trie::{DictionaryTrie, FbTrie, TrieTraversal};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
