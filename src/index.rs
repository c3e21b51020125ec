//! Variant selection and the search facade used by the CLI.
//!
//! A [`WordIndex`] is one of a closed set of trie layouts, chosen by name at
//! startup. Every variant answers the same query contract; only the internal
//! traversal differs. Ranking, result limits and prefix mode are applied here
//! on top of the variant's raw results.

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::error::{FbTrieError, Result};
use crate::fuzzy::{FuzzySearcher, Ranking, SearchResult};
use crate::trie::{DictionaryTrie, FbTrie};

/// Trie layouts that can be selected by name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrieVariant {
    /// A single forward trie.
    #[default]
    Trie,
    /// Forward and backward tries searched in two phases.
    FbTrie,
}

impl TrieVariant {
    /// All selectable variants.
    pub const ALL: [TrieVariant; 2] = [TrieVariant::Trie, TrieVariant::FbTrie];

    /// The name used to select this variant.
    pub fn name(self) -> &'static str {
        match self {
            TrieVariant::Trie => "trie",
            TrieVariant::FbTrie => "fbtrie",
        }
    }

    /// Resolve a variant name, falling back to [`TrieVariant::Trie`] with a
    /// warning when the name is unknown.
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown trie type '{name}'. Using default 'trie'");
            TrieVariant::Trie
        })
    }
}

impl FromStr for TrieVariant {
    type Err = FbTrieError;

    fn from_str(s: &str) -> Result<Self> {
        TrieVariant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FbTrieError::invalid_argument(format!("unknown trie variant '{s}'")))
    }
}

impl fmt::Display for TrieVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TrieVariant::Trie => "Trie",
            TrieVariant::FbTrie => "FBTrie",
        };
        f.write_str(label)
    }
}

/// Search-time configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Trie layout to build.
    pub variant: TrieVariant,
    /// Ordering of results with equal distance.
    pub ranking: Ranking,
    /// Keep only the best `limit` results.
    pub limit: Option<usize>,
    /// Search top-level subtrees in parallel (plain trie only).
    pub parallel: bool,
    /// Match words that have a prefix within the budget (plain trie only).
    pub prefix: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            variant: TrieVariant::Trie,
            ranking: Ranking::Distance,
            limit: None,
            parallel: false,
            prefix: false,
        }
    }
}

/// Diagnostics about a built index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrieStats {
    pub variant: TrieVariant,
    pub word_count: usize,
    pub node_count: usize,
    pub max_depth: usize,
}

#[derive(Debug, Clone)]
enum Layout {
    Trie(DictionaryTrie),
    FbTrie(FbTrie),
}

/// A built dictionary plus the configuration it is queried with.
#[derive(Debug, Clone)]
pub struct WordIndex {
    layout: Layout,
    config: SearchConfig,
}

impl WordIndex {
    /// Build the configured variant from raw dictionary lines.
    pub fn build<I, S>(words: I, config: SearchConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let layout = match config.variant {
            TrieVariant::Trie => Layout::Trie(DictionaryTrie::build(words)),
            TrieVariant::FbTrie => Layout::FbTrie(FbTrie::build(words)),
        };
        WordIndex::with_layout(layout, config)
    }

    /// Build the configured variant from `(word, frequency)` pairs.
    pub fn build_with_frequencies<I, S>(entries: I, config: SearchConfig) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let layout = match config.variant {
            TrieVariant::Trie => Layout::Trie(DictionaryTrie::build_with_frequencies(entries)),
            TrieVariant::FbTrie => Layout::FbTrie(FbTrie::build_with_frequencies(entries)),
        };
        WordIndex::with_layout(layout, config)
    }

    fn with_layout(layout: Layout, config: SearchConfig) -> Self {
        if config.variant == TrieVariant::FbTrie && (config.parallel || config.prefix) {
            log::warn!("Parallel and prefix search apply to the plain trie only; ignoring for FBTrie");
        }
        WordIndex { layout, config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn variant(&self) -> TrieVariant {
        self.config.variant
    }

    /// Find every word within `max_distance` of `query`, ordered by the
    /// configured ranking and truncated to the configured limit.
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<SearchResult> {
        let mut results = match &self.layout {
            Layout::Trie(trie) => {
                let searcher = FuzzySearcher::new(query, max_distance);
                if self.config.prefix {
                    searcher.search_prefix(trie)
                } else if self.config.parallel {
                    searcher.search_parallel(trie)
                } else {
                    searcher.search(trie)
                }
            }
            Layout::FbTrie(trie) => trie.search(query, max_distance),
        };

        if self.config.ranking != Ranking::Distance {
            self.config.ranking.sort(&mut results);
        }
        if let Some(limit) = self.config.limit {
            results.truncate(limit);
        }
        results
    }

    /// Run [`search`](Self::search) and measure how long it took.
    pub fn timed_search(&self, query: &str, max_distance: usize) -> (Vec<SearchResult>, Duration) {
        let start = Instant::now();
        let results = self.search(query, max_distance);
        (results, start.elapsed())
    }

    pub fn contains(&self, word: &str) -> bool {
        match &self.layout {
            Layout::Trie(trie) => trie.contains(word),
            Layout::FbTrie(trie) => trie.contains(word),
        }
    }

    pub fn word_count(&self) -> usize {
        self.stats().word_count
    }

    pub fn stats(&self) -> TrieStats {
        let (word_count, node_count, max_depth) = match &self.layout {
            Layout::Trie(trie) => (trie.word_count(), trie.node_count(), trie.max_depth()),
            Layout::FbTrie(trie) => (trie.word_count(), trie.node_count(), trie.max_depth()),
        };
        TrieStats {
            variant: self.config.variant,
            word_count,
            node_count,
            max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 4] = ["cat", "cats", "cot", "dog"];

    fn words(results: &[SearchResult]) -> Vec<&str> {
        results.iter().map(|r| r.word.as_str()).collect()
    }

    #[test]
    fn test_variant_names() {
        assert_eq!("trie".parse::<TrieVariant>().unwrap(), TrieVariant::Trie);
        assert_eq!("FBTrie".parse::<TrieVariant>().unwrap(), TrieVariant::FbTrie);
        assert!("patricia".parse::<TrieVariant>().is_err());

        assert_eq!(TrieVariant::from_name("fbtrie"), TrieVariant::FbTrie);
        assert_eq!(TrieVariant::from_name("patricia"), TrieVariant::Trie);

        assert_eq!(TrieVariant::FbTrie.to_string(), "FBTrie");
        assert_eq!(TrieVariant::Trie.name(), "trie");
    }

    #[test]
    fn test_variants_agree() {
        for variant in TrieVariant::ALL {
            let config = SearchConfig {
                variant,
                ..SearchConfig::default()
            };
            let index = WordIndex::build(WORDS, config);
            assert_eq!(index.variant(), variant);
            assert_eq!(words(&index.search("cat", 1)), vec!["cat", "cats", "cot"]);
        }
    }

    #[test]
    fn test_frequency_ranking_and_limit() {
        let config = SearchConfig {
            ranking: Ranking::Frequency,
            limit: Some(2),
            ..SearchConfig::default()
        };
        let index = WordIndex::build_with_frequencies(
            vec![("cat", 5), ("cats", 1), ("cot", 40), ("dog", 100)],
            config,
        );

        assert_eq!(words(&index.search("cat", 1)), vec!["cat", "cot"]);
        assert_eq!(index.search("cat", 1)[1].frequency, 40);
    }

    #[test]
    fn test_prefix_mode() {
        let config = SearchConfig {
            prefix: true,
            ..SearchConfig::default()
        };
        let index = WordIndex::build(["cat", "catalog", "dog"], config);
        assert_eq!(words(&index.search("cat", 0)), vec!["cat", "catalog"]);
    }

    #[test]
    fn test_parallel_mode() {
        let config = SearchConfig {
            parallel: true,
            ..SearchConfig::default()
        };
        let index = WordIndex::build(WORDS, config);
        assert_eq!(words(&index.search("cat", 1)), vec!["cat", "cats", "cot"]);
    }

    #[test]
    fn test_stats() {
        let index = WordIndex::build(WORDS, SearchConfig::default());
        let stats = index.stats();
        assert_eq!(stats.word_count, 4);
        assert_eq!(stats.max_depth, 4);
        // root, c, ca, cat, cats, co, cot, d, do, dog
        assert_eq!(stats.node_count, 10);

        let config = SearchConfig {
            variant: TrieVariant::FbTrie,
            ..SearchConfig::default()
        };
        let fb = WordIndex::build(WORDS, config);
        assert_eq!(fb.stats().word_count, 4);
        assert!(fb.stats().node_count > stats.node_count);
        assert!(fb.contains("COT"));
    }

    #[test]
    fn test_config_deserialization() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"variant":"fbtrie","ranking":"frequency","limit":3}"#)
                .unwrap();
        assert_eq!(config.variant, TrieVariant::FbTrie);
        assert_eq!(config.ranking, Ranking::Frequency);
        assert_eq!(config.limit, Some(3));
        assert!(!config.parallel);
    }
}
