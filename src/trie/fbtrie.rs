//! Forward/backward trie pair.
//!
//! A plain trie search branches heavily in the top levels, where every short
//! prefix is still within budget. The FB-trie splits the query in two halves
//! `q1 q2` and runs two searches that each start with a reduced budget:
//!
//! * forward trie, budget `(k - 1) / 2` on `q1`, then `k`;
//! * backward trie (words reversed), budget `k / 2` on reversed `q2`, then `k`.
//!
//! A word within distance `k` splits into `w1 w2` with
//! `d(q1, w1) + d(q2, w2) <= k`. Both halves cannot exceed their budgets,
//! since that would need at least `(k - 1) / 2 + 1 + k / 2 + 1 = k + 1`
//! edits, so one of the two searches reaches it.

use crate::fuzzy::result::{Ranking, SearchResult, merge_unique};
use crate::fuzzy::searcher::FuzzySearcher;
use crate::trie::dictionary::{DictionaryTrie, FrequencyUpdate};
use crate::trie::{fold_case, prepare_entry};

/// A forward trie plus a trie of every word reversed.
#[derive(Debug, Clone, Default)]
pub struct FbTrie {
    forward: DictionaryTrie,
    backward: DictionaryTrie,
}

impl FbTrie {
    /// Create an empty FB-trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from raw dictionary lines, skipping malformed ones like
    /// [`DictionaryTrie::build`].
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = FbTrie::new();
        for raw in words {
            if let Some(word) = prepare_entry(raw.as_ref()) {
                trie.insert(word);
            }
        }
        log::info!(
            "Built FB-trie with {} words ({} + {} nodes)",
            trie.word_count(),
            trie.forward.node_count(),
            trie.backward.node_count()
        );
        trie
    }

    /// Build from `(word, frequency)` pairs.
    pub fn build_with_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut trie = FbTrie::new();
        for (raw, frequency) in entries {
            if let Some(word) = prepare_entry(raw.as_ref()) {
                trie.insert_with_frequency(word, frequency);
            }
        }
        log::info!("Built FB-trie with {} words from frequency list", trie.word_count());
        trie
    }

    /// Insert a word into both tries. Returns `true` if it was new.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_with(word, FrequencyUpdate::Increment)
    }

    /// Insert a word with an explicit frequency.
    pub fn insert_with_frequency(&mut self, word: &str, frequency: u32) -> bool {
        self.insert_with(word, FrequencyUpdate::Set(frequency))
    }

    fn insert_with(&mut self, word: &str, update: FrequencyUpdate) -> bool {
        let folded = fold_case(word);
        let reversed: String = folded.chars().rev().collect();
        self.backward.insert_normalized(&reversed, update);
        self.forward.insert_normalized(&folded, update)
    }

    /// The trie holding words as-is.
    pub fn forward(&self) -> &DictionaryTrie {
        &self.forward
    }

    /// The trie holding every word reversed.
    pub fn backward(&self) -> &DictionaryTrie {
        &self.backward
    }

    pub fn contains(&self, word: &str) -> bool {
        self.forward.contains(word)
    }

    pub fn word_count(&self) -> usize {
        self.forward.word_count()
    }

    /// Nodes across both tries.
    pub fn node_count(&self) -> usize {
        self.forward.node_count() + self.backward.node_count()
    }

    pub fn max_depth(&self) -> usize {
        self.forward.max_depth()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Find every word within `max_distance` of `query`, sorted by distance
    /// then word. Same contract as [`FuzzySearcher::search`].
    pub fn search(&self, query: &str, max_distance: usize) -> Vec<SearchResult> {
        let query: Vec<char> = fold_case(query).chars().collect();
        let split = query.len() / 2;

        let mut found = Vec::new();

        // With k = 0 the forward budget would be negative; the backward
        // search alone covers exact matches.
        if max_distance > 0 {
            let forward = FuzzySearcher::from_chars(query.clone(), max_distance);
            found.extend(forward.search_phased(&self.forward, split, (max_distance - 1) / 2));
        }

        let reversed: Vec<char> = query.iter().rev().copied().collect();
        let backward = FuzzySearcher::from_chars(reversed, max_distance);
        found.extend(
            backward
                .search_phased(&self.backward, query.len() - split, max_distance / 2)
                .into_iter()
                .map(|mut result| {
                    result.word = result.word.chars().rev().collect();
                    result
                }),
        );

        let mut results = merge_unique(found);
        Ranking::Distance.sort(&mut results);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::levenshtein::levenshtein_distance;

    fn pairs(results: &[SearchResult]) -> Vec<(&str, usize)> {
        results
            .iter()
            .map(|r| (r.word.as_str(), r.distance))
            .collect()
    }

    #[test]
    fn test_insert_fills_both_tries() {
        let mut trie = FbTrie::new();
        assert!(trie.insert("Abc"));
        assert!(!trie.insert("abc"));

        assert!(trie.forward().contains("abc"));
        assert!(trie.backward().contains("cba"));
        assert!(!trie.backward().contains("abc"));
        assert_eq!(trie.word_count(), 1);
        assert_eq!(trie.forward().frequency("abc"), 2);
        assert_eq!(trie.backward().frequency("cba"), 2);
    }

    #[test]
    fn test_cat_scenario() {
        let trie = FbTrie::build(["cat", "cats", "cot", "dog"]);
        let results = trie.search("cat", 1);
        assert_eq!(pairs(&results), vec![("cat", 0), ("cats", 1), ("cot", 1)]);
    }

    #[test]
    fn test_exact_match_at_zero() {
        let trie = FbTrie::build(["cat", "cats", "cot", "dog"]);
        assert_eq!(pairs(&trie.search("dog", 0)), vec![("dog", 0)]);
        assert!(trie.search("do", 0).is_empty());
    }

    #[test]
    fn test_words_found_in_both_phases_are_reported_once() {
        let trie = FbTrie::build(["hello"]);
        let results = trie.search("hello", 4);
        assert_eq!(pairs(&results), vec![("hello", 0)]);
    }

    #[test]
    fn test_errors_in_either_half() {
        let trie = FbTrie::build(["abcdef"]);
        // Error in the first half only, then in the second half only.
        assert_eq!(pairs(&trie.search("xbcdef", 1)), vec![("abcdef", 1)]);
        assert_eq!(pairs(&trie.search("abcdex", 1)), vec![("abcdef", 1)]);
        // One error in each half.
        assert_eq!(pairs(&trie.search("xbcdex", 2)), vec![("abcdef", 2)]);
        assert!(trie.search("xbcdex", 1).is_empty());
    }

    #[test]
    fn test_empty_word_and_empty_query() {
        let mut trie = FbTrie::new();
        trie.insert("");
        trie.insert("a");

        assert_eq!(pairs(&trie.search("", 0)), vec![("", 0)]);
        assert_eq!(pairs(&trie.search("", 1)), vec![("", 0), ("a", 1)]);
        assert_eq!(pairs(&trie.search("b", 1)), vec![("", 1), ("a", 1)]);
    }

    #[test]
    fn test_matches_brute_force() {
        let words = [
            "kitten", "sitting", "bitten", "kitchen", "mitten", "smitten", "kit", "sit", "knit",
            "it", "a",
        ];
        let trie = FbTrie::build(words);

        for query in ["kitten", "sittin", "kn", "itten", "zzz", "k", "mittens"] {
            for k in 0..5 {
                let mut expected: Vec<(&str, usize)> = words
                    .iter()
                    .map(|&w| (w, levenshtein_distance(query, w)))
                    .filter(|&(_, d)| d <= k)
                    .collect();
                expected.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(b.0)));
                assert_eq!(pairs(&trie.search(query, k)), expected, "query {query} k {k}");
            }
        }
    }
}
