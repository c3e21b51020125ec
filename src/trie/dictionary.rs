//! The plain forward dictionary trie.

use crate::trie::node::{NodeId, ROOT, TrieNode};
use crate::trie::{TrieTraversal, fold_case, prepare_entry};

/// How an insertion updates the frequency payload of the word node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FrequencyUpdate {
    /// Count one more occurrence of the word.
    Increment,
    /// Overwrite with a frequency read from a frequency list.
    Set(u32),
}

/// A prefix trie over a static word list.
///
/// Nodes live in a single arena with the root at index 0. Children are
/// referenced by index, so the tree has no shared nodes and no back-references
/// and is released as a unit when the trie is dropped.
#[derive(Debug, Clone)]
pub struct DictionaryTrie {
    nodes: Vec<TrieNode>,
    word_count: usize,
    max_depth: usize,
}

impl DictionaryTrie {
    /// Create a trie holding no words.
    pub fn new() -> Self {
        DictionaryTrie {
            nodes: vec![TrieNode::new()],
            word_count: 0,
            max_depth: 0,
        }
    }

    /// Build a trie from a stream of raw dictionary lines.
    ///
    /// Entries are trimmed first. Entries that are empty afterwards or longer
    /// than [`MAX_WORD_LEN`](crate::trie::MAX_WORD_LEN) characters are skipped.
    pub fn build<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = DictionaryTrie::new();
        let mut skipped = 0usize;

        for raw in words {
            match prepare_entry(raw.as_ref()) {
                Some(word) => {
                    trie.insert(word);
                }
                None => skipped += 1,
            }
        }

        log::info!(
            "Built trie with {} words ({} nodes, {} entries skipped)",
            trie.word_count,
            trie.nodes.len(),
            skipped
        );
        trie
    }

    /// Build a trie from `(word, frequency)` pairs, e.g. a frequency list.
    pub fn build_with_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: AsRef<str>,
    {
        let mut trie = DictionaryTrie::new();
        for (raw, frequency) in entries {
            if let Some(word) = prepare_entry(raw.as_ref()) {
                trie.insert_with_frequency(word, frequency);
            }
        }
        log::info!("Built trie with {} words from frequency list", trie.word_count);
        trie
    }

    /// Insert a word. Returns `true` if the word was not present before.
    ///
    /// Re-inserting a word does not change the word count but bumps its
    /// frequency by one. Inserting the empty string marks the root.
    pub fn insert(&mut self, word: &str) -> bool {
        self.insert_normalized(&fold_case(word), FrequencyUpdate::Increment)
    }

    /// Insert a word with an explicit frequency, replacing any earlier value.
    pub fn insert_with_frequency(&mut self, word: &str, frequency: u32) -> bool {
        self.insert_normalized(&fold_case(word), FrequencyUpdate::Set(frequency))
    }

    /// Insert a word that is already case folded.
    pub(crate) fn insert_normalized(&mut self, word: &str, update: FrequencyUpdate) -> bool {
        let mut current = ROOT;
        let mut depth = 0;

        for c in word.chars() {
            current = match self.nodes[current].child(c) {
                Some(child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(TrieNode::new());
                    self.nodes[current].add_child(c, child);
                    child
                }
            };
            depth += 1;
        }

        let node = &mut self.nodes[current];
        let added = node.mark_word();
        match update {
            FrequencyUpdate::Increment => node.bump_frequency(),
            FrequencyUpdate::Set(frequency) => node.set_frequency(frequency),
        }

        if added {
            self.word_count += 1;
            self.max_depth = self.max_depth.max(depth);
        }
        added
    }

    fn find(&self, word: &str) -> Option<NodeId> {
        fold_case(word)
            .chars()
            .try_fold(ROOT, |node, c| self.nodes[node].child(c))
    }

    /// Check if a word exists in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some_and(|id| self.nodes[id].is_word())
    }

    /// Get the frequency of a word, or 0 if it is not in the dictionary.
    pub fn frequency(&self, word: &str) -> u32 {
        self.find(word)
            .map(|id| &self.nodes[id])
            .filter(|node| node.is_word())
            .map_or(0, TrieNode::frequency)
    }

    /// Number of distinct words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Length in characters of the longest word.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// All words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut stack = vec![(ROOT, String::new())];

        while let Some((id, prefix)) = stack.pop() {
            let node = &self.nodes[id];
            if node.is_word() {
                words.push(prefix.clone());
            }
            // Reverse so the smallest edge is popped first.
            for &(c, child) in node.children().iter().rev() {
                let mut word = prefix.clone();
                word.push(c);
                stack.push((child, word));
            }
        }

        words
    }
}

impl Default for DictionaryTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl TrieTraversal for DictionaryTrie {
    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }
}

impl<S: AsRef<str>> FromIterator<S> for DictionaryTrie {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        DictionaryTrie::build(iter)
    }
}
