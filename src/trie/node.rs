//! Arena node type shared by the trie variants.

/// Index of a node inside a trie's node table. The root is always `0`.
pub type NodeId = usize;

/// Index of the root node in every trie arena.
pub const ROOT: NodeId = 0;

/// A single trie node.
///
/// Children are kept sorted by their edge character so lookups can binary
/// search and traversal order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrieNode {
    children: Vec<(char, NodeId)>,
    is_word: bool,
    /// Number of times the word ending here was inserted, or an explicit
    /// frequency from a frequency list. Zero for non-word nodes.
    frequency: u32,
}

impl TrieNode {
    /// Create an empty, non-word node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Outgoing edges, sorted by character.
    pub fn children(&self) -> &[(char, NodeId)] {
        &self.children
    }

    /// Look up the child reached by `c`.
    pub fn child(&self, c: char) -> Option<NodeId> {
        self.children
            .binary_search_by_key(&c, |&(edge, _)| edge)
            .ok()
            .map(|index| self.children[index].1)
    }

    /// Whether the path from the root to this node spells a dictionary word.
    pub fn is_word(&self) -> bool {
        self.is_word
    }

    /// Frequency payload of the word ending here.
    pub fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Register a new edge. The caller guarantees `c` is not present yet.
    pub(crate) fn add_child(&mut self, c: char, id: NodeId) {
        match self.children.binary_search_by_key(&c, |&(edge, _)| edge) {
            Ok(index) => self.children[index].1 = id,
            Err(index) => self.children.insert(index, (c, id)),
        }
    }

    /// Mark the node as a word. Returns `true` if it was not one before.
    pub(crate) fn mark_word(&mut self) -> bool {
        let newly_marked = !self.is_word;
        self.is_word = true;
        newly_marked
    }

    pub(crate) fn bump_frequency(&mut self) {
        self.frequency = self.frequency.saturating_add(1);
    }

    pub(crate) fn set_frequency(&mut self, frequency: u32) {
        self.frequency = frequency;
    }
}
