//! Prefix tries that hold the dictionary.
//!
//! [`DictionaryTrie`] is the plain forward trie. [`FbTrie`] pairs a forward
//! trie with a backward one holding every word reversed, which lets the
//! searcher start from whichever half of the query is cheaper to match.
//!
//! Both tries fold words to lowercase on insertion, and the searcher folds the
//! query the same way, so `Cat` and `cat` are the same dictionary entry.

pub mod dictionary;
pub mod fbtrie;
pub mod node;

pub use dictionary::*;
pub use fbtrie::*;
pub use node::*;

/// Entries longer than this many characters are treated as malformed and
/// skipped while building.
pub const MAX_WORD_LEN: usize = 256;

/// Read-only access to a built trie.
///
/// The fuzzy searcher only needs to start at the root, enumerate children and
/// inspect word flags, so it is written against this trait rather than any
/// concrete trie layout.
pub trait TrieTraversal {
    /// Fetch a node by id. Ids handed out by [`TrieNode::children`] are always
    /// valid for the trie that produced them.
    fn node(&self, id: NodeId) -> &TrieNode;

    /// The root node id.
    fn root(&self) -> NodeId {
        ROOT
    }
}

/// Case folding applied to every inserted word and every query.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Trim a raw dictionary entry and reject the malformed ones.
pub(crate) fn prepare_entry(raw: &str) -> Option<&str> {
    let word = raw.trim();
    if word.is_empty() {
        log::debug!("Skipping empty dictionary entry");
        return None;
    }
    if word.chars().count() > MAX_WORD_LEN {
        log::debug!("Skipping dictionary entry longer than {MAX_WORD_LEN} characters");
        return None;
    }
    Some(word)
}
