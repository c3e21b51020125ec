//! Bounded edit-distance search over a trie.
//!
//! The searcher walks the trie once, carrying one [`DistanceRow`] per visited
//! node. A child's row is derived from its parent's row in `O(query length)`,
//! so words sharing a prefix share the work for that prefix. Subtrees whose
//! row minimum already exceeds the budget are never entered.

use rayon::prelude::*;

use crate::fuzzy::result::{Ranking, SearchResult};
use crate::fuzzy::row::DistanceRow;
use crate::trie::{NodeId, TrieTraversal, fold_case};

/// A pending node in the depth-first worklist.
#[derive(Debug, Clone)]
struct Frame {
    node: NodeId,
    row: DistanceRow,
    word: String,
}

impl Frame {
    fn root<T: TrieTraversal + ?Sized>(trie: &T, query_len: usize) -> Self {
        Frame {
            node: trie.root(),
            row: DistanceRow::initial(query_len),
            word: String::new(),
        }
    }

    fn child(&self, c: char, node: NodeId, query: &[char]) -> Self {
        let mut word = String::with_capacity(self.word.len() + c.len_utf8());
        word.push_str(&self.word);
        word.push(c);
        Frame {
            node,
            row: self.row.step(c, query),
            word,
        }
    }
}

/// Where a phased traversal currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Still matching the first `split` query characters under the reduced budget.
    Head,
    /// Head matched; the full budget applies.
    Full,
}

/// A prepared fuzzy query: the case-folded query and its distance budget.
///
/// The searcher holds no trie state and can be reused against any number of
/// tries, including from several threads at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzySearcher {
    query: Vec<char>,
    max_distance: usize,
}

impl FuzzySearcher {
    /// Prepare a query. The query is case folded like dictionary words.
    pub fn new(query: &str, max_distance: usize) -> Self {
        FuzzySearcher {
            query: fold_case(query).chars().collect(),
            max_distance,
        }
    }

    /// Prepare a query from characters that are already case folded.
    pub(crate) fn from_chars(query: Vec<char>, max_distance: usize) -> Self {
        FuzzySearcher {
            query,
            max_distance,
        }
    }

    pub fn query(&self) -> &[char] {
        &self.query
    }

    pub fn max_distance(&self) -> usize {
        self.max_distance
    }

    /// Find every word within the distance budget, sorted by distance then word.
    pub fn search<T: TrieTraversal + ?Sized>(&self, trie: &T) -> Vec<SearchResult> {
        let mut results = Vec::new();
        let visited = self.collect(trie, vec![Frame::root(trie, self.query.len())], &mut results);
        log::debug!(
            "Visited {visited} nodes, {} matches within {}",
            results.len(),
            self.max_distance
        );

        Ranking::Distance.sort(&mut results);
        results
    }

    /// Same results as [`search`](Self::search), with the root's subtrees
    /// searched in parallel.
    pub fn search_parallel<T: TrieTraversal + Sync + ?Sized>(&self, trie: &T) -> Vec<SearchResult> {
        let root = Frame::root(trie, self.query.len());
        let mut results = Vec::new();
        self.emit(trie, &root, root.row.distance(), &mut results);

        let subtrees: Vec<Frame> = trie
            .node(root.node)
            .children()
            .iter()
            .map(|&(c, child)| root.child(c, child, &self.query))
            .filter(|frame| frame.row.min() <= self.max_distance)
            .collect();

        results.par_extend(subtrees.into_par_iter().flat_map_iter(|frame| {
            let mut found = Vec::new();
            self.collect(trie, vec![frame], &mut found);
            found
        }));

        Ranking::Distance.sort(&mut results);
        results
    }

    /// Find every word that has a prefix within the distance budget.
    ///
    /// Each word is reported with the smallest distance between the query and
    /// any of its prefixes (the word itself included).
    pub fn search_prefix<T: TrieTraversal + ?Sized>(&self, trie: &T) -> Vec<SearchResult> {
        let mut results = Vec::new();
        let mut stack = vec![(Frame::root(trie, self.query.len()), None::<usize>)];

        while let Some((frame, best)) = stack.pop() {
            let here = frame.row.distance();
            let best = match best {
                Some(best) => Some(best.min(here)),
                None if here <= self.max_distance => Some(here),
                None => None,
            };

            if let Some(distance) = best {
                self.emit(trie, &frame, distance, &mut results);
            }

            for &(c, child) in trie.node(frame.node).children() {
                let next = frame.child(c, child, &self.query);
                if best.is_some() || next.row.min() <= self.max_distance {
                    stack.push((next, best));
                }
            }
        }

        Ranking::Distance.sort(&mut results);
        results
    }

    /// Two-phase traversal used by the forward/backward trie.
    ///
    /// Until the path matches the first `split` query characters within
    /// `head_limit`, subtrees are pruned against `head_limit` on that part of
    /// the row. From the first node where it does, the full budget applies.
    /// Results are unsorted.
    pub(crate) fn search_phased<T: TrieTraversal + ?Sized>(
        &self,
        trie: &T,
        split: usize,
        head_limit: usize,
    ) -> Vec<SearchResult> {
        debug_assert!(split <= self.query.len());

        let mut results = Vec::new();
        let mut stack = vec![(Frame::root(trie, self.query.len()), Phase::Head)];

        while let Some((frame, phase)) = stack.pop() {
            let phase = match phase {
                Phase::Head if frame.row.prefix_distance(split) <= head_limit => Phase::Full,
                phase => phase,
            };

            self.emit(trie, &frame, frame.row.distance(), &mut results);

            for &(c, child) in trie.node(frame.node).children() {
                let next = frame.child(c, child, &self.query);
                if next.row.min() > self.max_distance {
                    continue;
                }
                if phase == Phase::Head && next.row.min_prefix(split) > head_limit {
                    continue;
                }
                stack.push((next, phase));
            }
        }

        results
    }

    /// Depth-first walk from the given frames. Returns the number of nodes visited.
    fn collect<T: TrieTraversal + ?Sized>(
        &self,
        trie: &T,
        mut stack: Vec<Frame>,
        results: &mut Vec<SearchResult>,
    ) -> usize {
        let mut visited = 0;

        while let Some(frame) = stack.pop() {
            visited += 1;
            self.emit(trie, &frame, frame.row.distance(), results);

            for &(c, child) in trie.node(frame.node).children() {
                let next = frame.child(c, child, &self.query);
                if next.row.min() <= self.max_distance {
                    stack.push(next);
                }
            }
        }

        visited
    }

    fn emit<T: TrieTraversal + ?Sized>(
        &self,
        trie: &T,
        frame: &Frame,
        distance: usize,
        results: &mut Vec<SearchResult>,
    ) {
        let node = trie.node(frame.node);
        if node.is_word() && distance <= self.max_distance {
            results.push(SearchResult::new(
                frame.word.clone(),
                distance,
                node.frequency(),
            ));
        }
    }
}
