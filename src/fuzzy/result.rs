//! Search results and their ordering.

use std::cmp::Ordering;
use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A dictionary word matched by a fuzzy search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchResult {
    /// The matched dictionary word.
    pub word: String,
    /// Edit distance from the query.
    pub distance: usize,
    /// Frequency payload of the word in the dictionary.
    pub frequency: u32,
}

impl SearchResult {
    /// Create a new search result.
    pub fn new(word: String, distance: usize, frequency: u32) -> Self {
        SearchResult {
            word,
            distance,
            frequency,
        }
    }
}

/// Secondary ordering applied to results of equal distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Ranking {
    /// Distance, then word in lexicographic order.
    #[default]
    Distance,
    /// Distance, then higher frequency first, then word.
    Frequency,
}

impl Ranking {
    /// Compare two results under this ranking.
    pub fn compare(self, a: &SearchResult, b: &SearchResult) -> Ordering {
        let by_distance = a.distance.cmp(&b.distance);
        match self {
            Ranking::Distance => by_distance.then_with(|| a.word.cmp(&b.word)),
            Ranking::Frequency => by_distance
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| a.word.cmp(&b.word)),
        }
    }

    /// Sort results in place.
    pub fn sort(self, results: &mut [SearchResult]) {
        results.sort_by(|a, b| self.compare(a, b));
    }
}

/// Merge result lists that may report the same word more than once,
/// keeping the smallest distance seen for each word.
pub(crate) fn merge_unique<I>(results: I) -> Vec<SearchResult>
where
    I: IntoIterator<Item = SearchResult>,
{
    let mut best: HashMap<String, SearchResult> = HashMap::new();
    for result in results {
        match best.get_mut(&result.word) {
            Some(existing) if existing.distance <= result.distance => {}
            Some(existing) => *existing = result,
            None => {
                best.insert(result.word.clone(), result);
            }
        }
    }
    best.into_values().collect()
}
