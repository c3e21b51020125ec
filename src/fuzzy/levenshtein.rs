//! Whole-string Levenshtein distance.
//!
//! The trie searchers never call these; they exist as the reference that trie
//! results are checked against and as the linear-scan baseline in benchmarks.

use std::cmp::min;

use crate::fuzzy::result::SearchResult;
use crate::trie::fold_case;

/// Calculate the Levenshtein distance between two strings, counted in chars.
pub fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, &a) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, &b) in s2_chars.iter().enumerate() {
            let cost = if a == b { 0 } else { 1 };
            curr_row[j + 1] = min(
                min(
                    prev_row[j + 1] + 1, // deletion
                    curr_row[j] + 1,     // insertion
                ),
                prev_row[j] + cost, // substitution
            );
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[s2_chars.len()]
}

/// Calculate Levenshtein distance with a maximum threshold for early termination.
/// Returns None if the distance exceeds the threshold.
pub fn levenshtein_distance_threshold(s1: &str, s2: &str, threshold: usize) -> Option<usize> {
    let s1_chars: Vec<char> = s1.chars().collect();
    let s2_chars: Vec<char> = s2.chars().collect();

    if s1_chars.len().abs_diff(s2_chars.len()) > threshold {
        return None;
    }

    let mut prev_row: Vec<usize> = (0..=s2_chars.len()).collect();
    let mut curr_row = vec![0; s2_chars.len() + 1];

    for (i, &a) in s1_chars.iter().enumerate() {
        curr_row[0] = i + 1;
        let mut min_in_row = curr_row[0];

        for (j, &b) in s2_chars.iter().enumerate() {
            let cost = if a == b { 0 } else { 1 };
            curr_row[j + 1] = min(
                min(prev_row[j + 1] + 1, curr_row[j] + 1),
                prev_row[j] + cost,
            );
            min_in_row = min(min_in_row, curr_row[j + 1]);
        }

        if min_in_row > threshold {
            return None;
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    Some(prev_row[s2_chars.len()]).filter(|&distance| distance <= threshold)
}

/// Compare the query against every word, one at a time.
///
/// Results are returned in input order; duplicates in `words` are reported
/// once per occurrence.
pub fn linear_scan<I, S>(words: I, query: &str, max_distance: usize) -> Vec<SearchResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let query = fold_case(query);
    words
        .into_iter()
        .filter_map(|word| {
            let word = fold_case(word.as_ref());
            levenshtein_distance_threshold(&query, &word, max_distance)
                .map(|distance| SearchResult::new(word, distance, 0))
        })
        .collect()
}
