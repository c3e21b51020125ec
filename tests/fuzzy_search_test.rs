//! Integration tests for trie construction and bounded edit-distance search.

use std::collections::BTreeSet;

use fbtrie::fuzzy::{FuzzySearcher, SearchResult, levenshtein_distance, search};
use fbtrie::index::{SearchConfig, TrieVariant, WordIndex};
use fbtrie::prelude::*;

fn pairs(results: &[SearchResult]) -> Vec<(String, usize)> {
    results
        .iter()
        .map(|r| (r.word.clone(), r.distance))
        .collect()
}

fn index(words: &[&str], variant: TrieVariant) -> WordIndex {
    let config = SearchConfig {
        variant,
        ..SearchConfig::default()
    };
    WordIndex::build(words.iter().copied(), config)
}

/// Every string one insertion, deletion or substitution away from `word`.
fn single_edits(word: &str, alphabet: &str) -> BTreeSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = BTreeSet::new();

    for i in 0..=chars.len() {
        for c in alphabet.chars() {
            let mut inserted = chars.clone();
            inserted.insert(i, c);
            edits.insert(inserted.into_iter().collect());
        }
    }
    for i in 0..chars.len() {
        let mut deleted = chars.clone();
        deleted.remove(i);
        edits.insert(deleted.into_iter().collect());

        for c in alphabet.chars() {
            let mut substituted = chars.clone();
            substituted[i] = c;
            edits.insert(substituted.into_iter().collect());
        }
    }

    edits
}

#[test]
fn test_cat_scenario() -> Result<()> {
    for variant in TrieVariant::ALL {
        let index = index(&["cat", "cats", "cot", "dog"], variant);
        let results = index.search("cat", 1);

        assert_eq!(
            pairs(&results),
            vec![
                ("cat".to_string(), 0),
                ("cats".to_string(), 1),
                ("cot".to_string(), 1)
            ],
            "{variant}"
        );
    }
    Ok(())
}

#[test]
fn test_sample_invocation_finds_nothing() -> Result<()> {
    let k = validate_max_distance(2)?;
    for variant in TrieVariant::ALL {
        let index = index(&["kitten", "sitting", "bitten", "kitchen"], variant);
        assert!(index.search("kokot", k).is_empty(), "{variant}");
    }
    Ok(())
}

#[test]
fn test_exactness_at_zero() -> Result<()> {
    let words = ["alpha", "alps", "beta", "bet", "gamma"];
    for variant in TrieVariant::ALL {
        let index = index(&words, variant);

        for word in words {
            assert_eq!(
                pairs(&index.search(word, 0)),
                vec![(word.to_string(), 0)],
                "{variant} {word}"
            );
        }
        for missing in ["alp", "betas", "gama", "x"] {
            assert!(index.search(missing, 0).is_empty(), "{variant} {missing}");
        }
    }
    Ok(())
}

#[test]
fn test_monotonic_in_distance() -> Result<()> {
    let words = [
        "search", "serach", "starch", "research", "sear", "each", "peach", "speech", "march",
    ];
    for variant in TrieVariant::ALL {
        let index = index(&words, variant);

        for query in ["search", "each", "zzz", "sea"] {
            let mut previous: BTreeSet<String> = BTreeSet::new();
            for k in 0..=6 {
                let current: BTreeSet<String> =
                    index.search(query, k).into_iter().map(|r| r.word).collect();
                assert!(previous.is_subset(&current), "{variant} {query} {k}");
                previous = current;
            }
        }
    }
    Ok(())
}

#[test]
fn test_distances_match_brute_force() -> Result<()> {
    let words = [
        "saturday", "sunday", "monday", "tuesday", "thursday", "day", "days", "mayday", "sundae",
        "satur",
    ];
    for variant in TrieVariant::ALL {
        let index = index(&words, variant);

        for query in ["sunday", "saturday", "tusday", "ay", "dayz", "xxxxxxx"] {
            for k in 0..=4 {
                let results = index.search(query, k);
                for result in &results {
                    assert_eq!(
                        result.distance,
                        levenshtein_distance(query, &result.word),
                        "{variant} {query} {}",
                        result.word
                    );
                }

                let expected: BTreeSet<&str> = words
                    .iter()
                    .copied()
                    .filter(|w| levenshtein_distance(query, w) <= k)
                    .collect();
                let found: BTreeSet<&str> = results.iter().map(|r| r.word.as_str()).collect();
                assert_eq!(found, expected, "{variant} {query} {k}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_completeness_on_single_edits() -> Result<()> {
    let query = "trie";
    let edits = single_edits(query, "eirtx");
    let words: Vec<&str> = edits.iter().map(String::as_str).collect();

    for variant in TrieVariant::ALL {
        let index = index(&words, variant);
        let found: BTreeSet<String> = index.search(query, 1).into_iter().map(|r| r.word).collect();
        assert_eq!(found, edits, "{variant}");
    }
    Ok(())
}

#[test]
fn test_idempotent_build() -> Result<()> {
    let words = ["one", "two", "three", "four", "five", "fives"];
    let doubled: Vec<&str> = words.iter().chain(words.iter()).copied().collect();

    let once = DictionaryTrie::build(words);
    let twice = DictionaryTrie::build(&doubled);
    assert_eq!(once.word_count(), twice.word_count());
    assert_eq!(once.node_count(), twice.node_count());
    assert_eq!(once.words(), twice.words());

    for query in ["one", "tree", "fiv"] {
        assert_eq!(
            pairs(&search(&once, query, 2)),
            pairs(&search(&twice, query, 2))
        );
    }

    let once = FbTrie::build(words);
    let twice = FbTrie::build(&doubled);
    assert_eq!(once.word_count(), twice.word_count());
    assert_eq!(pairs(&once.search("fivs", 1)), pairs(&twice.search("fivs", 1)));
    Ok(())
}

#[test]
fn test_dictionary_of_only_the_query() -> Result<()> {
    for variant in TrieVariant::ALL {
        let index = index(&["lonely"], variant);
        assert_eq!(
            pairs(&index.search("lonely", 3)),
            vec![("lonely".to_string(), 0)]
        );
    }
    Ok(())
}

#[test]
fn test_empty_string_entry() -> Result<()> {
    let mut trie = DictionaryTrie::new();
    trie.insert("");
    trie.insert("x");

    let results = FuzzySearcher::new("", 0).search(&trie);
    assert_eq!(pairs(&results), vec![(String::new(), 0)]);

    let mut fb = FbTrie::new();
    fb.insert("");
    fb.insert("x");
    assert_eq!(pairs(&fb.search("", 0)), vec![(String::new(), 0)]);
    Ok(())
}

#[test]
fn test_searching_an_empty_dictionary() -> Result<()> {
    for variant in TrieVariant::ALL {
        let index = index(&[], variant);
        assert_eq!(index.word_count(), 0);
        assert!(index.search("anything", 5).is_empty());
    }
    Ok(())
}

#[test]
fn test_concurrent_queries_share_one_trie() -> Result<()> {
    let trie = DictionaryTrie::build(["cat", "cats", "cot", "dog", "dot", "cut"]);
    let expected = search(&trie, "cat", 1);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| search(&trie, "cat", 1)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
    Ok(())
}
