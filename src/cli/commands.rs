//! Command implementations for the fbtrie CLI.

use std::io::{self, Write};
use std::time::Instant;

use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{FbTrieError, Result};
use crate::fuzzy::validate_max_distance;
use crate::index::{SearchConfig, TrieVariant, WordIndex};
use crate::loader;

/// Execute a CLI command.
pub fn execute_command(args: FbTrieArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Search(search_args) => search(search_args, &args, &mut out),
        Command::Compare(compare_args) => compare(compare_args, &args, &mut out),
        Command::Stats(stats_args) => stats(stats_args, &args, &mut out),
    }
}

/// A dictionary as read from its source, before any trie is built.
#[derive(Debug, Clone)]
enum Dictionary {
    Words(Vec<String>),
    Frequencies(Vec<(String, u32)>),
}

impl Dictionary {
    fn load(args: &DictionaryArgs) -> Result<Self> {
        match &args.dict {
            Some(path) => {
                log::info!("Reading from {}...", path.display());
                if args.frequencies {
                    Ok(Dictionary::Frequencies(loader::load_frequency_file(path)?))
                } else {
                    Ok(Dictionary::Words(loader::load_words_from_file(path)?))
                }
            }
            None => {
                log::info!("Reading from stdin...");
                let stdin = io::stdin().lock();
                if args.frequencies {
                    Ok(Dictionary::Frequencies(loader::load_frequencies(stdin)?))
                } else {
                    Ok(Dictionary::Words(loader::load_words(stdin)?))
                }
            }
        }
    }

    fn build(&self, config: SearchConfig) -> WordIndex {
        match self {
            Dictionary::Words(words) => WordIndex::build(words, config),
            Dictionary::Frequencies(entries) => WordIndex::build_with_frequencies(
                entries.iter().map(|(word, frequency)| (word, *frequency)),
                config,
            ),
        }
    }
}

/// Search the dictionary.
fn search<W: Write>(args: &SearchArgs, cli_args: &FbTrieArgs, out: &mut W) -> Result<()> {
    let max_distance = validate_max_distance(args.max_distance)?;
    let config = SearchConfig {
        variant: TrieVariant::from_name(&args.variant),
        ranking: args.rank,
        limit: args.limit,
        parallel: args.parallel,
        prefix: args.prefix,
    };

    let dictionary = Dictionary::load(&args.dictionary)?;
    let index = dictionary.build(config);

    log::info!("Processing query {} {}", args.query, max_distance);
    let (results, elapsed) = index.timed_search(&args.query, max_distance);

    output_search(
        out,
        &SearchResults {
            query: args.query.clone(),
            max_distance,
            variant: index.variant(),
            results,
            duration_ms: elapsed.as_secs_f64() * 1000.0,
        },
        cli_args,
    )
}

/// Build every variant from the same dictionary and time the same query.
fn compare<W: Write>(args: &CompareArgs, cli_args: &FbTrieArgs, out: &mut W) -> Result<()> {
    let max_distance = validate_max_distance(args.max_distance)?;
    if args.repeat == 0 {
        return Err(FbTrieError::invalid_argument("--repeat must be at least 1"));
    }

    let dictionary = Dictionary::load(&args.dictionary)?;
    let mut timings = Vec::new();
    let mut reference = None;
    let mut consistent = true;
    let mut word_count = 0;

    for variant in TrieVariant::ALL {
        let config = SearchConfig {
            variant,
            ..SearchConfig::default()
        };

        let start = Instant::now();
        let index = dictionary.build(config);
        let build_ms = start.elapsed().as_secs_f64() * 1000.0;
        word_count = index.word_count();

        let mut results = Vec::new();
        let start = Instant::now();
        for _ in 0..args.repeat {
            results = index.search(&args.query, max_distance);
        }
        let average_query_ms = start.elapsed().as_secs_f64() * 1000.0 / args.repeat as f64;

        log::info!(
            "{variant}: {} found in {average_query_ms:.4}ms",
            results.len()
        );
        timings.push(VariantTiming {
            variant,
            build_ms,
            average_query_ms,
            found: results.len(),
        });

        match &reference {
            None => reference = Some(results),
            Some(expected) => consistent &= *expected == results,
        }
    }

    output_comparison(
        out,
        &ComparisonResults {
            query: args.query.clone(),
            max_distance,
            word_count,
            timings,
            consistent,
        },
        cli_args,
    )
}

/// Show trie statistics.
fn stats<W: Write>(args: &StatsArgs, cli_args: &FbTrieArgs, out: &mut W) -> Result<()> {
    let config = SearchConfig {
        variant: TrieVariant::from_name(&args.variant),
        ..SearchConfig::default()
    };
    let index = Dictionary::load(&args.dictionary)?.build(config);
    output_stats(out, &index.stats(), cli_args)
}
