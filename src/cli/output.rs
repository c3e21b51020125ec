//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::cli::args::{FbTrieArgs, OutputFormat};
use crate::error::Result;
use crate::fuzzy::SearchResult;
use crate::index::{TrieStats, TrieVariant};

/// Result structure for search operations.
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResults {
    pub query: String,
    pub max_distance: usize,
    pub variant: TrieVariant,
    pub results: Vec<SearchResult>,
    pub duration_ms: f64,
}

/// Timing of one variant in a comparison run.
#[derive(Debug, Serialize, Deserialize)]
pub struct VariantTiming {
    pub variant: TrieVariant,
    pub build_ms: f64,
    pub average_query_ms: f64,
    pub found: usize,
}

/// Result structure for variant comparisons.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComparisonResults {
    pub query: String,
    pub max_distance: usize,
    pub word_count: usize,
    pub timings: Vec<VariantTiming>,
    /// Whether every variant returned the same results.
    pub consistent: bool,
}

fn write_json<T: Serialize, W: Write>(out: &mut W, value: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, value)?;
    } else {
        serde_json::to_writer(&mut *out, value)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Print search results.
///
/// Human output is one `distance word` line per result on stdout, followed
/// by a summary line on stderr unless running quietly.
pub fn output_search<W: Write>(out: &mut W, results: &SearchResults, args: &FbTrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, results, args.pretty),
        OutputFormat::Human => {
            for result in &results.results {
                writeln!(out, "{} {}", result.distance, result.word)?;
            }
            if args.verbosity() > 0 {
                eprintln!("{}", search_summary(results));
            }
            Ok(())
        }
    }
}

/// One-line summary of a search run.
pub fn search_summary(results: &SearchResults) -> String {
    format!(
        "RESULT: {}~{}: [{} found] in {:.4}ms using [{}]",
        results.query,
        results.max_distance,
        results.results.len(),
        results.duration_ms,
        results.variant
    )
}

/// Print a variant comparison.
pub fn output_comparison<W: Write>(
    out: &mut W,
    comparison: &ComparisonResults,
    args: &FbTrieArgs,
) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, comparison, args.pretty),
        OutputFormat::Human => {
            writeln!(
                out,
                "Query: {}~{} over {} words",
                comparison.query, comparison.max_distance, comparison.word_count
            )?;
            writeln!(out, "{:<8} {:>12} {:>12} {:>8}", "variant", "build ms", "query ms", "found")?;
            for timing in &comparison.timings {
                writeln!(
                    out,
                    "{:<8} {:>12.3} {:>12.4} {:>8}",
                    timing.variant.name(),
                    timing.build_ms,
                    timing.average_query_ms,
                    timing.found
                )?;
            }
            if !comparison.consistent {
                writeln!(out, "WARNING: variants returned different results")?;
            }
            Ok(())
        }
    }
}

/// Print trie statistics.
pub fn output_stats<W: Write>(out: &mut W, stats: &TrieStats, args: &FbTrieArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => write_json(out, stats, args.pretty),
        OutputFormat::Human => {
            writeln!(out, "Trie Statistics:")?;
            writeln!(out, "════════════════")?;
            writeln!(out, "Variant: {}", stats.variant)?;
            writeln!(out, "Words: {}", stats.word_count)?;
            writeln!(out, "Nodes: {}", stats.node_count)?;
            writeln!(out, "Longest word: {}", stats.max_depth)?;
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> FbTrieArgs {
        let mut argv = vec!["fbtrie", "-q"];
        argv.extend_from_slice(extra);
        argv.push("stats");
        FbTrieArgs::try_parse_from(argv).unwrap()
    }

    fn sample() -> SearchResults {
        SearchResults {
            query: "cat".to_string(),
            max_distance: 1,
            variant: TrieVariant::FbTrie,
            results: vec![
                SearchResult::new("cat".to_string(), 0, 1),
                SearchResult::new("cot".to_string(), 1, 1),
            ],
            duration_ms: 0.25,
        }
    }

    #[test]
    fn test_human_search_output() {
        let mut out = Vec::new();
        output_search(&mut out, &sample(), &args(&[])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 cat\n1 cot\n");
    }

    #[test]
    fn test_json_search_output() {
        let mut out = Vec::new();
        output_search(&mut out, &sample(), &args(&["-f", "json"])).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["variant"], "fbtrie");
        assert_eq!(value["results"][1]["word"], "cot");
        assert_eq!(value["results"][1]["distance"], 1);
    }

    #[test]
    fn test_search_summary() {
        assert_eq!(
            search_summary(&sample()),
            "RESULT: cat~1: [2 found] in 0.2500ms using [FBTrie]"
        );
    }

    #[test]
    fn test_stats_output() {
        let stats = TrieStats {
            variant: TrieVariant::Trie,
            word_count: 4,
            node_count: 10,
            max_depth: 4,
        };
        let mut out = Vec::new();
        output_stats(&mut out, &stats, &args(&[])).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Words: 4"));
        assert!(text.contains("Nodes: 10"));
    }
}
