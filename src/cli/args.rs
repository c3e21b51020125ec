//! Command line argument parsing for the fbtrie CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::fuzzy::Ranking;

/// fbtrie - approximate dictionary lookup over forward/backward tries
#[derive(Parser, Debug, Clone)]
#[command(name = "fbtrie")]
#[command(about = "Find dictionary words within an edit distance of a query")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct FbTrieArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl FbTrieArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the dictionary for words near a query
    Search(SearchArgs),

    /// Run the same query against every trie variant and compare timings
    Compare(CompareArgs),

    /// Show statistics about the built trie
    Stats(StatsArgs),
}

/// Where the dictionary comes from.
#[derive(Args, Debug, Clone)]
pub struct DictionaryArgs {
    /// Dictionary file, one word per line (reads stdin when omitted)
    #[arg(short, long, value_name = "FILE", env = "FBTRIE_DICT")]
    pub dict: Option<PathBuf>,

    /// Dictionary lines are "word frequency" pairs
    #[arg(long)]
    pub frequencies: bool,
}

/// Arguments for searching
#[derive(Parser, Debug, Clone)]
pub struct SearchArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance
    #[arg(value_name = "K", allow_negative_numbers = true)]
    pub max_distance: i64,

    /// Trie variant: trie or fbtrie (unknown names fall back to trie)
    #[arg(value_name = "VARIANT", default_value = "trie")]
    pub variant: String,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Secondary ordering for results with equal distance
    #[arg(short, long, default_value = "distance")]
    pub rank: Ranking,

    /// Maximum number of results to return
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Match words that have a prefix within the distance
    #[arg(long)]
    pub prefix: bool,

    /// Search top-level subtrees in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// Arguments for comparing variants
#[derive(Parser, Debug, Clone)]
pub struct CompareArgs {
    /// Query string
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Maximum edit distance
    #[arg(value_name = "K", allow_negative_numbers = true)]
    pub max_distance: i64,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Number of times each query is repeated
    #[arg(long, default_value = "1")]
    pub repeat: usize,
}

/// Arguments for trie statistics
#[derive(Parser, Debug, Clone)]
pub struct StatsArgs {
    /// Trie variant: trie or fbtrie
    #[arg(value_name = "VARIANT", default_value = "trie")]
    pub variant: String,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "distance word" lines
    Human,
    /// JSON output
    Json,
}
