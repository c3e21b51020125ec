//! Error types for the fbtrie library.
//!
//! Building and searching a trie are pure functions of their inputs, so the
//! only failures are I/O while loading a dictionary and callers breaking an
//! argument contract. Both are represented by [`FbTrieError`].
//!
//! # Examples
//!
//! ```
//! use fbtrie::error::{FbTrieError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(FbTrieError::invalid_argument("max distance must not be negative"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for fbtrie operations.
#[derive(Error, Debug)]
pub enum FbTrieError {
    /// I/O errors while reading a dictionary source.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A caller passed an argument outside the documented contract.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON serialization errors from the CLI output layer.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),
}

/// Result type alias for operations that may fail with FbTrieError.
pub type Result<T> = std::result::Result<T, FbTrieError>;

impl FbTrieError {
    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        FbTrieError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        FbTrieError::Other(msg.into())
    }
}
