//! Error handling for the pbar library.
//!
//! This module provides centralized error handling for rendering, bar
//! management and single-shot state persistence. All errors implement the
//! standard Error trait and carry enough context to be reported directly to
//! the user of the command line tool.

use std::io;
use thiserror::Error;

/// Errors that can happen when using pbar.
///
/// Batch mode never lets one of these stop the stream of updates: they are
/// logged and the offending record is skipped. Single-shot mode reports them
/// and exits with a non-zero status.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories,
    /// such as a poisoned lock around the bar collection.
    #[error("Internal error: {0}")]
    Internal(String),

    /// A style name that is not one of the supported styles.
    #[error("Invalid style '{0}'. Must be one of: classic, block, spinner, arrow, braille, custom, braille-spinner")]
    InvalidStyle(String),

    /// A positional value that is not an integer.
    #[error("Invalid {name} value '{value}'. Must be an integer.")]
    InvalidNumber {
        /// Which positional argument was rejected (`current` or `total`).
        name: &'static str,
        /// The raw argument.
        value: String,
    },

    /// Positional arguments that cannot be interpreted as `CURRENT TOTAL`.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A continuation step was requested but no saved state exists.
    ///
    /// Returned in single-shot mode when `current > 0` and nothing was
    /// persisted under the instance ID by a previous invocation.
    #[error("Expected existing progress bar state for ID '{0}' but none found")]
    MissingState(String),

    /// An update record that decoded but cannot be applied.
    #[error("Invalid update record: {0}")]
    InvalidRecord(String),

    /// I/O Error.
    ///
    /// This variant wraps standard I/O errors that can occur while writing
    /// frames to the terminal or reading and writing persisted state.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the JSON codec.
    ///
    /// This variant wraps decoding failures of update records and of
    /// persisted bar state.
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// Result type alias for operations that can fail with a pbar error.
pub type Result<T> = std::result::Result<T, Error>;
