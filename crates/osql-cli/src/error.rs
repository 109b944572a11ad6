//! Error types for the command-line front end.

use std::path::PathBuf;

use osql_core::ParseError;
use thiserror::Error;

/// Errors raised while reading, parsing or rendering queries.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither a query nor a file was given.
    #[error("no query given: pass SQL as an argument or use --file")]
    NoInput,

    /// The input could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A statement failed to parse.
    #[error("line {line}: {source}\n{snippet}")]
    Parse {
        line: usize,
        snippet: String,
        #[source]
        source: ParseError,
    },

    /// Some statements in per-line mode failed to parse.
    #[error("{failed} of {total} statements failed to parse")]
    Failures { failed: usize, total: usize },

    /// JSON rendering failed.
    #[error("JSON rendering failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
