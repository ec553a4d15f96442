//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while loading the movie and ratings tables.
///
/// All of these are startup-time errors: the process cannot serve requests
/// without the tables, so the caller treats them as fatal.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading a data file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Line in a data file couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, CatalogError>;
