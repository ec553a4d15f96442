//! Error types for loading the encodings bundle.

use thiserror::Error;

/// Errors that can occur while loading or validating the encoding tables.
///
/// These are startup-time errors: without valid encodings the predictor
/// cannot be driven, so the caller treats them as fatal.
#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed encodings bundle: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("User encoding table is empty")]
    EmptyUserTable,

    #[error("Dense movie index {index} is mapped by more than one movie id")]
    DuplicateMovieIndex { index: u32 },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, EncodingError>;
