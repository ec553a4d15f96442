//! Error types for the predictor.

use thiserror::Error;

/// Errors from loading or evaluating the model artifact.
///
/// Load-time variants are fatal at startup; predict-time variants surface
/// through the request handler's catch-all.
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed model artifact: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    InvalidArtifact(String),

    #[error("{kind} index {index} out of range (table size {len})")]
    IndexOutOfRange {
        kind: &'static str,
        index: u32,
        len: usize,
    },

    #[error("Genre vector has width {got}, model expects {expected}")]
    GenreWidthMismatch { got: usize, expected: usize },
}

/// Convenience type alias for Results in this crate.
pub type Result<T> = std::result::Result<T, PredictorError>;
