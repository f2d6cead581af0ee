//! Error types for the xnos crate

use thiserror::Error;

/// Main error type for the xnos crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board needs {expected} cells, found {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("unknown symbol '{character}' at cell {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("square {position} is off the board (expected 0-8)")]
    InvalidPosition { position: usize },

    #[error("invalid side '{input}' (expected 'x' or 'o')")]
    InvalidSide { input: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
