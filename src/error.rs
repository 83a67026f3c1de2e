//! Error types for the queens crate

use thiserror::Error;

/// Main error type for the queens crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("board string has {got} cells, expected {expected} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("solution grid has {got} rows, expected {expected}")]
    InvalidRowCount { expected: usize, got: usize },

    #[error("solution grid row {row} has {got} cells, expected {expected}")]
    InvalidRowLength {
        expected: usize,
        row: usize,
        got: usize,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
