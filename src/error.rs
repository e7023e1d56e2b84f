//! Error types for board parsing and console input.

use thiserror::Error;

use crate::constants::{CELLS, MAX_LEVEL, MIN_LEVEL, N};

/// Errors produced while parsing a board from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has {got} cells, expected {expected}", expected = CELLS)]
    InvalidLength { got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCell { character: char, position: usize },
}

/// Errors produced while parsing a line typed at the console.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("expected a move as 'row,col', got '{0}'")]
    MalformedMove(String),

    #[error("row and col must be between 0 and {max}", max = N - 1)]
    OutOfRange,

    #[error("please enter a valid number between {min} and {max}", min = MIN_LEVEL, max = MAX_LEVEL)]
    InvalidLevel,
}
