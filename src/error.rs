//! Error types for the puzzle solvers.

use crate::engine::Direction;
use thiserror::Error;

/// Errors raised when input violates a solver precondition.
///
/// An unsolvable but well-formed board is not an error: the solver reports
/// it by returning `None`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// The grid does not have exactly three rows of three tiles.
    #[error("Invalid board shape: {0}")]
    InvalidShape(String),

    /// A tile value lies outside `0..=8`.
    #[error("Tile value {value} at ({row}, {col}) is outside 0..=8")]
    TileOutOfRange { row: usize, col: usize, value: i64 },

    /// The same tile value appears more than once.
    #[error("Duplicate tile {0} on board")]
    DuplicateTile(u8),

    /// A board string contained a character that is not a tile.
    #[error("Unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedCharacter { ch: char, row: usize, col: usize },

    /// The blank cannot move in this direction without leaving the grid.
    #[error("Move {0} would push the blank off the board")]
    IllegalMove(Direction),

    /// A move label was not one of Up, Down, Left or Right.
    #[error("Unknown move label '{0}'")]
    UnknownMove(String),

    /// N-Queens was asked for a negative board size.
    #[error("Queen count must be non-negative, got {0}")]
    NegativeQueenCount(i64),
}

/// Result alias for puzzle operations.
pub type Result<T> = std::result::Result<T, PuzzleError>;
