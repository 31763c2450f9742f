//! Error types for the board engine.

use crate::position::Position;
use derive_more::{Display, Error};

/// Reasons a move is refused.
///
/// All variants are caller-correctable; a refused move leaves the game
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The game has already ended.
    #[display("Game is not in progress")]
    NotPlaying,

    /// Row or column is outside the 3x3 grid.
    #[display("Position ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target square already holds a mark.
    #[display("Square {_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),
}

/// Text that does not name a board cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Cannot read a position from {input:?}")]
pub struct PositionParseError {
    /// The rejected input.
    pub input: String,
}

impl PositionParseError {
    /// Creates a parse error for the given input.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }
}

/// A snapshot that does not describe a reachable game.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Invalid snapshot: {}", violations.join("; "))]
pub struct SnapshotError {
    /// Descriptions of every violated invariant.
    #[error(not(source))]
    pub violations: Vec<String>,
}

impl SnapshotError {
    /// Creates a snapshot error from violation descriptions.
    pub fn new(violations: Vec<String>) -> Self {
        Self { violations }
    }
}
