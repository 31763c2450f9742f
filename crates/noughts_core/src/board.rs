//! The 3x3 grid.

use crate::position::{Position, SIZE};
use crate::types::{Mark, Square};
use serde::{Deserialize, Serialize};

/// 3x3 board of squares.
///
/// A plain value: copying a board is how the decision engine simulates play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares indexed `[row][col]`.
    squares: [[Square; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.row()][pos.col()]
    }

    /// Sets the square at the given position.
    ///
    /// This writes unconditionally; move legality lives in [`crate::Game`].
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.row()][pos.col()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Square; SIZE]; SIZE] {
        &self.squares
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|pos| self.is_empty(*pos))
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| **sq == Square::Occupied(mark))
            .count()
    }

    /// Number of non-empty squares.
    pub fn occupied(&self) -> usize {
        self.squares
            .iter()
            .flatten()
            .filter(|sq| **sq != Square::Empty)
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their keypad number (1-9).
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, squares) in self.squares.iter().enumerate() {
            for (col, square) in squares.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => char::from_digit((row * SIZE + col + 1) as u32, 10).unwrap_or('?'),
                    Square::Occupied(mark) => mark.symbol(),
                };
                result.push(symbol);
                if col < SIZE - 1 {
                    result.push('|');
                }
            }
            if row < SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_positions().count(), 9);
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_counts() {
        let mut board = Board::new();
        board.set(Position::CENTER, Square::Occupied(Mark::First));
        board.set(Position::CORNERS[0], Square::Occupied(Mark::Second));
        board.set(Position::CORNERS[3], Square::Occupied(Mark::First));
        assert_eq!(board.count(Mark::First), 2);
        assert_eq!(board.count(Mark::Second), 1);
        assert_eq!(board.occupied(), 3);
        assert!(!board.empty_positions().any(|p| p == Position::CENTER));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.set(Position::CORNERS[0], Square::Occupied(Mark::First));
        board.set(Position::CENTER, Square::Occupied(Mark::Second));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }
}
