//! Win detection logic.

use crate::board::Board;
use crate::position::Position;
use crate::types::{Mark, Square};

/// The eight lines: three rows, three columns, then the two diagonals.
///
/// Scans that stop at the first match rely on this order.
pub const LINES: [[Position; 3]; 8] = {
    let [a, b, c, d, e, f, g, h, i] = Position::ALL;
    [
        // Rows
        [a, b, c],
        [d, e, f],
        [g, h, i],
        // Columns
        [a, d, g],
        [b, e, h],
        [c, f, i],
        // Diagonals
        [a, e, i],
        [c, e, g],
    ]
};

/// Checks if there is a winner on the board.
///
/// Returns the mark of the first uniform non-empty line, scanning every line
/// in [`LINES`] order.
pub fn check_winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            sq.mark()
        } else {
            None
        }
    })
}

/// Returns true if `mark` owns at least one complete line.
pub fn has_line(board: &Board, mark: Mark) -> bool {
    let sq = Square::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|pos| board.get(*pos) == sq))
}
