//! Draw detection logic.

use crate::board::Board;
use crate::types::Square;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.rows().iter().flatten().all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::position::Position;
    use crate::types::Mark;

    fn is_draw(board: &Board) -> bool {
        is_full(board) && check_winner(board).is_none()
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Position::CENTER, Square::Occupied(Mark::First));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let mut board = Board::new();
        for (pos, mark) in Position::ALL.iter().zip([
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::First,
            Mark::Second,
            Mark::First,
            Mark::Second,
        ]) {
            board.set(*pos, Square::Occupied(mark));
        }
        assert!(is_draw(&board));
    }
}
