//! Game rules for noughts and crosses.
//!
//! Pure functions over a [`Board`]. The board engine and the decision
//! engine's simulations both go through [`evaluate`], so a simulated game
//! ends exactly where a real one would.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, check_winner, has_line};

use crate::board::Board;
use crate::types::GameStatus;

/// Terminal-condition evaluation: a completed line wins, else a full board
/// draws, else play continues.
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(mark) = check_winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_evaluate_empty_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_win_on_full_board_is_won() {
        // X X X / O O X / X O O : full, but X owns the top row
        let cells = "XXXOOXXOO";
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(cells.chars()) {
            let mark = if c == 'X' { Mark::First } else { Mark::Second };
            board.set(*pos, Square::Occupied(mark));
        }
        assert_eq!(evaluate(&board), GameStatus::Won(Mark::First));
    }
}
