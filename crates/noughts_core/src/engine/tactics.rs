//! Immediate win-or-block detection.

use crate::board::Board;
use crate::position::Position;
use crate::rules::LINES;
use crate::types::{Mark, Square};

/// Finds the empty square that would complete a line for `mark`.
///
/// A line qualifies when it holds exactly two of `mark` and one empty
/// square. Lines are scanned rows, then columns, then diagonals; the first
/// qualifying line wins.
pub fn find_completing_cell(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(mark))
            .count();
        let mut empty = line.iter().filter(|pos| board.is_empty(**pos));

        match (owned, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(*pos),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        let mut board = Board::new();
        for (pos, c) in Position::ALL.iter().zip(cells.chars()) {
            match c {
                'X' => board.set(*pos, Square::Occupied(Mark::First)),
                'O' => board.set(*pos, Square::Occupied(Mark::Second)),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_has_none() {
        assert_eq!(find_completing_cell(&Board::new(), Mark::First), None);
    }

    #[test]
    fn test_row() {
        let b = board("XX.......");
        assert_eq!(find_completing_cell(&b, Mark::First), Position::new(0, 2));
        assert_eq!(find_completing_cell(&b, Mark::Second), None);
    }

    #[test]
    fn test_column() {
        let b = board(".O..O....");
        assert_eq!(find_completing_cell(&b, Mark::Second), Position::new(2, 1));
    }

    #[test]
    fn test_anti_diagonal() {
        let b = board("..X.X....");
        assert_eq!(find_completing_cell(&b, Mark::First), Position::new(2, 0));
    }

    #[test]
    fn test_blocked_line_does_not_qualify() {
        let b = board("XXO......");
        assert_eq!(find_completing_cell(&b, Mark::First), None);
    }

    #[test]
    fn test_rows_before_columns() {
        // X X . / X . . / . . .  : row 0 and column 0 both qualify
        let b = board("XX.X.....");
        assert_eq!(find_completing_cell(&b, Mark::First), Position::new(0, 2));
    }
}
