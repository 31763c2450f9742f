//! History consistency invariant: replaying the history rebuilds the grid.

use super::Invariant;
use crate::board::Board;
use crate::game::Game;
use crate::types::{Mark, Square};

/// Invariant: replaying history from an empty board, alternating from
/// `First`, with no square written twice, reproduces the current grid.
///
/// An empty history on a non-empty board counts as "not recorded" and holds;
/// snapshots built from a bare grid carry no history.
pub struct HistoryReplaysInvariant;

impl Invariant<Game> for HistoryReplaysInvariant {
    fn holds(game: &Game) -> bool {
        if game.history().is_empty() {
            return true;
        }

        let mut reconstructed = Board::new();
        let mut mark = Mark::First;

        for pos in game.history() {
            if !reconstructed.is_empty(*pos) {
                return false;
            }
            reconstructed.set(*pos, Square::Occupied(mark));
            mark = mark.opponent();
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Move history replays to the current board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_full_game_holds() {
        let moves = [0, 1, 2, 3, 4, 5, 7, 6, 8].map(|i| Position::ALL[i]);
        let game = Game::replay(&moves).unwrap();
        assert!(HistoryReplaysInvariant::holds(&game));
        assert_eq!(game.history().len(), 9);
    }

    #[test]
    fn test_unrecorded_history_holds() {
        let mut game = Game::replay(&[Position::CENTER]).unwrap();
        game.history.clear();
        assert!(HistoryReplaysInvariant::holds(&game));
    }

    #[test]
    fn test_corrupted_history_violates() {
        let mut game = Game::replay(&[Position::CENTER]).unwrap();
        game.board.set(Position::ALL[0], Square::Occupied(Mark::Second));
        assert!(!HistoryReplaysInvariant::holds(&game));
    }

    #[test]
    fn test_duplicate_entry_violates() {
        let mut game = Game::replay(&[Position::CENTER, Position::ALL[0]]).unwrap();
        game.history.push(Position::CENTER);
        assert!(!HistoryReplaysInvariant::holds(&game));
    }
}
