//! Turn consistency invariant: the mark to move follows from the counts.

use super::Invariant;
use crate::game::Game;
use crate::types::{GameStatus, Mark};

/// Invariant: while in progress, `First` moves on equal counts and `Second`
/// moves when `First` is one ahead. Once over, the turn names the last mover,
/// and a winner is always that last mover.
pub struct TurnMatchesBoardInvariant;

impl Invariant<Game> for TurnMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.board().count(Mark::First);
        let second = game.board().count(Mark::Second);

        match game.status() {
            GameStatus::InProgress => {
                let expected = if first == second { Mark::First } else { Mark::Second };
                game.to_move() == expected
            }
            status => {
                let last_mover = if first > second { Mark::First } else { Mark::Second };
                game.to_move() == last_mover && status.winner().is_none_or(|w| w == last_mover)
            }
        }
    }

    fn description() -> &'static str {
        "Turn follows the mark counts and freezes on the last mover"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    #[test]
    fn test_single_move_holds() {
        let game = Game::replay(&[Position::CENTER]).unwrap();
        assert!(TurnMatchesBoardInvariant::holds(&game));
        assert_eq!(game.to_move(), Mark::Second);
    }

    #[test]
    fn test_second_player_win_holds() {
        let moves = [0, 3, 1, 4, 8, 5].map(|i| Position::ALL[i]);
        let game = Game::replay(&moves).unwrap();
        assert_eq!(game.status(), GameStatus::Won(Mark::Second));
        assert!(TurnMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_turn_violates() {
        let mut game = Game::replay(&[Position::CENTER]).unwrap();
        game.to_move = Mark::First;
        assert!(!TurnMatchesBoardInvariant::holds(&game));
    }
}
