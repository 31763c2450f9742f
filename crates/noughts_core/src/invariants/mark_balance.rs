//! Mark balance invariant: `First` is never behind and never two ahead.

use super::Invariant;
use crate::game::Game;
use crate::types::Mark;

/// Invariant: `count(First) - count(Second)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Game> for MarkBalanceInvariant {
    fn holds(game: &Game) -> bool {
        let first = game.board().count(Mark::First);
        let second = game.board().count(Mark::Second);
        first == second || first == second + 1
    }

    fn description() -> &'static str {
        "First marks minus Second marks is 0 or 1"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Square;

    #[test]
    fn test_holds_through_a_game() {
        let mut game = Game::new();
        for pos in [Position::CENTER, Position::ALL[0], Position::ALL[8]] {
            game.play(pos).unwrap();
            assert!(MarkBalanceInvariant::holds(&game));
        }
    }

    #[test]
    fn test_second_ahead_violates() {
        let mut game = Game::new();
        game.board.set(Position::CENTER, Square::Occupied(Mark::Second));
        assert!(!MarkBalanceInvariant::holds(&game));
    }
}
