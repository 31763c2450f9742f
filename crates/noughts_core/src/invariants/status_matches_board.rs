//! Status consistency invariant: the recorded status is what the rules say.

use super::Invariant;
use crate::game::Game;
use crate::rules;
use crate::types::Mark;
use strum::IntoEnumIterator;

/// Invariant: status equals a fresh terminal evaluation of the grid, and at
/// most one mark owns a complete line.
pub struct StatusMatchesBoardInvariant;

impl Invariant<Game> for StatusMatchesBoardInvariant {
    fn holds(game: &Game) -> bool {
        let line_owners = Mark::iter()
            .filter(|mark| rules::has_line(game.board(), *mark))
            .count();
        line_owners <= 1 && game.status() == rules::evaluate(game.board())
    }

    fn description() -> &'static str {
        "Status matches the board and at most one mark owns a line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::GameStatus;

    #[test]
    fn test_won_game_holds() {
        let moves = [0, 3, 1, 4, 2].map(|i| Position::ALL[i]);
        let game = Game::replay(&moves).unwrap();
        assert!(StatusMatchesBoardInvariant::holds(&game));
    }

    #[test]
    fn test_stale_status_violates() {
        let moves = [0, 3, 1, 4, 2].map(|i| Position::ALL[i]);
        let mut game = Game::replay(&moves).unwrap();
        game.status = GameStatus::InProgress;
        assert!(!StatusMatchesBoardInvariant::holds(&game));
    }
}
