//! First-class invariants for a game.
//!
//! Invariants are logical properties every reachable [`Game`] satisfies.
//! They run as a postcondition of each accepted move in debug builds and
//! gate [`Game::restore`](crate::Game::restore) unconditionally.

use crate::game::Game;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples of up to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

macro_rules! impl_invariant_set {
    ($($inv:ident),+) => {
        impl<S, $($inv),+> InvariantSet<S> for ($($inv,)+)
        where
            $($inv: Invariant<S>,)+
        {
            fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
                let mut violations = Vec::new();
                $(
                    if !$inv::holds(state) {
                        violations.push(InvariantViolation::new($inv::description()));
                    }
                )+
                if violations.is_empty() {
                    Ok(())
                } else {
                    Err(violations)
                }
            }
        }
    };
}

impl_invariant_set!(I1, I2);
impl_invariant_set!(I1, I2, I3);
impl_invariant_set!(I1, I2, I3, I4);

pub mod history_replays;
pub mod mark_balance;
pub mod status_matches_board;
pub mod turn_matches_board;

pub use history_replays::HistoryReplaysInvariant;
pub use mark_balance::MarkBalanceInvariant;
pub use status_matches_board::StatusMatchesBoardInvariant;
pub use turn_matches_board::TurnMatchesBoardInvariant;

/// Every game invariant as a composable set.
pub type GameInvariants = (
    MarkBalanceInvariant,
    StatusMatchesBoardInvariant,
    TurnMatchesBoardInvariant,
    HistoryReplaysInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::{Mark, Square};

    #[test]
    fn test_invariant_set_holds_for_empty_game() {
        assert!(GameInvariants::check_all(&Game::new()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let game = Game::replay(&[Position::ALL[0], Position::CENTER, Position::ALL[2]]).unwrap();
        assert!(GameInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariant_set_detects_violations() {
        let mut game = Game::replay(&[Position::CENTER]).unwrap();
        // A second First mark with no history entry
        game.board.set(Position::ALL[0], Square::Occupied(Mark::First));

        let violations = GameInvariants::check_all(&game).unwrap_err();
        assert!(violations.len() >= 2);
        assert!(violations.iter().any(|v| v.description == MarkBalanceInvariant::description()));
        assert!(violations.iter().any(|v| v.description == HistoryReplaysInvariant::description()));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (MarkBalanceInvariant, TurnMatchesBoardInvariant);
        assert!(TwoInvariants::check_all(&Game::new()).is_ok());
    }
}
