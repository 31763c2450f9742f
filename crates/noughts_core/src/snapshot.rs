//! Serializable game snapshots for persistence layers.
//!
//! The core fixes no wire format; a snapshot is a plain serde value that a
//! host can store however it likes.

use crate::board::Board;
use crate::error::SnapshotError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Mark, Mode};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Everything needed to reconstruct an equivalent [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// The grid.
    pub board: Board,
    /// Mark to move (the last mover once the game is over).
    pub to_move: Mark,
    /// Game status.
    pub status: GameStatus,
    /// Mode tag.
    #[serde(default)]
    pub mode: Mode,
    /// Positions played, in order. May be empty when not recorded.
    #[serde(default)]
    pub history: Vec<Position>,
}

impl GameSnapshot {
    /// Builds a snapshot from a bare grid, deriving turn and status.
    ///
    /// History is left unrecorded. The result is not validated here;
    /// [`Game::restore`] does that.
    pub fn from_board(board: Board, mode: Mode) -> Self {
        let status = rules::evaluate(&board);
        let first = board.count(Mark::First);
        let second = board.count(Mark::Second);
        let to_move = match status {
            GameStatus::InProgress if first == second => Mark::First,
            GameStatus::InProgress => Mark::Second,
            _ if first > second => Mark::First,
            _ => Mark::Second,
        };
        Self {
            board,
            to_move,
            status,
            mode,
            history: Vec::new(),
        }
    }
}

impl Game {
    /// Captures the full public state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board,
            to_move: self.to_move,
            status: self.status,
            mode: self.mode,
            history: self.history.clone(),
        }
    }

    /// Rebuilds a game from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] listing every violated invariant if the
    /// snapshot does not describe a reachable game.
    #[instrument(skip(snapshot), fields(moves = snapshot.history.len()))]
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, SnapshotError> {
        let game = Self {
            board: snapshot.board,
            to_move: snapshot.to_move,
            status: snapshot.status,
            mode: snapshot.mode,
            history: snapshot.history,
        };

        GameInvariants::check_all(&game).map_err(|violations| {
            let descriptions: Vec<String> = violations.into_iter().map(|v| v.description).collect();
            warn!(?descriptions, "Rejected snapshot");
            SnapshotError::new(descriptions)
        })?;

        Ok(game)
    }
}
