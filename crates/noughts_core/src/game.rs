//! Board engine: the game state machine.

use crate::board::Board;
use crate::error::MoveError;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::position::Position;
use crate::rules;
use crate::types::{GameStatus, Mark, Mode, Square};
use tracing::{debug, instrument};

/// A single game of noughts and crosses.
///
/// Mutated only through [`Game::attempt_move`] and [`Game::reset`]. A refused
/// move leaves every field untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub(crate) board: Board,
    pub(crate) to_move: Mark,
    pub(crate) status: GameStatus,
    pub(crate) mode: Mode,
    pub(crate) history: Vec<Position>,
}

impl Game {
    /// Creates a new game: empty board, `First` to move.
    #[instrument]
    pub fn new() -> Self {
        Self::with_mode(Mode::default())
    }

    /// Creates a new game tagged with the given mode.
    #[instrument]
    pub fn with_mode(mode: Mode) -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::First,
            status: GameStatus::InProgress,
            mode,
            history: Vec::new(),
        }
    }

    /// Places the current mark at `(row, col)`.
    ///
    /// On success the position is appended to history, terminal conditions
    /// are evaluated, and the turn passes to the opponent if play continues.
    ///
    /// # Errors
    ///
    /// Checked in order: [`MoveError::NotPlaying`] once the game has ended,
    /// [`MoveError::OutOfBounds`] for coordinates off the grid,
    /// [`MoveError::CellOccupied`] for a non-empty square.
    #[instrument(skip(self), fields(mark = ?self.to_move))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<(), MoveError> {
        if self.status.is_over() {
            debug!(status = ?self.status, "Move refused: game over");
            return Err(MoveError::NotPlaying);
        }

        let pos = Position::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;

        if !self.board.is_empty(pos) {
            debug!(%pos, "Move refused: square occupied");
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, Square::Occupied(self.to_move));
        self.history.push(pos);
        self.status = rules::evaluate(&self.board);

        if self.status == GameStatus::InProgress {
            self.to_move = self.to_move.opponent();
        } else {
            debug!(status = ?self.status, "Game over");
        }

        debug_assert!(
            GameInvariants::check_all(self).is_ok(),
            "Game invariants violated after move"
        );

        Ok(())
    }

    /// Places the current mark at an already-validated position.
    ///
    /// # Errors
    ///
    /// Same as [`Game::attempt_move`], minus `OutOfBounds`.
    pub fn play(&mut self, pos: Position) -> Result<(), MoveError> {
        self.attempt_move(pos.row(), pos.col())
    }

    /// All empty squares in row-major order; empty once the game has ended.
    pub fn legal_moves(&self) -> Vec<Position> {
        if self.status.is_over() {
            return Vec::new();
        }
        self.board.empty_positions().collect()
    }

    /// True iff `(row, col)` is on the board, the game is in progress, and
    /// the square is empty.
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        !self.status.is_over() && Position::new(row, col).is_some_and(|pos| self.board.is_empty(pos))
    }

    /// Restores the initial state and discards history. The mode tag is kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(moves = self.history.len(), "Resetting game");
        self.board = Board::new();
        self.to_move = Mark::First;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    /// Rebuilds a game by playing `moves` in order from the initial state.
    ///
    /// # Errors
    ///
    /// Returns the first refused move's error.
    #[instrument]
    pub fn replay(moves: &[Position]) -> Result<Self, MoveError> {
        let mut game = Self::new();
        for pos in moves {
            game.play(*pos)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move. Frozen on the last mover once the game ends.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Returns the mode tag.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Sets the mode tag.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Position] {
        &self.history
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
