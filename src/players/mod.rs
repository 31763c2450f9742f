//! Player trait and implementations.

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, StdinLines};

use anyhow::Result;
use noughts_core::{Game, Position};

/// Something that can choose moves.
pub trait Player {
    /// Chooses the next move for the mark currently to move in `game`.
    fn choose_move(&mut self, game: &Game) -> Result<Position>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
