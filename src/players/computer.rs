//! Computer player backed by the decision engine.

use super::Player;
use anyhow::Result;
use noughts_core::{DecisionEngine, Game, Mark, Position, Tier};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::debug;

/// Computer opponent at a fixed tier.
#[derive(Debug)]
pub struct ComputerPlayer<R: Rng = StdRng> {
    name: String,
    engine: DecisionEngine<R>,
}

impl ComputerPlayer<StdRng> {
    /// Creates a computer player seeded from system entropy.
    pub fn new(tier: Tier, mark: Mark) -> Self {
        Self::with_engine(DecisionEngine::new(tier, mark))
    }

    /// Creates a computer player with a fixed seed.
    pub fn seeded(tier: Tier, mark: Mark, seed: u64) -> Self {
        Self::with_engine(DecisionEngine::seeded(tier, mark, seed))
    }
}

impl<R: Rng> ComputerPlayer<R> {
    /// Wraps an existing engine.
    pub fn with_engine(engine: DecisionEngine<R>) -> Self {
        Self {
            name: format!("Computer ({})", engine.tier()),
            engine,
        }
    }
}

impl<R: Rng> Player for ComputerPlayer<R> {
    fn choose_move(&mut self, game: &Game) -> Result<Position> {
        debug!(player = %self.name, "Computer choosing move");

        match self.engine.recommend_move(game) {
            Some(pos) => Ok(pos),
            None => anyhow::bail!("No legal moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
