//! Decision engine: recommends moves for the computer opponent.
//!
//! The engine reads a [`Game`] and never mutates it. Search works on
//! [`search::Node`] copies that live only as long as the call that made them.

pub mod search;
pub mod tactics;
pub mod tier;

pub use tactics::find_completing_cell;
pub use tier::{Tier, TierParseError};

use crate::game::Game;
use crate::position::Position;
use crate::types::Mark;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use search::Node;
use tracing::{debug, instrument, trace};

/// Chance that the easy tier looks for a win or block before playing randomly.
pub const SHORTCUT_PROBABILITY: f64 = 0.2;

/// Move recommender for one mark at one strength tier.
///
/// Randomness comes from the injected `R`, so seeded engines are
/// reproducible.
#[derive(Debug, Clone)]
pub struct DecisionEngine<R: Rng = StdRng> {
    tier: Tier,
    mark: Mark,
    rng: R,
}

impl DecisionEngine<StdRng> {
    /// Creates an engine seeded from system entropy.
    #[instrument]
    pub fn new(tier: Tier, mark: Mark) -> Self {
        Self::with_rng(tier, mark, StdRng::from_entropy())
    }

    /// Creates an engine with a fixed seed.
    #[instrument]
    pub fn seeded(tier: Tier, mark: Mark, seed: u64) -> Self {
        Self::with_rng(tier, mark, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> DecisionEngine<R> {
    /// Creates an engine drawing randomness from `rng`.
    pub fn with_rng(tier: Tier, mark: Mark, rng: R) -> Self {
        Self { tier, mark, rng }
    }

    /// Returns the strength tier.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Sets the strength tier.
    pub fn set_tier(&mut self, tier: Tier) {
        self.tier = tier;
    }

    /// Returns the mark this engine plays.
    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Returns the mark this engine plays against.
    pub fn opponent(&self) -> Mark {
        self.mark.opponent()
    }

    /// Recommends a move on `game`, or `None` when there is no legal move.
    ///
    /// The engine only moves for its own mark: if `game` is waiting on the
    /// other side, the answer is `None`. The returned position is always in
    /// `game.legal_moves()`.
    #[instrument(skip(self, game), fields(tier = ?self.tier, mark = ?self.mark))]
    pub fn recommend_move(&mut self, game: &Game) -> Option<Position> {
        if game.to_move() != self.mark {
            debug!(to_move = ?game.to_move(), "Not this engine's turn");
            return None;
        }

        let legal = game.legal_moves();
        if legal.is_empty() {
            debug!("No legal moves");
            return None;
        }

        let choice = match self.tier {
            Tier::Easy => self.easy_move(game, &legal),
            Tier::Normal => self.normal_move(game, &legal),
            Tier::Hard => self.hard_move(game, &legal),
            Tier::Unbeatable => self.perfect_move(game, &legal),
        };

        debug!(position = ?choice, "Recommended move");
        choice
    }

    /// Own win, else block, each with low probability; otherwise random.
    fn easy_move(&mut self, game: &Game, legal: &[Position]) -> Option<Position> {
        if self.rng.gen_bool(SHORTCUT_PROBABILITY)
            && let Some(pos) = self.win_or_block(game)
        {
            trace!(%pos, "Easy tier took a shortcut");
            return Some(pos);
        }
        legal.choose(&mut self.rng).copied()
    }

    /// Win, block, centre, first free corner, then anything.
    fn normal_move(&mut self, game: &Game, legal: &[Position]) -> Option<Position> {
        if let Some(pos) = self.win_or_block(game) {
            return Some(pos);
        }

        let open = |pos: &Position| game.is_legal(pos.row(), pos.col());

        if open(&Position::CENTER) {
            return Some(Position::CENTER);
        }

        if let Some(corner) = Position::CORNERS.iter().copied().find(open) {
            return Some(corner);
        }

        legal.choose(&mut self.rng).copied()
    }

    /// Shallow minimax; falls back to the normal tier without a candidate.
    fn hard_move(&mut self, game: &Game, legal: &[Position]) -> Option<Position> {
        match self.search(game, Tier::Hard) {
            Some(pos) => Some(pos),
            None => self.normal_move(game, legal),
        }
    }

    /// Full-depth minimax; falls back to the hard tier without a candidate.
    fn perfect_move(&mut self, game: &Game, legal: &[Position]) -> Option<Position> {
        match self.search(game, Tier::Unbeatable) {
            Some(pos) => Some(pos),
            None => self.hard_move(game, legal),
        }
    }

    fn search(&self, game: &Game, tier: Tier) -> Option<Position> {
        let depth = tier.search_depth()?;
        let (pos, score) = search::best_move(Node::from_game(game), depth, self.mark)?;
        trace!(%pos, score, depth, "Search result");
        Some(pos)
    }

    fn win_or_block(&self, game: &Game) -> Option<Position> {
        find_completing_cell(game.board(), self.mark)
            .or_else(|| find_completing_cell(game.board(), self.opponent()))
    }
}
