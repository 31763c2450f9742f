//! Game orchestration between players.

use crate::players::Player;
use crate::store::SnapshotStore;
use anyhow::Result;
use noughts_core::{Game, GameStatus, Mark, MoveError, Position};
use tracing::{debug, info, instrument, warn};

/// Consecutive refused moves tolerated from one player before giving up.
const MAX_REJECTIONS: usize = 3;

/// Events emitted while a game is played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A move was accepted.
    MoveMade {
        /// Name of the player who moved.
        player: String,
        /// Mark that was placed.
        mark: Mark,
        /// Where it was placed.
        position: Position,
    },
    /// A player proposed a move the board refused.
    Rejected {
        /// Name of the player.
        player: String,
        /// The refused position.
        position: Position,
        /// Why it was refused.
        reason: MoveError,
    },
    /// The game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
        /// Name of the winner, if any.
        winner: Option<String>,
    },
}

/// Drives one game between two players.
pub struct Orchestrator<'p> {
    game: Game,
    first: Box<dyn Player + 'p>,
    second: Box<dyn Player + 'p>,
    store: Option<SnapshotStore>,
}

impl<'p> Orchestrator<'p> {
    /// Creates an orchestrator for a fresh game.
    pub fn new(first: Box<dyn Player + 'p>, second: Box<dyn Player + 'p>) -> Self {
        Self {
            game: Game::new(),
            first,
            second,
            store: None,
        }
    }

    /// Continues from an existing game instead of a fresh one.
    pub fn with_game(mut self, game: Game) -> Self {
        self.game = game;
        self
    }

    /// Saves the game to `store` after every accepted move.
    pub fn with_store(mut self, store: SnapshotStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Runs the game loop until the game ends, reporting to `observer`.
    #[instrument(skip_all, fields(first = %self.first.name(), second = %self.second.name()))]
    pub fn run(&mut self, mut observer: impl FnMut(&GameEvent, &Game)) -> Result<GameStatus> {
        info!("Starting game orchestration");
        let mut rejections = 0;

        while !self.game.status().is_over() {
            let mark = self.game.to_move();
            let player = match mark {
                Mark::First => &mut self.first,
                Mark::Second => &mut self.second,
            };
            let name = player.name().to_string();

            debug!(player = %name, ?mark, "Waiting for move");
            let position = player.choose_move(&self.game)?;

            match self.game.play(position) {
                Ok(()) => {
                    rejections = 0;
                    observer(
                        &GameEvent::MoveMade {
                            player: name,
                            mark,
                            position,
                        },
                        &self.game,
                    );
                    if let Some(store) = &self.store {
                        store.save(&self.game)?;
                    }
                }
                Err(reason) => {
                    rejections += 1;
                    warn!(player = %name, %position, %reason, rejections, "Move refused");
                    observer(
                        &GameEvent::Rejected {
                            player: name.clone(),
                            position,
                            reason,
                        },
                        &self.game,
                    );
                    if rejections >= MAX_REJECTIONS {
                        anyhow::bail!("{} proposed {} illegal moves in a row", name, rejections);
                    }
                }
            }
        }

        let status = self.game.status();
        let winner = status.winner().map(|mark| match mark {
            Mark::First => self.first.name().to_string(),
            Mark::Second => self.second.name().to_string(),
        });

        info!(%status, ?winner, "Game over");
        observer(&GameEvent::GameOver { status, winner }, &self.game);
        Ok(status)
    }

    /// Resets the board for another game with the same players.
    pub fn restart(&mut self) {
        self.game.reset();
    }
}
