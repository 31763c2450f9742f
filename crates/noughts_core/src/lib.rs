//! Noughts and crosses rules and a tiered computer opponent.
//!
//! # Architecture
//!
//! - **Board engine** ([`Game`]): grid, turn order, legality, terminal
//!   detection and move history. Pure state transitions, no I/O.
//! - **Decision engine** ([`DecisionEngine`]): reads a [`Game`] and
//!   recommends a move for one of four [`Tier`]s, the strongest of which
//!   searches the whole remaining game tree and never loses.
//! - **Snapshots** ([`GameSnapshot`]): serde values a host can persist and
//!   restore, validated against the game invariants on the way back in.
//!
//! # Example
//!
//! ```
//! use noughts_core::{DecisionEngine, Game, Mark, Tier};
//!
//! let mut game = Game::new();
//! game.attempt_move(0, 0).unwrap();
//!
//! let mut engine = DecisionEngine::seeded(Tier::Unbeatable, Mark::Second, 7);
//! let reply = engine.recommend_move(&game).unwrap();
//! game.play(reply).unwrap();
//! assert_eq!(game.history().len(), 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod game;
mod position;
mod snapshot;
mod types;

pub mod engine;
pub mod invariants;
pub mod rules;

pub use board::Board;
pub use engine::{DecisionEngine, Tier, TierParseError, find_completing_cell};
pub use error::{MoveError, PositionParseError, SnapshotError};
pub use game::Game;
pub use position::{Position, SIZE};
pub use snapshot::GameSnapshot;
pub use types::{GameStatus, Mark, Mode, Square};
