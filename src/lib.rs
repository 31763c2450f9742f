//! Noughts library - the host side of a terminal noughts and crosses game.
//!
//! The rules and the computer opponent live in [`noughts_core`]; this crate
//! adds what a playable program needs around them.
//!
//! # Architecture
//!
//! - **Settings**: TOML file with tier, computer mark, mode and save path
//! - **Store**: the current game saved as a JSON snapshot
//! - **Players**: humans on a text stream, computers on the decision engine
//! - **Orchestrator**: the move loop between two players
//! - **Duel**: computer-versus-computer series between two tiers
//!
//! # Example
//!
//! ```
//! use noughts::{ComputerPlayer, GameStatus, Mark, Orchestrator, Tier};
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut orchestrator = Orchestrator::new(
//!     Box::new(ComputerPlayer::seeded(Tier::Unbeatable, Mark::First, 1)),
//!     Box::new(ComputerPlayer::seeded(Tier::Unbeatable, Mark::Second, 2)),
//! );
//! let status = orchestrator.run(|_, _| {})?;
//! assert_eq!(status, GameStatus::Draw);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod duel;
mod notation;
mod orchestrator;
mod players;
mod settings;
mod store;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - Saved games
pub use store::{SnapshotStore, StoreError};

// Crate-level exports - Players and orchestration
pub use orchestrator::{GameEvent, Orchestrator};
pub use duel::{DuelRecord, duel};
pub use players::{ComputerPlayer, HumanPlayer, Player, StdinLines};

// Crate-level exports - Text notation
pub use notation::{format_board, parse_board, render};

// Crate-level exports - Core game types
pub use noughts_core::{
    Board, DecisionEngine, Game, GameSnapshot, GameStatus, Mark, Mode, MoveError, Position,
    SnapshotError, Square, Tier,
};
