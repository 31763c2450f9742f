//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts::{Mark, Mode, Tier};
use std::path::PathBuf;

/// Noughts - terminal noughts and crosses with a tiered computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Noughts and crosses against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the settings file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Who sits at the board (defaults to the settings file)
        #[arg(short, long, value_enum)]
        mode: Option<ModeArg>,

        /// Computer strength: easy, normal, hard, unbeatable
        #[arg(short, long)]
        tier: Option<Tier>,

        /// Mark the computer plays
        #[arg(long, value_enum)]
        computer_mark: Option<MarkArg>,

        /// Continue the saved game instead of starting fresh
        #[arg(short, long)]
        resume: bool,

        /// Do not save the game after each move
        #[arg(long)]
        no_save: bool,
    },

    /// Ask the computer for a move on a given board
    Recommend {
        /// Board as nine cells of X, O or '.', e.g. "X.O/.X./..."
        #[arg(short, long)]
        board: String,

        /// Strength of the advice
        #[arg(short, long, default_value = "unbeatable")]
        tier: Tier,

        /// Seed for the random tiers
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two computer tiers against each other
    Duel {
        /// Tier playing X
        #[arg(long)]
        first: Tier,

        /// Tier playing O
        #[arg(long)]
        second: Tier,

        /// Number of games
        #[arg(short, long, default_value = "10")]
        games: u32,

        /// Seed for a reproducible series
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List the available tiers
    Tiers,
}

/// Mode as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum ModeArg {
    /// Two humans sharing the terminal
    Pvp,
    /// One human against the computer
    Pvc,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Pvp => Mode::HumanVsHuman,
            ModeArg::Pvc => Mode::HumanVsComputer,
        }
    }
}

/// Mark as spelled on the command line.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum MarkArg {
    /// Crosses, moves first
    X,
    /// Noughts, moves second
    O,
}

impl From<MarkArg> for Mark {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Mark::First,
            MarkArg::O => Mark::Second,
        }
    }
}
