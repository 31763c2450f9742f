//! Noughts - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use noughts::{
    ComputerPlayer, DecisionEngine, Game, GameEvent, GameSnapshot, HumanPlayer, Mark, Mode,
    Orchestrator, Player, Settings, SnapshotStore, StdinLines, Tier, duel, parse_board, render,
};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Command::Play {
            mode,
            tier,
            computer_mark,
            resume,
            no_save,
        } => {
            let mut settings = Settings::load_or_default(&cli.config)?;
            if let Some(mode) = mode {
                settings = settings.with_mode(mode.into());
            }
            if let Some(tier) = tier {
                settings = settings.with_tier(tier);
            }
            if let Some(mark) = computer_mark {
                settings = settings.with_computer_mark(mark.into());
            }
            run_play(settings, resume, no_save)
        }
        Command::Recommend { board, tier, seed } => run_recommend(&board, tier, seed),
        Command::Duel {
            first,
            second,
            games,
            seed,
        } => {
            let record = duel(first, second, games, seed)?;
            println!("{}", record);
            Ok(())
        }
        Command::Tiers => {
            for tier in Tier::ALL {
                let depth = tier
                    .search_depth()
                    .map_or_else(|| "no search".to_string(), |d| format!("searches {} plies", d));
                println!("{:<12} {}", tier.label(), depth);
            }
            Ok(())
        }
    }
}

/// Logs go to stderr so they never interleave with the board on stdout.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Plays one game in the terminal.
#[instrument(skip(settings), fields(tier = %settings.tier(), mode = ?settings.mode()))]
fn run_play(settings: Settings, resume: bool, no_save: bool) -> Result<()> {
    let store = SnapshotStore::new(settings.save_path().clone());

    let game = if resume {
        match store.load()? {
            Some(game) if !game.status().is_over() => game,
            _ => {
                println!("No unfinished game to resume, starting fresh.");
                Game::with_mode(*settings.mode())
            }
        }
    } else {
        Game::with_mode(*settings.mode())
    };
    let mode = game.mode();
    info!(?mode, moves = game.history().len(), "Starting play session");

    let human = |name: &str| -> Box<dyn Player> {
        Box::new(HumanPlayer::new(name, StdinLines::new(), std::io::stdout()))
    };
    let (first, second) = match mode {
        Mode::HumanVsHuman => (human("Player X"), human("Player O")),
        Mode::HumanVsComputer => {
            let computer: Box<dyn Player> =
                Box::new(ComputerPlayer::new(*settings.tier(), *settings.computer_mark()));
            match settings.computer_mark() {
                Mark::First => (computer, human("You")),
                Mark::Second => (human("You"), computer),
            }
        }
    };

    let save = *settings.auto_save() && !no_save;
    let mut orchestrator = Orchestrator::new(first, second).with_game(game);
    if save {
        println!("Saving to {} after every move.", store.path().display());
        orchestrator = orchestrator.with_store(store.clone());
    }

    loop {
        println!("{}\n", render(orchestrator.game()));
        let status = orchestrator.run(|event, game| match event {
            GameEvent::MoveMade {
                player, position, ..
            } => {
                println!("\n{} played {}.\n", player, position.label());
                println!("{}\n", render(game));
            }
            GameEvent::Rejected { reason, .. } => println!("{}", reason),
            GameEvent::GameOver { winner, .. } => match winner {
                Some(name) => println!("{} won.", name),
                None => println!("Nobody won."),
            },
        })?;

        if save {
            store.clear()?;
        }
        debug!(%status, "Game finished");

        if !play_again()? {
            break;
        }
        orchestrator.restart();
    }
    Ok(())
}

/// Asks whether to start another game. End of input counts as no.
fn play_again() -> Result<bool> {
    print!("Play again? [y/N] ");
    std::io::stdout().flush()?;

    let mut answer = String::new();
    StdinLines::new().read_line(&mut answer)?;
    Ok(answer.trim().to_lowercase().starts_with('y'))
}

/// Prints the engine's move for a board given in notation.
#[instrument]
fn run_recommend(board: &str, tier: Tier, seed: Option<u64>) -> Result<()> {
    let board = parse_board(board)?;
    let game = Game::restore(GameSnapshot::from_board(board, Mode::HumanVsComputer))
        .context("Board is not reachable in a legal game")?;

    let mark = game.to_move();
    let mut engine = match seed {
        Some(seed) => DecisionEngine::seeded(tier, mark, seed),
        None => DecisionEngine::new(tier, mark),
    };

    match engine.recommend_move(&game) {
        Some(pos) => println!("{} plays {} {}", mark, pos.label(), pos),
        None => println!("No move: {}", game.status()),
    }
    Ok(())
}
