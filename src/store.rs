//! Saved-game store: one JSON snapshot on disk.

use derive_more::{Display, Error};
use noughts_core::{Game, GameSnapshot};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Saves and restores the current game as a JSON file.
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Creates a store backed by `path`. Nothing is touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the game's snapshot, replacing any previous save.
    #[instrument(skip(self, game), fields(path = %self.path.display(), moves = game.history().len()))]
    pub fn save(&self, game: &Game) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&game.snapshot())?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(&self.path, json)?;
        debug!("Game saved");
        Ok(())
    }

    /// Loads the saved game, or `None` if nothing has been saved.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> Result<Option<Game>, StoreError> {
        if !self.path.exists() {
            debug!("No saved game");
            return Ok(None);
        }

        let json = std::fs::read_to_string(&self.path)?;
        let snapshot: GameSnapshot = serde_json::from_str(&json)?;
        let game = Game::restore(snapshot).map_err(|e| StoreError::new(e.to_string()))?;

        info!(moves = game.history().len(), status = %game.status(), "Saved game restored");
        Ok(Some(game))
    }

    /// Removes the saved game. Missing files are not an error.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn clear(&self) -> Result<(), StoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Saved game removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Store error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Store error: {} at {}:{}", message, file, line)]
pub struct StoreError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StoreError {
    /// Creates a new store error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

impl From<std::io::Error> for StoreError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::new(format!("I/O error: {}", err))
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("JSON error: {}", err))
    }
}
