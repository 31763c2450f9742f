//! Player settings loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Mark, Mode, Tier};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Settings {
    /// Computer opponent strength.
    #[serde(default)]
    tier: Tier,

    /// Mark the computer plays in human-vs-computer games.
    #[serde(default = "default_computer_mark")]
    computer_mark: Mark,

    /// Who is seated at the board.
    #[serde(default)]
    mode: Mode,

    /// Where the current game is saved.
    #[serde(default = "default_save_path")]
    save_path: PathBuf,

    /// Save after every accepted move.
    #[serde(default = "default_auto_save")]
    auto_save: bool,
}

#[instrument]
fn default_computer_mark() -> Mark {
    Mark::Second
}

#[instrument]
fn default_save_path() -> PathBuf {
    PathBuf::from("noughts_game.json")
}

#[instrument]
fn default_auto_save() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tier: Tier::default(),
            computer_mark: default_computer_mark(),
            mode: Mode::default(),
            save_path: default_save_path(),
            auto_save: default_auto_save(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(tier = %settings.tier, mode = ?settings.mode, "Settings loaded");
        Ok(settings)
    }

    /// Loads settings from `path`, or defaults if the file does not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Settings file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes settings to a TOML file.
    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to encode settings: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| ConfigError::new(format!("Failed to write settings file: {}", e)))?;
        debug!("Settings saved");
        Ok(())
    }

    /// Returns a copy with the given tier.
    pub fn with_tier(mut self, tier: Tier) -> Self {
        self.tier = tier;
        self
    }

    /// Returns a copy with the given computer mark.
    pub fn with_computer_mark(mut self, mark: Mark) -> Self {
        self.computer_mark = mark;
        self
    }

    /// Returns a copy with the given mode.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with the given save path.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = path.into();
        self
    }

    /// Moves to the next tier, wrapping from the strongest to the weakest.
    pub fn cycle_tier(&mut self) -> Tier {
        self.tier = self.tier.next();
        self.tier
    }
}

/// Settings error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
