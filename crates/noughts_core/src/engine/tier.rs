//! Strength tiers for the decision engine.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;

/// Engine strength, weakest to strongest.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Mostly random, with an occasional win-or-block.
    Easy,
    /// Fixed priority chain: win, block, centre, corner, anything.
    #[default]
    Normal,
    /// Shallow minimax.
    Hard,
    /// Full-depth minimax; never loses.
    Unbeatable,
}

impl Tier {
    /// All tiers, weakest first.
    pub const ALL: [Tier; 4] = [Tier::Easy, Tier::Normal, Tier::Hard, Tier::Unbeatable];

    /// Stable display label.
    pub fn label(self) -> &'static str {
        match self {
            Tier::Easy => "Easy",
            Tier::Normal => "Normal",
            Tier::Hard => "Hard",
            Tier::Unbeatable => "I Never Lose",
        }
    }

    /// The next tier up, wrapping from the strongest back to the weakest.
    pub fn next(self) -> Self {
        Tier::iter().cycle().skip_while(|t| *t != self).nth(1).unwrap_or(Tier::Easy)
    }

    /// Search horizon in plies for the minimax tiers.
    pub fn search_depth(self) -> Option<u32> {
        match self {
            Tier::Easy | Tier::Normal => None,
            Tier::Hard => Some(4),
            Tier::Unbeatable => Some(10),
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Text that names no tier.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown tier {input:?} (expected easy, normal, hard or unbeatable)")]
pub struct TierParseError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Tier {
    type Err = TierParseError;

    /// Accepts the snake_case name or the display label, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Tier::iter()
            .find(|tier| {
                let name = format!("{:?}", tier).to_lowercase();
                name == wanted || tier.label().to_lowercase() == wanted
            })
            .ok_or_else(|| TierParseError { input: s.to_string() })
    }
}
