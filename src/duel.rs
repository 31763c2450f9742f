//! Computer-versus-computer matches between two tiers.

use crate::orchestrator::Orchestrator;
use crate::players::ComputerPlayer;
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use noughts_core::{GameStatus, Mark, Tier};
use tracing::{debug, info, instrument};

/// Tally of a series of games between two tiers.
#[derive(Debug, Clone, PartialEq, Eq, new, Getters)]
pub struct DuelRecord {
    /// Tier seated as X.
    first: Tier,
    /// Tier seated as O.
    second: Tier,
    /// Games won by X.
    #[new(default)]
    first_wins: u32,
    /// Games won by O.
    #[new(default)]
    second_wins: u32,
    /// Drawn games.
    #[new(default)]
    draws: u32,
}

impl DuelRecord {
    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.first_wins + self.second_wins + self.draws
    }

    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Mark::First) => self.first_wins += 1,
            GameStatus::Won(Mark::Second) => self.second_wins += 1,
            GameStatus::Draw | GameStatus::InProgress => self.draws += 1,
        }
    }
}

impl std::fmt::Display for DuelRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (X) vs {} (O): {} - {}, {} drawn",
            self.first, self.second, self.first_wins, self.second_wins, self.draws
        )
    }
}

/// Plays `games` games of `first` (as X) against `second` (as O).
///
/// With a seed, game `i` seeds the two engines from `seed + 2i` and
/// `seed + 2i + 1`, so a series is reproducible.
#[instrument]
pub fn duel(first: Tier, second: Tier, games: u32, seed: Option<u64>) -> Result<DuelRecord> {
    let mut record = DuelRecord::new(first, second);

    for i in 0..games {
        let (x, o) = match seed {
            Some(seed) => {
                let base = seed.wrapping_add(2 * u64::from(i));
                (
                    ComputerPlayer::seeded(first, Mark::First, base),
                    ComputerPlayer::seeded(second, Mark::Second, base.wrapping_add(1)),
                )
            }
            None => (
                ComputerPlayer::new(first, Mark::First),
                ComputerPlayer::new(second, Mark::Second),
            ),
        };

        let status = Orchestrator::new(Box::new(x), Box::new(o)).run(|_, _| {})?;
        debug!(game = i, %status, "Duel game finished");
        record.record(status);
    }

    info!(%record, "Duel finished");
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbeatable_never_loses_to_easy() {
        let record = duel(Tier::Easy, Tier::Unbeatable, 4, Some(11)).unwrap();
        assert_eq!(record.games(), 4);
        assert_eq!(*record.first_wins(), 0);
    }

    #[test]
    fn test_seeded_duel_is_reproducible() {
        let a = duel(Tier::Easy, Tier::Normal, 5, Some(3)).unwrap();
        let b = duel(Tier::Easy, Tier::Normal, 5, Some(3)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_tally() {
        let record = DuelRecord::new(Tier::Hard, Tier::Easy);
        assert_eq!(record.to_string(), "Hard (X) vs Easy (O): 0 - 0, 0 drawn");
    }
}
