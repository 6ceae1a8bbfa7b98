//! Per-game outcomes and aggregate statistics.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, SimError};

/// Counters produced by one finished game.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// Search rounds entered with a full hand.
    pub trials: u64,

    /// Trials in which a matching triple was found.
    pub successes: u64,

    /// Triples removed from the hand, in any round.
    pub triples_removed: u32,

    /// Search rounds of any kind.
    pub rounds: u32,

    /// Replenishments that found fewer than 3 cards left in the deck.
    pub short_draws: u32,
}

/// Statistics accumulated across games.
///
/// Built by reduction over `GameOutcome`s; two partial aggregates combine
/// with `merge`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Games played.
    pub games: u64,

    /// Total valid trials (the probability denominator).
    pub trials: u64,

    /// Total successful trials.
    pub successes: u64,

    /// Total triples removed.
    pub triples_removed: u64,

    /// Total search rounds.
    pub rounds: u64,

    /// Total short replenishments.
    pub short_draws: u64,

    /// Time spent simulating (microseconds).
    pub time_us: u64,
}

impl SimulationStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one game.
    pub fn record(&mut self, outcome: &GameOutcome) {
        self.games += 1;
        self.trials += outcome.trials;
        self.successes += outcome.successes;
        self.triples_removed += u64::from(outcome.triples_removed);
        self.rounds += u64::from(outcome.rounds);
        self.short_draws += u64::from(outcome.short_draws);
    }

    /// Fold another aggregate into this one.
    pub fn merge(&mut self, other: &SimulationStats) {
        self.games += other.games;
        self.trials += other.trials;
        self.successes += other.successes;
        self.triples_removed += other.triples_removed;
        self.rounds += other.rounds;
        self.short_draws += other.short_draws;
        self.time_us += other.time_us;
    }

    /// Successes over trials. Fails with `NoValidTrials` on an empty denominator.
    pub fn probability(&self) -> Result<f64> {
        if self.trials == 0 {
            return Err(SimError::NoValidTrials);
        }
        Ok(self.successes as f64 / self.trials as f64)
    }

    /// Average number of trials a game contributes.
    #[must_use]
    pub fn trials_per_game(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.trials as f64 / self.games as f64
        }
    }

    /// Calculate games per second.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.games as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
