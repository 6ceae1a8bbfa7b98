//! Monte Carlo driver: many independent games, one estimate.
//!
//! The driver validates its configuration before any game starts, forks one
//! RNG stream per game from the root seed, and reduces the per-game outcomes
//! into `SimulationStats`. Games share nothing but the read-only catalog.

use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::catalog;
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;

use super::game::Game;
use super::stats::SimulationStats;

/// Result of a Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityEstimate {
    /// Target hand size the estimate is for.
    pub hand_size: usize,

    /// Successes over trials, in `[0, 1]`.
    pub probability: f64,

    /// Valid trials counted.
    pub trials: u64,

    /// Successful trials.
    pub successes: u64,

    /// Games (or samples) played.
    pub games: u64,

    /// Root seed, for reproducing the run.
    pub seed: u64,
}

impl ProbabilityEstimate {
    pub(crate) fn from_stats(hand_size: usize, seed: u64, stats: &SimulationStats) -> Result<Self> {
        Ok(Self {
            hand_size,
            probability: stats.probability()?,
            trials: stats.trials,
            successes: stats.successes,
            games: stats.games,
            seed,
        })
    }
}

/// Runs the game simulator many times.
#[derive(Clone, Debug)]
pub struct MonteCarloDriver {
    config: SimulationConfig,
    seed: u64,
}

impl MonteCarloDriver {
    /// Validate `config` and pick the root seed.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let seed = config.seed.unwrap_or_else(rand::random);
        Ok(Self { config, seed })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Play every game and return the aggregate statistics.
    pub fn simulate(&self) -> Result<SimulationStats> {
        let catalog = catalog();
        let mut root = GameRng::new(self.seed);
        let mut stats = SimulationStats::new();
        let start = Instant::now();

        for _ in 0..self.config.num_games {
            let outcome = Game::new(catalog, self.config.hand_size, root.fork())?.run()?;
            stats.record(&outcome);
        }

        stats.time_us = start.elapsed().as_micros() as u64;
        Ok(stats)
    }

    /// Play every game and compute the estimate.
    pub fn run(&self) -> Result<ProbabilityEstimate> {
        let stats = self.simulate()?;
        let estimate = ProbabilityEstimate::from_stats(self.config.hand_size, self.seed, &stats)?;
        info!(
            hand_size = estimate.hand_size,
            games = estimate.games,
            trials = estimate.trials,
            successes = estimate.successes,
            probability = estimate.probability,
            games_per_second = stats.games_per_second(),
            "simulation complete"
        );
        Ok(estimate)
    }
}

/// Estimate the chance of a matching triple in a full hand of `hand_size`.
///
/// Seeds from OS entropy; use `estimate_probability_seeded` to reproduce.
pub fn estimate_probability(hand_size: usize, num_games: usize) -> Result<ProbabilityEstimate> {
    MonteCarloDriver::new(SimulationConfig::new(hand_size, num_games))?.run()
}

/// Deterministic variant of `estimate_probability`.
pub fn estimate_probability_seeded(
    hand_size: usize,
    num_games: usize,
    seed: u64,
) -> Result<ProbabilityEstimate> {
    MonteCarloDriver::new(SimulationConfig::new(hand_size, num_games).with_seed(seed))?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SimError;

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            estimate_probability(0, 10),
            Err(SimError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            estimate_probability(12, 0),
            Err(SimError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            estimate_probability(82, 10),
            Err(SimError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_seeded_run_is_reproducible() {
        let a = estimate_probability_seeded(12, 50, 7).unwrap();
        let b = estimate_probability_seeded(12, 50, 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.seed, 7);
        assert_eq!(a.games, 50);
    }

    #[test]
    fn test_every_game_contributes_a_trial() {
        let estimate = estimate_probability_seeded(12, 40, 3).unwrap();
        assert!(estimate.trials >= estimate.games);
        assert!(estimate.successes <= estimate.trials);
        assert!((0.0..=1.0).contains(&estimate.probability));
    }

    #[test]
    fn test_driver_uses_configured_seed() {
        let driver = MonteCarloDriver::new(SimulationConfig::new(12, 5).with_seed(123)).unwrap();
        assert_eq!(driver.seed(), 123);
        assert_eq!(driver.config().num_games, 5);

        let stats = driver.simulate().unwrap();
        assert_eq!(stats.games, 5);
        assert_eq!(stats.short_draws, 0);
    }

    #[test]
    fn test_unseeded_run() {
        let estimate = estimate_probability(9, 20).unwrap();
        assert_eq!(estimate.games, 20);
        assert_eq!(estimate.hand_size, 9);
    }
}
