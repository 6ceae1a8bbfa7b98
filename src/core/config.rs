//! Simulation configuration.
//!
//! The only knobs are the target hand size, the number of games and an
//! optional seed. Everything else (catalog, triple size) is fixed.

use serde::{Deserialize, Serialize};

use super::error::{Result, SimError};
use crate::cards::CATALOG_SIZE;

/// Configuration for a Monte Carlo run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Cards held at the start of a game and the size that makes a round a trial.
    pub hand_size: usize,

    /// Number of independent games to play.
    pub num_games: usize,

    /// Root seed. `None` draws one from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hand_size: 12,
            num_games: 1000,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a config with the given hand size and game count.
    pub fn new(hand_size: usize, num_games: usize) -> Self {
        Self {
            hand_size,
            num_games,
            seed: None,
        }
    }

    /// Set the target hand size.
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the number of games.
    #[must_use]
    pub fn with_num_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    /// Fix the root seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject configurations that cannot be simulated.
    pub fn validate(&self) -> Result<()> {
        if self.num_games == 0 {
            return Err(SimError::InvalidConfiguration(
                "number of games must be positive".to_string(),
            ));
        }
        validate_hand_size(self.hand_size)
    }
}

/// A hand size must be reachable from the fixed catalog.
pub(crate) fn validate_hand_size(hand_size: usize) -> Result<()> {
    if hand_size == 0 || hand_size > CATALOG_SIZE {
        return Err(SimError::InvalidConfiguration(format!(
            "hand size must be between 1 and {CATALOG_SIZE}, got {hand_size}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.hand_size, 12);
        assert_eq!(config.num_games, 1000);
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = SimulationConfig::default()
            .with_hand_size(15)
            .with_num_games(50)
            .with_seed(9);

        assert_eq!(config, SimulationConfig { hand_size: 15, num_games: 50, seed: Some(9) });
    }

    #[test]
    fn test_validate_rejects_zero_games() {
        let err = SimulationConfig::new(12, 0).validate().unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_validate_rejects_bad_hand_sizes() {
        for hand_size in [0, CATALOG_SIZE + 1, 500] {
            let err = SimulationConfig::new(hand_size, 10).validate().unwrap_err();
            assert!(matches!(err, SimError::InvalidConfiguration(_)), "hand size {hand_size}");
        }
    }

    #[test]
    fn test_validate_accepts_full_catalog() {
        assert!(SimulationConfig::new(CATALOG_SIZE, 1).validate().is_ok());
        assert!(SimulationConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_config_serde() {
        let config = SimulationConfig::new(9, 20).with_seed(1);
        let json = serde_json::to_string(&config).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
