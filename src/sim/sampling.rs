//! Single-shot estimator: sample a hand once, check it, repeat.
//!
//! No game state is carried between samples, so every sample is a trial.
//! Useful as a baseline next to the in-game estimate, which sees hands
//! biased by earlier removals.

use tracing::info;

use crate::cards::{catalog, contains_triple};
use crate::core::config::SimulationConfig;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::zones::sample_without_replacement;

use super::driver::ProbabilityEstimate;
use super::stats::{GameOutcome, SimulationStats};

/// Chance that `hand_size` random catalog cards contain a matching triple.
///
/// `config.num_games` is the number of samples.
pub fn estimate_sampled(config: &SimulationConfig) -> Result<ProbabilityEstimate> {
    config.validate()?;
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut rng = GameRng::new(seed);
    let cards = catalog().cards();

    let mut stats = SimulationStats::new();
    for _ in 0..config.num_games {
        let hand = sample_without_replacement(cards, config.hand_size, &mut rng)?;
        let found = contains_triple(&hand);
        stats.record(&GameOutcome {
            trials: 1,
            successes: u64::from(found),
            ..GameOutcome::default()
        });
    }

    let estimate = ProbabilityEstimate::from_stats(config.hand_size, seed, &stats)?;
    info!(
        hand_size = estimate.hand_size,
        samples = estimate.trials,
        probability = estimate.probability,
        "sampling complete"
    );
    Ok(estimate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::SimError;

    #[test]
    fn test_small_hands_never_match() {
        for hand_size in [1, 2] {
            let estimate = estimate_sampled(&SimulationConfig::new(hand_size, 50).with_seed(1)).unwrap();
            assert_eq!(estimate.successes, 0);
            assert_eq!(estimate.probability, 0.0);
        }
    }

    #[test]
    fn test_large_hands_always_match() {
        // No triple-free hand has more than 20 cards.
        let estimate = estimate_sampled(&SimulationConfig::new(21, 50).with_seed(1)).unwrap();
        assert_eq!(estimate.probability, 1.0);
    }

    #[test]
    fn test_three_cards() {
        // Any pair has exactly one completion among the 79 remaining cards.
        let estimate = estimate_sampled(&SimulationConfig::new(3, 20_000).with_seed(4)).unwrap();
        assert!((estimate.probability - 1.0 / 79.0).abs() < 0.005, "{}", estimate.probability);
    }

    #[test]
    fn test_every_sample_is_a_trial() {
        let estimate = estimate_sampled(&SimulationConfig::new(12, 30).with_seed(2)).unwrap();
        assert_eq!(estimate.trials, 30);
        assert_eq!(estimate.games, 30);
    }

    #[test]
    fn test_invalid_configuration() {
        let err = estimate_sampled(&SimulationConfig::new(0, 30)).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
        let err = estimate_sampled(&SimulationConfig::new(12, 0)).unwrap_err();
        assert!(matches!(err, SimError::InvalidConfiguration(_)));
    }
}
