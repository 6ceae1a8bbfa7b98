//! Error taxonomy for the simulator.
//!
//! Every variant is a contract violation, not a transient condition.
//! Nothing in the crate catches and retries these; they propagate to the
//! caller of the driver, which aborts the run.

use thiserror::Error;

use crate::cards::Card;

/// Errors raised by the card primitives, the game simulator and the driver.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// A match check received other than three cards.
    #[error("a matching check needs exactly 3 cards, got {0}")]
    InvalidArity(usize),

    /// A draw or sample asked for more cards than the pile holds.
    #[error("cannot take {requested} cards, only {available} available")]
    InsufficientCards { requested: usize, available: usize },

    /// A draw or sample asked for zero cards.
    #[error("invalid number of cards to take: {0}")]
    InvalidCount(usize),

    /// Removal named a card the hand does not hold.
    #[error("card {0} is not in the hand")]
    CardNotFound(Card),

    /// The driver was given a hand size or game count it cannot run.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A probability was requested but no round counted as a trial.
    #[error("no valid trials were recorded")]
    NoValidTrials,
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
