//! # set-odds
//!
//! Monte Carlo estimate of how often a player of a SET-style card game
//! holding a full hand can find a matching triple.
//!
//! ## Design Principles
//!
//! 1. **Closed Domain**: Four attributes with three values each are plain
//!    enums. The 81-card catalog is built once and never mutated.
//!
//! 2. **Explicit State**: A game owns its deck, hand and RNG stream and is
//!    advanced one phase at a time by `Game::step`.
//!
//! 3. **Honest Denominator**: Only search rounds entered with exactly the
//!    target hand size count as trials.
//!
//! ## Architecture
//!
//! - **Deterministic Games**: Each game forks its own ChaCha8 stream from
//!   the root seed, so a seeded run is reproducible game by game.
//!
//! - **Reduction, not Sharing**: Per-game outcomes are folded into
//!   `SimulationStats`; no counter is shared between games.
//!
//! ## Modules
//!
//! - `core`: errors, RNG, configuration
//! - `cards`: attributes, cards, catalog, matching rule
//! - `zones`: deck and hand primitives
//! - `sim`: game state machine, Monte Carlo driver, sampling estimator

pub mod cards;
pub mod core;
pub mod sim;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameRng, Result, SimError, SimulationConfig};

pub use crate::cards::{
    build_catalog, catalog, is_matching_triple, Attribute, Card, Catalog, Color, Count, Fill,
    Shape, CATALOG_SIZE, TRIPLE_SIZE,
};

pub use crate::zones::{sample_without_replacement, Deck, Hand};

pub use crate::sim::{
    estimate_probability, estimate_probability_seeded, estimate_sampled, Game, GameOutcome,
    GamePhase, MonteCarloDriver, ProbabilityEstimate, SimulationStats,
};
