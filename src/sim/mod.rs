//! Simulation: the game state machine and the estimators built on it.
//!
//! ## Key Types
//!
//! - `Game`: one play-through, stepped one phase at a time
//! - `GameOutcome` / `SimulationStats`: per-game and aggregate counters
//! - `MonteCarloDriver`: runs many games into a `ProbabilityEstimate`
//!
//! `sampling` holds the stateless single-shot estimator.

pub mod driver;
pub mod game;
pub mod sampling;
pub mod stats;

pub use driver::{estimate_probability, estimate_probability_seeded, MonteCarloDriver, ProbabilityEstimate};
pub use game::{Game, GamePhase};
pub use sampling::estimate_sampled;
pub use stats::{GameOutcome, SimulationStats};
