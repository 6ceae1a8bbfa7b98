//! Core engine types: errors, RNG, configuration.
//!
//! These are the ambient building blocks shared by the card primitives,
//! the game simulator and the driver.

pub mod config;
pub mod error;
pub mod rng;

pub use config::SimulationConfig;
pub use error::{Result, SimError};
pub use rng::GameRng;
