//! Card piles: the working deck and the player's hand.
//!
//! ## Key Types
//!
//! - `Deck`: ordered pile, drawn from the top
//! - `Hand`: insertion-ordered cards, removed by value
//!
//! `sample_without_replacement` is the non-destructive counterpart of
//! `Deck::draw`, used by the single-shot estimator.

pub mod pile;

pub use pile::{sample_without_replacement, Deck, Hand};
