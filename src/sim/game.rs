//! One game from deal to empty deck.
//!
//! ## Phases
//!
//! ```text
//! Dealing -> SearchingForMatch <-> Replenishing -> Done
//!                  ^        |
//!                  +--------+  (triple found and removed)
//! ```
//!
//! Each call to `Game::step` performs exactly one transition, so tests can
//! observe the game between rounds. `Game::run` steps until `Done`.
//!
//! A search round is a trial only when the hand holds exactly the target
//! number of cards. Rounds reached with an oversized hand (after
//! replenishing) or an undersized one (after removing a triple) still remove
//! triples but do not count toward the estimate.
//!
//! The deck holds `81 - hand_size - 3k` cards during play, a multiple of 3
//! exactly when the hand size is. For other hand sizes the last
//! replenishment takes whatever is left and is counted as a short draw.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{find_first_triple, Catalog, TRIPLE_SIZE};
use crate::core::config::validate_hand_size;
use crate::core::error::Result;
use crate::core::rng::GameRng;
use crate::zones::{Deck, Hand};

use super::stats::GameOutcome;

/// Where a game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Deck not yet shuffled, hand empty.
    Dealing,
    /// Looking for a matching triple in the hand.
    SearchingForMatch,
    /// No triple in hand; draw more cards or finish.
    Replenishing,
    /// Deck empty and no triple left in hand.
    Done,
}

/// A single game with its own deck, hand and RNG stream.
#[derive(Clone, Debug)]
pub struct Game {
    phase: GamePhase,
    target_hand_size: usize,
    deck: Deck,
    hand: Hand,
    rng: GameRng,
    outcome: GameOutcome,
}

impl Game {
    /// Set up a game over a fresh copy of `catalog`.
    ///
    /// Fails with `InvalidConfiguration` when the hand size cannot be dealt.
    pub fn new(catalog: &Catalog, target_hand_size: usize, rng: GameRng) -> Result<Self> {
        validate_hand_size(target_hand_size)?;
        Ok(Self {
            phase: GamePhase::Dealing,
            target_hand_size,
            deck: Deck::new(catalog.to_vec()),
            hand: Hand::new(),
            rng,
            outcome: GameOutcome::default(),
        })
    }

    /// Advance one transition and return the new phase.
    ///
    /// Stepping a finished game is a no-op.
    pub fn step(&mut self) -> Result<GamePhase> {
        let next = match self.phase {
            GamePhase::Dealing => self.deal()?,
            GamePhase::SearchingForMatch => self.search()?,
            GamePhase::Replenishing => self.replenish()?,
            GamePhase::Done => GamePhase::Done,
        };
        trace!(from = ?self.phase, to = ?next, hand = self.hand.len(), deck = self.deck.len(), "step");
        self.phase = next;
        Ok(next)
    }

    /// Play to the end and return the accumulated counters.
    pub fn run(mut self) -> Result<GameOutcome> {
        while self.step()? != GamePhase::Done {}
        debug!(
            seed = self.rng.seed(),
            trials = self.outcome.trials,
            successes = self.outcome.successes,
            triples = self.outcome.triples_removed,
            "game finished"
        );
        Ok(self.outcome)
    }

    fn deal(&mut self) -> Result<GamePhase> {
        self.deck.shuffle(&mut self.rng);
        let dealt = self.deck.draw(self.target_hand_size)?;
        self.hand.extend(dealt);
        Ok(GamePhase::SearchingForMatch)
    }

    fn search(&mut self) -> Result<GamePhase> {
        self.outcome.rounds += 1;

        let is_trial = self.hand.len() == self.target_hand_size;
        if is_trial {
            self.outcome.trials += 1;
        }

        match find_first_triple(self.hand.cards()) {
            Some(positions) => {
                if is_trial {
                    self.outcome.successes += 1;
                }
                let triple = self.hand.take_positions(positions)?;
                trace!(?triple, "removed triple");
                self.outcome.triples_removed += 1;
                Ok(GamePhase::SearchingForMatch)
            }
            None => Ok(GamePhase::Replenishing),
        }
    }

    fn replenish(&mut self) -> Result<GamePhase> {
        if self.deck.is_empty() {
            return Ok(GamePhase::Done);
        }

        let count = TRIPLE_SIZE.min(self.deck.len());
        if count < TRIPLE_SIZE {
            debug!(remaining = count, "short replenishment");
            self.outcome.short_draws += 1;
        }
        let drawn = self.deck.draw(count)?;
        self.hand.extend(drawn);
        Ok(GamePhase::SearchingForMatch)
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn target_hand_size(&self) -> usize {
        self.target_hand_size
    }

    #[must_use]
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Counters so far.
    #[must_use]
    pub fn outcome(&self) -> &GameOutcome {
        &self.outcome
    }

    /// Hand + deck + removed cards. Always equals the catalog size.
    #[must_use]
    pub fn cards_accounted_for(&self) -> usize {
        self.hand.len() + self.deck.len() + TRIPLE_SIZE * self.outcome.triples_removed as usize
    }
}
