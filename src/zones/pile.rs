//! Deck and hand primitives.
//!
//! The `Deck` is an ordered pile; index 0 is the bottom and the last element
//! is the top, so drawing is a truncation. The `Hand` keeps insertion order
//! so the canonical triple search is reproducible for a given seed.
//!
//! Both piles reject bad requests with a `SimError` instead of clamping.

use smallvec::SmallVec;

use crate::cards::{Card, TRIPLE_SIZE};
use crate::core::error::{Result, SimError};
use crate::core::rng::GameRng;

/// Inline capacity of a hand; typical play stays at or below this.
const HAND_INLINE: usize = 24;

/// Non-destructive random sample of `n` distinct cards from `cards`.
pub fn sample_without_replacement(cards: &[Card], n: usize, rng: &mut GameRng) -> Result<Vec<Card>> {
    check_take(n, cards.len())?;
    Ok(rng
        .sample_indices(cards.len(), n)
        .into_iter()
        .map(|i| cards[i])
        .collect())
}

fn check_take(requested: usize, available: usize) -> Result<()> {
    if requested == 0 {
        return Err(SimError::InvalidCount(requested));
    }
    if requested > available {
        return Err(SimError::InsufficientCards { requested, available });
    }
    Ok(())
}

/// A game's working deck.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Deck holding `cards`; the last card is the top.
    #[must_use]
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Shuffle in place.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top `n` cards, keeping their deck order.
    pub fn draw(&mut self, n: usize) -> Result<Vec<Card>> {
        check_take(n, self.cards.len())?;
        let at = self.cards.len() - n;
        Ok(self.cards.split_off(at))
    }

    /// Get the top card (last in the vec).
    #[must_use]
    pub fn top_card(&self) -> Option<&Card> {
        self.cards.last()
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

/// Cards held by the player, in the order they arrived.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Hand {
    cards: SmallVec<[Card; HAND_INLINE]>,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append cards after the ones already held.
    pub fn extend(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards.extend(cards);
    }

    /// Remove each named card once.
    ///
    /// Every card must be present; a card named twice needs two copies in
    /// the hand. On failure the hand is left untouched.
    pub fn remove(&mut self, cards: &[Card]) -> Result<()> {
        let mut positions: SmallVec<[usize; TRIPLE_SIZE]> = SmallVec::new();
        for card in cards {
            let pos = (0..self.cards.len())
                .find(|&i| self.cards[i] == *card && !positions.contains(&i))
                .ok_or(SimError::CardNotFound(*card))?;
            positions.push(pos);
        }

        // Highest index first so earlier positions stay valid.
        positions.sort_unstable_by(|a, b| b.cmp(a));
        for pos in positions {
            self.cards.remove(pos);
        }
        Ok(())
    }

    /// Remove the cards at the given positions.
    ///
    /// Returns the removed cards in position order.
    pub fn take_positions(&mut self, positions: [usize; TRIPLE_SIZE]) -> Result<[Card; TRIPLE_SIZE]> {
        let mut sorted = positions;
        sorted.sort_unstable();
        let taken = [self.card_at(sorted[0])?, self.card_at(sorted[1])?, self.card_at(sorted[2])?];
        self.remove(&taken)?;
        Ok(taken)
    }

    fn card_at(&self, pos: usize) -> Result<Card> {
        self.cards.get(pos).copied().ok_or(SimError::InsufficientCards {
            requested: pos + 1,
            available: self.cards.len(),
        })
    }

    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}
