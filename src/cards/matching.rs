//! Matching-triple predicate and the canonical search over a hand.
//!
//! A triple matches when, for every attribute, the three cards are either
//! all equal or pairwise distinct. Any two cards determine the unique third
//! card that completes them, which lets the search run over pairs.
//!
//! ## Search order
//!
//! `find_first_triple` returns the lexicographically smallest index triple
//! `(i, j, k)` with `i < j < k` over hand positions. This fixes which triple
//! the simulator removes when a hand holds several.

use rustc_hash::FxHashMap;

use super::attributes::{all_same_or_all_different, Attribute};
use super::card::Card;
use crate::core::error::{Result, SimError};

/// Number of cards in a matching triple.
pub const TRIPLE_SIZE: usize = 3;

/// Check a slice of cards. Fails with `InvalidArity` unless it has exactly 3.
pub fn is_matching_triple(cards: &[Card]) -> Result<bool> {
    match cards {
        [a, b, c] => Ok(triple_matches(a, b, c)),
        _ => Err(SimError::InvalidArity(cards.len())),
    }
}

/// Per-attribute "all same or all different" over three cards.
#[must_use]
pub fn triple_matches(a: &Card, b: &Card, c: &Card) -> bool {
    all_same_or_all_different(a.shape, b.shape, c.shape)
        && all_same_or_all_different(a.color, b.color, c.color)
        && all_same_or_all_different(a.fill, b.fill, c.fill)
        && all_same_or_all_different(a.count, b.count, c.count)
}

/// The unique card that forms a matching triple with `a` and `b`.
///
/// Returns `a` itself when `a == b`; callers looking for three distinct
/// cards must not pass a card twice.
#[must_use]
pub fn completing_card(a: &Card, b: &Card) -> Card {
    Card::new(
        a.shape.complete(b.shape),
        a.color.complete(b.color),
        a.fill.complete(b.fill),
        a.count.complete(b.count),
    )
}

/// Positions of the first matching triple in `hand`, in canonical order.
///
/// Assumes the hand holds no duplicate cards (the catalog has none).
#[must_use]
pub fn find_first_triple(hand: &[Card]) -> Option<[usize; TRIPLE_SIZE]> {
    if hand.len() < TRIPLE_SIZE {
        return None;
    }

    let positions: FxHashMap<Card, usize> =
        hand.iter().enumerate().map(|(i, &card)| (card, i)).collect();

    // For a fixed (i, j) at most one k completes it, so the first pair with a
    // completing card after j gives the lexicographic minimum.
    for i in 0..hand.len() - 2 {
        for j in i + 1..hand.len() - 1 {
            let third = completing_card(&hand[i], &hand[j]);
            if let Some(&k) = positions.get(&third) {
                if k > j {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

/// True when any three cards of `cards` match.
#[must_use]
pub fn contains_triple(cards: &[Card]) -> bool {
    find_first_triple(cards).is_some()
}
