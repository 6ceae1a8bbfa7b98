//! The fixed card universe.
//!
//! `build_catalog` is the pure cartesian product over the four attributes.
//! `catalog()` memoizes one immutable copy for the whole process; games
//! clone it into their own working deck and never touch the shared copy.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::attributes::{Attribute, Color, Count, Fill, Shape, VALUES_PER_ATTRIBUTE};
use super::card::Card;

/// Number of attributes on a card.
pub const ATTRIBUTE_COUNT: usize = 4;

/// Number of distinct cards: 3^4.
pub const CATALOG_SIZE: usize = VALUES_PER_ATTRIBUTE.pow(ATTRIBUTE_COUNT as u32);

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::new);

/// Build every card, nested shape → color → fill → count (outer to inner).
#[must_use]
pub fn build_catalog() -> Vec<Card> {
    let mut cards = Vec::with_capacity(CATALOG_SIZE);
    for shape in Shape::VALUES {
        for color in Color::VALUES {
            for fill in Fill::VALUES {
                for count in Count::VALUES {
                    cards.push(Card::new(shape, color, fill, count));
                }
            }
        }
    }
    cards
}

/// The process-wide catalog.
#[must_use]
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

/// Read-only card universe with position lookup.
#[derive(Clone, Debug)]
pub struct Catalog {
    cards: Vec<Card>,
    positions: FxHashMap<Card, usize>,
}

impl Catalog {
    /// Build a fresh catalog. Prefer `catalog()` outside tests.
    #[must_use]
    pub fn new() -> Self {
        let cards = build_catalog();
        let positions = cards.iter().enumerate().map(|(i, &card)| (card, i)).collect();
        Self { cards, positions }
    }

    /// All cards in catalog order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a card in catalog order.
    #[must_use]
    pub fn position(&self, card: &Card) -> Option<usize> {
        self.positions.get(card).copied()
    }

    /// Owned copy of the cards, for a game's working deck.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Card> {
        self.cards.clone()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_catalog_size() {
        assert_eq!(CATALOG_SIZE, 81);
        assert_eq!(build_catalog().len(), 81);
        assert_eq!(catalog().len(), 81);
    }

    #[test]
    fn test_catalog_distinct() {
        let unique: FxHashSet<Card> = build_catalog().into_iter().collect();
        assert_eq!(unique.len(), CATALOG_SIZE);
    }

    #[test]
    fn test_catalog_order() {
        let cards = build_catalog();
        assert_eq!(cards[0], Card::new(Shape::Circle, Color::Red, Fill::Solid, Count::Single));
        assert_eq!(cards[1], Card::new(Shape::Circle, Color::Red, Fill::Solid, Count::Double));
        assert_eq!(cards[3], Card::new(Shape::Circle, Color::Red, Fill::Shaded, Count::Single));
        assert_eq!(cards[27], Card::new(Shape::Squiggle, Color::Red, Fill::Solid, Count::Single));
        assert_eq!(cards[80], Card::new(Shape::Diamond, Color::Purple, Fill::Empty, Count::Triple));

        // Nested order means the catalog is already sorted.
        let mut sorted = cards.clone();
        sorted.sort();
        assert_eq!(cards, sorted);
    }

    #[test]
    fn test_catalog_deterministic() {
        assert_eq!(build_catalog(), build_catalog());
        assert_eq!(catalog().cards(), build_catalog().as_slice());
    }

    #[test]
    fn test_position() {
        let catalog = Catalog::new();
        for (i, card) in catalog.cards().iter().enumerate() {
            assert_eq!(catalog.position(card), Some(i));
        }
    }
}
