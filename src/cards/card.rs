//! A single card: one value per attribute.

use serde::{Deserialize, Serialize};

use super::attributes::{Color, Count, Fill, Shape};

/// Immutable card with exactly four named attributes.
///
/// ## Example
///
/// ```
/// use set_odds::cards::{Card, Color, Count, Fill, Shape};
///
/// let card = Card::new(Shape::Squiggle, Color::Green, Fill::Solid, Count::Double);
/// assert_eq!(card.to_string(), "double green solid squiggle");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Card {
    pub shape: Shape,
    pub color: Color,
    pub fill: Fill,
    pub count: Count,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(shape: Shape, color: Color, fill: Fill, count: Count) -> Self {
        Self { shape, color, fill, count }
    }

    /// Display names in attribute order (shape, color, fill, count).
    #[must_use]
    pub fn value_names(&self) -> [&'static str; 4] {
        use super::attributes::Attribute;

        [self.shape.name(), self.color.name(), self.fill.name(), self.count.name()]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.fill, self.shape)
    }
}
