//! The four card attributes and their three values each.
//!
//! Each attribute is a closed enum. Values carry no numeric meaning beyond
//! identity; `index()` exists only so the matching code can compute the
//! value that completes a pair.
//!
//! ## Attributes
//!
//! - `Shape`: circle, squiggle, diamond
//! - `Color`: red, green, purple
//! - `Fill`: solid, shaded, empty
//! - `Count`: single, double, triple

use serde::{Deserialize, Serialize};

/// Number of values every attribute has.
pub const VALUES_PER_ATTRIBUTE: usize = 3;

/// Common interface over the four attribute enums.
pub trait Attribute: Copy + Eq + std::fmt::Debug + 'static {
    /// Attribute name (for display/debugging).
    const NAME: &'static str;

    /// All values, in catalog order.
    const VALUES: [Self; VALUES_PER_ATTRIBUTE];

    /// Position of this value in `VALUES`.
    fn index(self) -> usize;

    /// Display name of this value.
    fn name(self) -> &'static str;

    /// Value at `index` in `VALUES`. Wraps modulo 3.
    #[must_use]
    fn from_index(index: usize) -> Self {
        Self::VALUES[index % VALUES_PER_ATTRIBUTE]
    }

    /// The value that makes `self`, `other` and the result either all equal
    /// or all different.
    #[must_use]
    fn complete(self, other: Self) -> Self {
        if self == other {
            self
        } else {
            // Indices 0 + 1 + 2 = 3, so the missing one is 3 - a - b.
            Self::from_index(3 - self.index() - other.index())
        }
    }
}

/// True when the three values are all the same or pairwise distinct.
#[must_use]
pub fn all_same_or_all_different<A: Attribute>(a: A, b: A, c: A) -> bool {
    let all_matched = a == b && b == c;
    let all_different = a != b && b != c && c != a;
    all_matched || all_different
}

macro_rules! attribute {
    (
        $(#[$meta:meta])*
        $ty:ident, $attr_name:literal, [$($variant:ident => $label:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $ty {
            $($variant),+
        }

        impl Attribute for $ty {
            const NAME: &'static str = $attr_name;
            const VALUES: [Self; VALUES_PER_ATTRIBUTE] = [$($ty::$variant),+];

            fn index(self) -> usize {
                self as usize
            }

            fn name(self) -> &'static str {
                match self {
                    $($ty::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

attribute!(
    /// Symbol printed on the card.
    Shape, "shape", [Circle => "circle", Squiggle => "squiggle", Diamond => "diamond"]
);

attribute!(
    /// Ink color.
    Color, "color", [Red => "red", Green => "green", Purple => "purple"]
);

attribute!(
    /// Shading of the symbols.
    Fill, "fill", [Solid => "solid", Shaded => "shaded", Empty => "empty"]
);

attribute!(
    /// How many symbols the card shows.
    Count, "count", [Single => "single", Double => "double", Triple => "triple"]
);
