//! Card system: attributes, cards, the catalog and the matching rule.
//!
//! ## Key Types
//!
//! - `Shape`, `Color`, `Fill`, `Count`: the four attribute enums
//! - `Card`: one value per attribute
//! - `Catalog`: the fixed 81-card universe
//!
//! Matching lives in `matching`: the predicate, the completing card of a
//! pair, and the canonical first-triple search.

pub mod attributes;
pub mod card;
pub mod catalog;
pub mod matching;

pub use attributes::{Attribute, Color, Count, Fill, Shape, VALUES_PER_ATTRIBUTE};
pub use card::Card;
pub use catalog::{build_catalog, catalog, Catalog, ATTRIBUTE_COUNT, CATALOG_SIZE};
pub use matching::{
    completing_card, contains_triple, find_first_triple, is_matching_triple, triple_matches,
    TRIPLE_SIZE,
};
