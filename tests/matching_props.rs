//! Property tests for the matching rule and the canonical triple search.

use proptest::prelude::*;
use proptest::sample::subsequence;

use set_odds::cards::{completing_card, find_first_triple, triple_matches};
use set_odds::{build_catalog, is_matching_triple, Card};

fn distinct_cards(min: usize, max: usize) -> impl Strategy<Value = Vec<Card>> {
    (min..=max).prop_flat_map(|n| subsequence(build_catalog(), n)).prop_shuffle()
}

/// Lexicographic scan over hand positions.
fn brute_force(hand: &[Card]) -> Option<[usize; 3]> {
    for i in 0..hand.len() {
        for j in i + 1..hand.len() {
            for k in j + 1..hand.len() {
                if triple_matches(&hand[i], &hand[j], &hand[k]) {
                    return Some([i, j, k]);
                }
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn prop_predicate_is_symmetric(cards in distinct_cards(3, 3)) {
        let (a, b, c) = (cards[0], cards[1], cards[2]);
        let expected = is_matching_triple(&[a, b, c]).unwrap();
        for perm in [[a, c, b], [b, a, c], [b, c, a], [c, a, b], [c, b, a]] {
            prop_assert_eq!(is_matching_triple(&perm).unwrap(), expected);
        }
    }

    #[test]
    fn prop_completing_card_closes_any_pair(cards in distinct_cards(2, 2)) {
        let third = completing_card(&cards[0], &cards[1]);
        prop_assert!(!cards.contains(&third));
        prop_assert!(triple_matches(&cards[0], &cards[1], &third));
    }

    #[test]
    fn prop_search_matches_lexicographic_scan(hand in distinct_cards(0, 21)) {
        prop_assert_eq!(find_first_triple(&hand), brute_force(&hand));
    }

    #[test]
    fn prop_found_triple_matches(hand in distinct_cards(3, 21)) {
        if let Some([i, j, k]) = find_first_triple(&hand) {
            prop_assert!(i < j && j < k);
            prop_assert!(is_matching_triple(&[hand[i], hand[j], hand[k]]).unwrap());
        }
    }
}
