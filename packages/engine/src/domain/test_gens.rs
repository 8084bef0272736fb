// Proptest generators for domain types.
// These generators ensure unique cards and valid states for property-based testing.

use proptest::prelude::*;

use crate::domain::dealing::full_deck;
use crate::domain::Card;

/// Generate a vector of N unique cards efficiently
pub fn unique_cards(count: usize) -> impl Strategy<Value = Vec<Card>> {
    // Generate by creating a shuffled prefix of the full deck
    Just(()).prop_perturb(move |_, mut rng| {
        let mut all_cards = full_deck();
        for i in 0..count.min(all_cards.len()) {
            let j = rng.random_range(i..all_cards.len());
            all_cards.swap(i, j);
        }
        all_cards.truncate(count);
        all_cards
    })
}

/// Generate a disjoint (hand, table) pair: 1-3 hand cards, 0-8 table
/// cards, no card in both.
pub fn hand_and_table() -> impl Strategy<Value = (Vec<Card>, Vec<Card>)> {
    (1usize..=3, 0usize..=8).prop_flat_map(|(h, t)| {
        unique_cards(h + t).prop_map(move |mut cards| {
            let table = cards.split_off(h);
            (cards, table)
        })
    })
}
