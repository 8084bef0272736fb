//! Card collection logic: value sums, ace filters, subset enumeration

use super::cards_types::Card;

/// Sum of literal card values. A Matta resting among these cards
/// counts as its printed 7.
pub fn value_sum(cards: &[Card]) -> u8 {
    cards.iter().map(|c| c.value()).sum()
}

pub fn aces(cards: &[Card]) -> Vec<Card> {
    cards.iter().copied().filter(|c| c.is_ace()).collect()
}

pub fn count_aces(cards: &[Card]) -> usize {
    cards.iter().filter(|c| c.is_ace()).count()
}

/// Enumerate every subset of `cards` with at least `min_len` members
/// whose literal values sum to exactly `target`.
///
/// Subsets are over the concrete cards, so two table cards of equal
/// rank yield distinct subsets. Enumeration order is deterministic
/// (depth-first over the input order) and each qualifying subset
/// appears exactly once.
pub fn subsets_summing_to(cards: &[Card], target: u8, min_len: usize) -> Vec<Vec<Card>> {
    let mut found = Vec::new();
    if target == 0 {
        return found;
    }
    let mut picked: Vec<Card> = Vec::new();
    collect_subsets(cards, 0, target, min_len, &mut picked, &mut found);
    found
}

fn collect_subsets(
    cards: &[Card],
    start: usize,
    remaining: u8,
    min_len: usize,
    picked: &mut Vec<Card>,
    found: &mut Vec<Vec<Card>>,
) {
    for i in start..cards.len() {
        let v = cards[i].value();
        if v > remaining {
            continue;
        }
        picked.push(cards[i]);
        if v == remaining {
            // Card values are >= 1, so this subset cannot be extended
            // and still hit the target.
            if picked.len() >= min_len {
                found.push(picked.clone());
            }
        } else {
            collect_subsets(cards, i + 1, remaining - v, min_len, picked, found);
        }
        picked.pop();
    }
}
