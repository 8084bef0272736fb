//! Accuso declarations: bonus patterns over a freshly dealt 3-card hand.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::rules::{CIRULLA_MAX_SUM, CIRULLA_POINTS, DECINO_POINTS, HAND_SIZE};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AccusoType {
    /// Three cards summing to at most 9 (Matta counts as 1).
    Cirulla,
    /// Three of a kind, with the Matta completing a pair.
    Decino,
}

impl AccusoType {
    #[inline]
    pub fn points(self) -> u8 {
        match self {
            AccusoType::Cirulla => CIRULLA_POINTS,
            AccusoType::Decino => DECINO_POINTS,
        }
    }
}

/// Cirulla: the three values sum to <= 9. The Matta contributes
/// exactly 1 here, never a higher assignment. False unless the hand
/// holds exactly three cards.
pub fn is_cirulla(hand: &[Card]) -> bool {
    if hand.len() != HAND_SIZE {
        return false;
    }
    let sum: u8 = hand
        .iter()
        .map(|c| if c.is_matta() { 1 } else { c.value() })
        .sum();
    sum <= CIRULLA_MAX_SUM
}

/// Decino: a rank triple, or a pair completed by the Matta (which
/// assumes the pair's rank). Matta plus two different ranks is never
/// a Decino. False unless the hand holds exactly three cards.
pub fn is_decino(hand: &[Card]) -> bool {
    if hand.len() != HAND_SIZE {
        return false;
    }
    let plain: Vec<Card> = hand.iter().copied().filter(|c| !c.is_matta()).collect();
    match plain.len() {
        3 => plain[0].rank == plain[1].rank && plain[1].rank == plain[2].rank,
        2 => plain[0].rank == plain[1].rank,
        _ => false,
    }
}

/// The most valuable accuso this hand qualifies for, if any. The two
/// patterns are not mutually exclusive (Matta+2+2 is both); Decino
/// wins because it is worth more.
pub fn best_accuso(hand: &[Card]) -> Option<AccusoType> {
    if is_decino(hand) {
        Some(AccusoType::Decino)
    } else if is_cirulla(hand) {
        Some(AccusoType::Cirulla)
    } else {
        None
    }
}
