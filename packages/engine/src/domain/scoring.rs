//! End-of-smazzata scoring across the seven bonus categories.

use serde::{Deserialize, Serialize};

use super::cards_types::{Card, Rank, Suit};
use super::rules::{
    CARTE_MAJORITY_MIN, DENARI_MAJORITY_MIN, GRANDE_POINTS, PICCOLA_POINTS,
};
use super::state::GameState;

/// Per-player settlement sheet. One field per category so a UI can
/// show where every point came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Scopa count, verbatim.
    pub scope: u8,
    /// 1 for holding the 7 of Denari.
    pub settebello: u8,
    /// 1 for a strict Denari majority of at least 6.
    pub denari: u8,
    /// 1 for a strict card-count majority of at least 21.
    pub carte: u8,
    /// 1 for the strictly best primiera total.
    pub primiera: u8,
    /// 5 for Fante+Cavallo+Re of Denari.
    pub grande: u8,
    /// 3 for Asso+Due+Tre of Denari, +1 each for 4/5/6 of Denari.
    pub piccola: u8,
    /// Accuso points accrued during play (copied, never recomputed).
    pub accusi: u8,
}

impl ScoreBreakdown {
    pub fn total(&self) -> i32 {
        i32::from(self.scope)
            + i32::from(self.settebello)
            + i32::from(self.denari)
            + i32::from(self.carte)
            + i32::from(self.primiera)
            + i32::from(self.grande)
            + i32::from(self.piccola)
            + i32::from(self.accusi)
    }
}

/// Compute the settlement sheet for every seat from final captured
/// piles, scopa counts, and accrued accusi. Pure; no mutation.
pub fn smazzata_scores(state: &GameState) -> Vec<ScoreBreakdown> {
    let mut sheets: Vec<ScoreBreakdown> = state
        .players
        .iter()
        .map(|p| {
            let mut sheet = ScoreBreakdown {
                scope: p.scopa_count,
                accusi: p.accusi_points,
                grande: grande_points(&p.captured),
                piccola: piccola_points(&p.captured),
                ..ScoreBreakdown::default()
            };
            if p.captured.iter().any(|c| c.is_settebello()) {
                sheet.settebello = 1;
            }
            sheet
        })
        .collect();

    let denari_counts: Vec<u32> = state
        .players
        .iter()
        .map(|p| count_suit(&p.captured, Suit::Denari) as u32)
        .collect();
    if let Some(i) = unique_max(&denari_counts, DENARI_MAJORITY_MIN as u32) {
        sheets[i].denari = 1;
    }

    let carte_counts: Vec<u32> = state
        .players
        .iter()
        .map(|p| p.captured.len() as u32)
        .collect();
    if let Some(i) = unique_max(&carte_counts, CARTE_MAJORITY_MIN as u32) {
        sheets[i].carte = 1;
    }

    let primiera_totals: Vec<u32> = state
        .players
        .iter()
        .map(|p| primiera_total(&p.captured))
        .collect();
    if let Some(i) = unique_max(&primiera_totals, 1) {
        sheets[i].primiera = 1;
    }

    sheets
}

/// Best primiera value per suit, summed over the four suits. An
/// unrepresented suit contributes 0.
pub fn primiera_total(captured: &[Card]) -> u32 {
    Suit::ALL
        .iter()
        .map(|&suit| {
            captured
                .iter()
                .filter(|c| c.suit == suit)
                .map(|c| u32::from(c.primiera_value()))
                .max()
                .unwrap_or(0)
        })
        .sum()
}

/// All ten ranks of `suit` in one pile: the instant-win condition.
pub fn is_cappotto(captured: &[Card], suit: Suit) -> bool {
    Rank::ALL
        .iter()
        .all(|&rank| captured.contains(&Card::new(suit, rank)))
}

fn count_suit(cards: &[Card], suit: Suit) -> usize {
    cards.iter().filter(|c| c.suit == suit).count()
}

fn has_denari(cards: &[Card], rank: Rank) -> bool {
    cards.contains(&Card::new(Suit::Denari, rank))
}

fn grande_points(captured: &[Card]) -> u8 {
    let all = [Rank::Fante, Rank::Cavallo, Rank::Re]
        .iter()
        .all(|&r| has_denari(captured, r));
    if all {
        GRANDE_POINTS
    } else {
        0
    }
}

fn piccola_points(captured: &[Card]) -> u8 {
    let base = [Rank::Asso, Rank::Due, Rank::Tre]
        .iter()
        .all(|&r| has_denari(captured, r));
    if !base {
        return 0;
    }
    let extras = [Rank::Quattro, Rank::Cinque, Rank::Sei]
        .iter()
        .filter(|&&r| has_denari(captured, r))
        .count() as u8;
    PICCOLA_POINTS + extras
}

/// Index of the strictly unique maximum, provided it reaches `min`.
/// Any tie at the top awards nothing.
fn unique_max(values: &[u32], min: u32) -> Option<usize> {
    let max = *values.iter().max()?;
    if max < min {
        return None;
    }
    let mut winner = None;
    for (i, &v) in values.iter().enumerate() {
        if v == max {
            if winner.is_some() {
                return None;
            }
            winner = Some(i);
        }
    }
    winner
}
