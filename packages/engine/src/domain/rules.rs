//! Game constants and per-table rule knobs.

use serde::{Deserialize, Serialize};

use super::cards_types::Suit;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;
pub const DECK_SIZE: usize = 40;
pub const HAND_SIZE: usize = 3;
pub const INITIAL_TABLE_SIZE: usize = 4;

/// Capture target for the "fifteen" rule: played card plus captured
/// cards must total exactly 15.
pub const FIFTEEN_TARGET: u8 = 15;

pub const CIRULLA_MAX_SUM: u8 = 9;
pub const CIRULLA_POINTS: u8 = 3;
pub const DECINO_POINTS: u8 = 10;
pub const OPENING_SWEEP_POINTS: u8 = 1;

pub const GRANDE_POINTS: u8 = 5;
pub const PICCOLA_POINTS: u8 = 3;
pub const DENARI_MAJORITY_MIN: usize = 6;
pub const CARTE_MAJORITY_MIN: usize = 21;

/// A game session ("51") ends when a player reaches this total.
/// Session termination is the consumer's call; the engine only
/// accumulates totals.
pub const GAME_TARGET_SCORE: i32 = 51;

/// Upper bound on initial-deal retries. The < 2 table Aces invariant
/// is hit long before this in practice; exhausting it is an error,
/// never a silent acceptance of a bad table.
pub const MAX_DEAL_ATTEMPTS: u32 = 1024;

/// Table-rule knobs that vary between rule sets. The opening sweep
/// condition and the cappotto trigger are inferred from observed play
/// rather than an authoritative rules text, so they stay configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRules {
    /// Initial-table sums that let the dealer sweep the table for a
    /// bonus point right after the deal (literal values, Matta = 7).
    pub opening_sweep_targets: Vec<u8>,
    /// Suit whose complete rank run (1..=10) in one captured pile
    /// triggers an instant win.
    pub cappotto_suit: Suit,
    /// Minimum total score forced on the cappotto winner.
    pub cappotto_score: i32,
}

impl Default for TableRules {
    fn default() -> Self {
        Self {
            opening_sweep_targets: vec![15, 30],
            cappotto_suit: Suit::Denari,
            cappotto_score: 1000,
        }
    }
}
