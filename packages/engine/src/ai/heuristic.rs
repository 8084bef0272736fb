//! HeuristicPlayer - a stronger, deterministic baseline AI.
//!
//! Goals:
//! - Choose only from the provided legal candidates.
//! - Be deterministic (no RNG), but materially stronger than random play.
//!
//! Capture strategy:
//! - Rank candidate captures by what lands in the pile: an immediate
//!   table sweep (Hard only, and only while more hand cards remain so
//!   the sweep can score), then the Settebello, then Denari count,
//!   then raw card count.
//!
//! Discard strategy (forced `PlayOnly`):
//! - Give away the cheapest card. On Hard, additionally avoid handing
//!   the opponents a Sette or a Denari when a same-value alternative
//!   exists.
//!
//! Determinism:
//! - Ties keep the first candidate in generation order, so the same
//!   state always produces the same move.

use super::config::Difficulty;
use super::trait_def::{AiError, AiPlayer};
use crate::domain::cards_types::{Card, Rank, Suit};
use crate::domain::moves::Move;
use crate::domain::state::{GameState, PlayerId};

#[derive(Clone)]
pub struct HeuristicPlayer {
    difficulty: Difficulty,
}

impl HeuristicPlayer {
    pub const NAME: &'static str = "HeuristicPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Desirability of a capture, higher is better. The pile includes
    /// the played card, which counts toward every term.
    fn capture_key(&self, state: &GameState, mv: &Move) -> (u8, u8, usize, usize) {
        let pile_has = |pred: &dyn Fn(Card) -> bool| {
            mv.captures().iter().copied().any(pred) || pred(mv.card)
        };
        // A sweep on the player's last card cannot be a scopa, so it
        // gets no bonus there.
        let sweeps_table = match self.difficulty {
            Difficulty::Hard => u8::from(
                mv.captures().len() == state.table.len()
                    && state.players[mv.player as usize].hand.len() > 1,
            ),
            Difficulty::Normal => 0,
        };
        let settebello = u8::from(pile_has(&|c| c.is_settebello()));
        let denari = mv
            .captures()
            .iter()
            .chain(std::iter::once(&mv.card))
            .filter(|c| c.suit == Suit::Denari)
            .count();
        (sweeps_table, settebello, denari, mv.captures().len() + 1)
    }

    /// Cost of discarding `card` onto the table, lower is better.
    fn discard_key(&self, card: Card) -> (u8, u8, u8) {
        match self.difficulty {
            Difficulty::Normal => (0, 0, card.value()),
            Difficulty::Hard => (
                u8::from(card.rank == Rank::Sette),
                u8::from(card.suit == Suit::Denari),
                card.value(),
            ),
        }
    }
}

impl AiPlayer for HeuristicPlayer {
    fn choose_move(
        &self,
        state: &GameState,
        _who: PlayerId,
        candidates: &[Move],
    ) -> Result<Option<Move>, AiError> {
        let Some(first) = candidates.first() else {
            return Ok(None);
        };

        // Candidates are homogeneous: forced capture means they are
        // either all captures or all PlayOnly.
        if first.is_capture() {
            let mut best = first;
            let mut best_key = self.capture_key(state, first);
            for mv in &candidates[1..] {
                let key = self.capture_key(state, mv);
                if key > best_key {
                    best = mv;
                    best_key = key;
                }
            }
            Ok(Some(best.clone()))
        } else {
            let mut best = first;
            let mut best_key = self.discard_key(first.card);
            for mv in &candidates[1..] {
                let key = self.discard_key(mv.card);
                if key < best_key {
                    best = mv;
                    best_key = key;
                }
            }
            Ok(Some(best.clone()))
        }
    }
}
