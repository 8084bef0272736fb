//! Applying a chosen move to the game state.

use super::moves::{Move, MoveKind};
use super::state::{GameState, Phase};
use crate::errors::domain::{DomainError, ValidationKind};

/// What a play changed, in the shape callers need for orchestration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The capture emptied the table mid-round and scored a scopa.
    pub scopa: bool,
    /// Every hand is empty after this play (the orchestrator redeals
    /// or settles).
    pub hands_exhausted: bool,
    /// Hands and deck are both exhausted: this was the final play.
    pub round_over: bool,
}

/// Apply a move in place, enforcing phase, turn, and card presence.
///
/// Validation happens before any mutation, so a returned error leaves
/// the state untouched; once mutation starts the move completes
/// atomically.
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<PlayOutcome, DomainError> {
    if state.phase != Phase::Playing {
        return Err(DomainError::validation(
            ValidationKind::PhaseMismatch,
            "Phase mismatch",
        ));
    }
    if state.turn != mv.player {
        return Err(DomainError::validation(
            ValidationKind::OutOfTurn,
            "Out of turn",
        ));
    }
    if !state.players[mv.player as usize].hand.contains(&mv.card) {
        return Err(DomainError::validation(
            ValidationKind::CardNotInHand,
            format!("{:?} not in hand of seat {}", mv.card, mv.player),
        ));
    }
    // Captures are sorted, so equal neighbours mean a duplicated card.
    for pair in mv.captures().windows(2) {
        if pair[0] == pair[1] {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCard,
                format!("{:?} captured twice", pair[0]),
            ));
        }
    }
    for &c in mv.captures() {
        if !state.table.contains(&c) {
            return Err(DomainError::validation(
                ValidationKind::CardNotOnTable,
                format!("{c:?} not on table"),
            ));
        }
    }

    state.remove_from_hand(mv.player, mv.card)?;

    let mut scopa = false;
    if mv.kind == MoveKind::PlayOnly {
        state.add_to_table(mv.card)?;
    } else {
        for &c in mv.captures() {
            state.remove_from_table(c)?;
        }
        {
            let player = state.player_mut(mv.player);
            player.captured.push(mv.card);
            player.captured.extend_from_slice(mv.captures());
        }
        state.last_capture = Some(mv.player);

        // A capture that empties the table is a scopa, except on the
        // very last play of the round.
        let last_play = state.deck.is_empty() && state.hands_empty();
        if state.table.is_empty() && !last_play {
            let mut pile = vec![mv.card];
            pile.extend_from_slice(mv.captures());
            let player = state.player_mut(mv.player);
            player.scopa_count += 1;
            player.scopa_piles.push(pile);
            scopa = true;
        }
    }

    state.advance_turn();

    let hands_exhausted = state.hands_empty();
    Ok(PlayOutcome {
        scopa,
        hands_exhausted,
        round_over: hands_exhausted && state.deck.is_empty(),
    })
}
