//! Property-based tests for move generation and application.

use std::collections::HashSet;

use proptest::prelude::*;

use crate::domain::cards_logic::value_sum;
use crate::domain::moves::{valid_moves, MoveKind};
use crate::domain::play::apply_move;
use crate::domain::rules::FIFTEEN_TARGET;
use crate::domain::state::{GameState, Phase};
use crate::domain::{test_gens, Card};

/// 2-player Playing state around an arbitrary (hand, table) pair.
fn state_from(hand: Vec<Card>, table: Vec<Card>) -> GameState {
    let mut state = GameState::new(2, 0).unwrap();
    state.players[1].hand = hand;
    state.table = table;
    state.phase = Phase::Playing;
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every generated capture names distinct cards that are actually
    /// on the table, and the played card comes from the hand.
    #[test]
    fn prop_candidates_reference_real_cards((hand, table) in test_gens::hand_and_table()) {
        let state = state_from(hand.clone(), table.clone());

        for mv in valid_moves(&state, 1) {
            prop_assert!(hand.contains(&mv.card));
            let unique: HashSet<Card> = mv.captures().iter().copied().collect();
            prop_assert_eq!(unique.len(), mv.captures().len());
            for c in mv.captures() {
                prop_assert!(table.contains(c));
            }
        }
    }

    /// Arithmetic soundness for ordinary cards: sum captures total the
    /// played value, fifteen captures complete it to fifteen, equal
    /// captures match it. (The Matta is exempt: its assigned value is
    /// implicit in the candidate.)
    #[test]
    fn prop_capture_sums_are_exact((hand, table) in test_gens::hand_and_table()) {
        let state = state_from(hand, table);

        for mv in valid_moves(&state, 1) {
            if mv.card.is_matta() {
                continue;
            }
            match mv.kind {
                MoveKind::CaptureEqual => {
                    prop_assert_eq!(mv.captures().len(), 1);
                    prop_assert_eq!(mv.captures()[0].value(), mv.card.value());
                }
                MoveKind::CaptureSum => {
                    prop_assert!(mv.captures().len() >= 2);
                    prop_assert_eq!(value_sum(mv.captures()), mv.card.value());
                }
                MoveKind::CaptureFifteen => {
                    prop_assert_eq!(
                        value_sum(mv.captures()) + mv.card.value(),
                        FIFTEEN_TARGET
                    );
                }
                MoveKind::AceCapture | MoveKind::PlayOnly => {}
            }
        }
    }

    /// Forced capture is hand-wide: lay-downs appear only when no card
    /// in the hand captures, and then exactly one per held card.
    #[test]
    fn prop_forced_capture_is_hand_wide((hand, table) in test_gens::hand_and_table()) {
        let state = state_from(hand.clone(), table);
        let moves = valid_moves(&state, 1);

        prop_assert!(!moves.is_empty());
        let lay_downs = moves.iter().filter(|m| m.kind == MoveKind::PlayOnly).count();
        if moves.iter().any(|m| m.is_capture()) {
            prop_assert_eq!(lay_downs, 0);
        } else {
            prop_assert_eq!(lay_downs, hand.len());
            prop_assert_eq!(moves.len(), hand.len());
        }
    }

    /// Applying any generated candidate conserves cards: nothing is
    /// created or destroyed across hand, table, and captured piles.
    #[test]
    fn prop_apply_move_conserves_cards((hand, table) in test_gens::hand_and_table()) {
        let state = state_from(hand, table);
        let total = |s: &GameState| -> usize {
            s.table.len()
                + s.deck.len()
                + s.players.iter().map(|p| p.hand.len() + p.captured.len()).sum::<usize>()
        };
        let before = total(&state);

        for mv in valid_moves(&state, 1) {
            let mut s = state.clone();
            apply_move(&mut s, &mv).unwrap();
            prop_assert_eq!(total(&s), before);
            prop_assert_eq!(s.turn, 0);
        }
    }
}
