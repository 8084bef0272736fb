//! Unit tests for move application: mutation, scopa, validation.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::moves::{valid_moves, Move, MoveKind};
use crate::domain::play::apply_move;
use crate::domain::state::{GameState, Phase};
use crate::domain::Card;

fn parse(token: &str) -> Card {
    token.parse().unwrap()
}

fn playing_state(hand: &[&str], table: &[&str], deck: &[&str]) -> GameState {
    let mut state = GameState::new(2, 0).unwrap();
    state.players[1].hand = try_parse_cards(hand.iter().copied()).unwrap();
    state.table = try_parse_cards(table.iter().copied()).unwrap();
    state.deck = try_parse_cards(deck.iter().copied()).unwrap();
    state.phase = Phase::Playing;
    state
}

#[test]
fn capture_moves_cards_to_the_pile_and_advances_the_turn() {
    let mut state = playing_state(&["6D", "2S"], &["6S", "RB"], &["5C"]);
    let mv = Move::new(1, parse("6D"), MoveKind::CaptureEqual, vec![parse("6S")]);

    let outcome = apply_move(&mut state, &mv).unwrap();

    assert!(!outcome.scopa);
    assert!(!outcome.round_over);
    assert_eq!(state.players[1].hand, vec![parse("2S")]);
    assert_eq!(state.table, vec![parse("RB")]);
    assert_eq!(
        state.players[1].captured,
        try_parse_cards(["6D", "6S"]).unwrap()
    );
    assert_eq!(state.last_capture, Some(1));
    assert_eq!(state.turn, 0);
}

#[test]
fn emptying_the_table_scores_a_scopa() {
    let mut state = playing_state(&["6D", "2S"], &["6S"], &["5C"]);
    let mv = Move::new(1, parse("6D"), MoveKind::CaptureEqual, vec![parse("6S")]);

    let outcome = apply_move(&mut state, &mv).unwrap();

    assert!(outcome.scopa);
    assert_eq!(state.players[1].scopa_count, 1);
    assert_eq!(state.players[1].scopa_piles.len(), 1);
    assert_eq!(
        state.players[1].scopa_piles[0],
        try_parse_cards(["6D", "6S"]).unwrap()
    );
}

#[test]
fn last_play_of_the_round_never_scores_a_scopa() {
    // Seat 1 holds the last card of the whole smazzata.
    let mut state = playing_state(&["6D"], &["6S"], &[]);
    let mv = Move::new(1, parse("6D"), MoveKind::CaptureEqual, vec![parse("6S")]);

    let outcome = apply_move(&mut state, &mv).unwrap();

    assert!(!outcome.scopa);
    assert!(outcome.hands_exhausted);
    assert!(outcome.round_over);
    assert_eq!(state.players[1].scopa_count, 0);
    assert!(state.table.is_empty());
}

#[test]
fn lay_down_joins_the_table() {
    let mut state = playing_state(&["RB"], &["FB"], &["5C"]);
    let mv = Move::play_only(1, parse("RB"));

    let outcome = apply_move(&mut state, &mv).unwrap();

    assert!(!outcome.scopa);
    assert_eq!(state.table, try_parse_cards(["FB", "RB"]).unwrap());
    assert!(state.players[1].captured.is_empty());
    assert_eq!(state.last_capture, None);
}

#[test]
fn hands_exhausted_is_reported_with_deck_remaining() {
    let mut state = playing_state(&["RB"], &["FB"], &["5C", "6C"]);
    let outcome = apply_move(&mut state, &Move::play_only(1, parse("RB"))).unwrap();

    assert!(outcome.hands_exhausted);
    assert!(!outcome.round_over);
}

#[test]
fn validation_failures_leave_the_state_untouched() {
    let state = playing_state(&["6D"], &["6S"], &["5C"]);
    let mv = Move::new(1, parse("6D"), MoveKind::CaptureEqual, vec![parse("6S")]);

    // Out of turn.
    let mut s = state.clone();
    s.turn = 0;
    assert!(apply_move(&mut s, &mv).is_err());
    s.turn = 1;
    assert_eq!(s, state);

    // Wrong phase.
    let mut s = state.clone();
    s.phase = Phase::Ended;
    assert!(apply_move(&mut s, &mv).is_err());

    // Card not in hand.
    let mut s = state.clone();
    let foreign = Move::new(1, parse("5B"), MoveKind::CaptureEqual, vec![parse("6S")]);
    assert!(apply_move(&mut s, &foreign).is_err());
    assert_eq!(s, state);

    // Capture target not on the table.
    let mut s = state.clone();
    let stale = Move::new(1, parse("6D"), MoveKind::CaptureEqual, vec![parse("6B")]);
    assert!(apply_move(&mut s, &stale).is_err());
    assert_eq!(s, state);
}

#[test]
fn duplicated_capture_card_is_rejected() {
    let mut state = playing_state(&["6D"], &["3S", "3B"], &["5C"]);
    let mv = Move::new(
        1,
        parse("6D"),
        MoveKind::CaptureSum,
        vec![parse("3S"), parse("3S")],
    );
    assert!(apply_move(&mut state, &mv).is_err());
}

#[test]
fn generated_moves_always_apply_cleanly() {
    let state = playing_state(&["7C", "AD", "4S"], &["2B", "3S", "AB"], &["5C"]);
    for mv in valid_moves(&state, 1) {
        let mut s = state.clone();
        apply_move(&mut s, &mv).unwrap();
    }
}
