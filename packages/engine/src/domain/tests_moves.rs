//! Unit tests for legal-move generation and selection matching.

use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::moves::{move_from_selection, valid_moves, Move, MoveKind};
use crate::domain::state::{GameState, Phase};
use crate::domain::Card;

fn parse(token: &str) -> Card {
    token.parse().unwrap()
}

/// 2-player state in the Playing phase with seat 1 to act.
fn playing_state(hand: &[&str], table: &[&str]) -> GameState {
    let mut state = GameState::new(2, 0).unwrap();
    state.players[1].hand = try_parse_cards(hand.iter().copied()).unwrap();
    state.table = try_parse_cards(table.iter().copied()).unwrap();
    state.phase = Phase::Playing;
    state
}

fn kinds(moves: &[Move]) -> Vec<MoveKind> {
    moves.iter().map(|m| m.kind).collect()
}

#[test]
fn no_moves_outside_playing_phase() {
    let mut state = playing_state(&["4D"], &["4B"]);
    state.phase = Phase::Dealt;
    assert!(valid_moves(&state, 1).is_empty());
}

#[test]
fn six_against_four_and_five_must_take_the_fifteen() {
    // 6 + 4 + 5 = 15; no equal value, no sum-to-6 pair.
    let state = playing_state(&["6D"], &["4B", "5S"]);
    let moves = valid_moves(&state, 1);

    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].kind, MoveKind::CaptureFifteen);
    assert_eq!(
        moves[0].captures(),
        try_parse_cards(["4B", "5S"]).unwrap().as_slice()
    );
}

#[test]
fn equal_value_single_card_capture() {
    let state = playing_state(&["6D"], &["6S"]);
    let moves = valid_moves(&state, 1);

    assert_eq!(kinds(&moves), vec![MoveKind::CaptureEqual]);
    assert_eq!(moves[0].captures(), &[parse("6S")]);
}

#[test]
fn sum_capture_takes_a_multi_card_set() {
    // 7 = 3 + 4; also 7 + 3 + 5 = 15 and 7 + 4 + 4 would not apply.
    let state = playing_state(&["7S"], &["3B", "4S", "5D"]);
    let moves = valid_moves(&state, 1);

    assert!(moves.contains(&Move::new(
        1,
        parse("7S"),
        MoveKind::CaptureSum,
        try_parse_cards(["3B", "4S"]).unwrap(),
    )));
    assert!(moves.contains(&Move::new(
        1,
        parse("7S"),
        MoveKind::CaptureFifteen,
        try_parse_cards(["3B", "5D"]).unwrap(),
    )));
}

#[test]
fn ace_takes_the_whole_table_when_no_table_ace() {
    let state = playing_state(&["AD"], &["3B", "RC", "7S"]);
    let moves = valid_moves(&state, 1);

    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].kind, MoveKind::AceCapture);
    assert_eq!(moves[0].captures().len(), 3);
}

#[test]
fn ace_against_table_aces_takes_exactly_one() {
    let state = playing_state(&["AD"], &["AS", "AB", "5C"]);
    let moves = valid_moves(&state, 1);

    assert_eq!(moves.len(), 2);
    for mv in &moves {
        assert_eq!(mv.kind, MoveKind::AceCapture);
        assert_eq!(mv.captures().len(), 1);
        assert!(mv.captures()[0].is_ace());
    }
}

#[test]
fn ace_on_empty_table_is_a_lay_down() {
    let state = playing_state(&["AD"], &[]);
    let moves = valid_moves(&state, 1);

    assert_eq!(kinds(&moves), vec![MoveKind::PlayOnly]);
}

#[test]
fn matta_mimics_any_single_card_and_the_ace() {
    let state = playing_state(&["7C"], &["RS"]);
    let moves = valid_moves(&state, 1);

    // Equal-value on the Re, plus ace-mode sweep of the lone card.
    assert_eq!(moves.len(), 2);
    assert!(kinds(&moves).contains(&MoveKind::CaptureEqual));
    assert!(kinds(&moves).contains(&MoveKind::AceCapture));
    for mv in &moves {
        assert_eq!(mv.captures(), &[parse("RS")]);
    }
}

#[test]
fn matta_realizes_sums_and_fifteens_over_assignments() {
    let state = playing_state(&["7C"], &["2B", "3S"]);
    let moves = valid_moves(&state, 1);

    let pair = try_parse_cards(["2B", "3S"]).unwrap();
    // Singles as value 2 and value 3, whole table in ace mode, the
    // pair as an assigned 5, and the pair completing 10 to fifteen.
    assert_eq!(moves.len(), 5);
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CaptureSum && m.captures() == pair.as_slice()));
    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CaptureFifteen && m.captures() == pair.as_slice()));
}

#[test]
fn matta_on_the_table_counts_as_a_literal_seven() {
    // 7D captures the table Matta by equal value.
    let state = playing_state(&["7D"], &["7C"]);
    let moves = valid_moves(&state, 1);

    assert!(moves
        .iter()
        .any(|m| m.kind == MoveKind::CaptureEqual && m.captures() == [parse("7C")]));
}

#[test]
fn forced_capture_blocks_every_lay_down() {
    // Only 2S can capture; RB still may not be laid down.
    let state = playing_state(&["2S", "RB"], &["2B"]);
    let moves = valid_moves(&state, 1);

    assert!(!moves.is_empty());
    assert!(moves.iter().all(Move::is_capture));
    assert!(moves.iter().all(|m| m.card == parse("2S")));
}

#[test]
fn lay_downs_only_when_nothing_in_hand_captures() {
    let state = playing_state(&["RB", "2S"], &["FB", "CS"]);
    let moves = valid_moves(&state, 1);

    assert_eq!(moves.len(), 2);
    assert!(moves.iter().all(|m| m.kind == MoveKind::PlayOnly));
}

#[test]
fn selection_matching_ignores_order() {
    let state = playing_state(&["6D"], &["4B", "5S"]);
    let selection = try_parse_cards(["5S", "4B"]).unwrap();

    let mv = move_from_selection(&state, 1, parse("6D"), &selection).unwrap();
    assert_eq!(mv.kind, MoveKind::CaptureFifteen);
}

#[test]
fn selection_matching_rejects_illegal_sets() {
    let state = playing_state(&["6D"], &["4B", "5S"]);

    // Partial set is not a legal capture for the 6.
    let partial = try_parse_cards(["4B"]).unwrap();
    assert!(move_from_selection(&state, 1, parse("6D"), &partial).is_none());

    // Empty selection cannot stand in for a capture when one is forced.
    assert!(move_from_selection(&state, 1, parse("6D"), &[]).is_none());
}

#[test]
fn empty_selection_matches_a_legal_lay_down() {
    let state = playing_state(&["RB"], &["FB", "CS"]);
    let mv = move_from_selection(&state, 1, parse("RB"), &[]).unwrap();
    assert_eq!(mv.kind, MoveKind::PlayOnly);
}

#[test]
fn deserialized_captures_come_back_canonically_sorted() {
    let json = r#"{"player":1,"card":"6D","kind":"CaptureFifteen","captures":["5S","4B"]}"#;
    let mv: Move = serde_json::from_str(json).unwrap();

    assert_eq!(mv.captures(), try_parse_cards(["4B", "5S"]).unwrap().as_slice());
    assert_eq!(
        mv,
        Move::new(
            1,
            parse("6D"),
            MoveKind::CaptureFifteen,
            try_parse_cards(["5S", "4B"]).unwrap(),
        )
    );
}

#[test]
fn deserialization_rejects_a_duplicated_capture() {
    let json = r#"{"player":1,"card":"6D","kind":"CaptureSum","captures":["3B","3B"]}"#;
    assert!(serde_json::from_str::<Move>(json).is_err());
}
