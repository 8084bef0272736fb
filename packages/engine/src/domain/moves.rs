//! Move representation and legal-move generation.
//!
//! The generator returns every legal alternative and never resolves
//! ambiguity itself: when a played card could capture several distinct
//! sets (or the Matta could realize several value assignments), each
//! achievable captured set is its own candidate and the caller — UI or
//! AI — picks one.

use serde::{Deserialize, Serialize};

use super::cards_logic::{aces, subsets_summing_to};
use super::cards_types::Card;
use super::rules::FIFTEEN_TARGET;
use super::state::{GameState, Phase, PlayerId};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// Lay the card on the table; legal only when nothing in the whole
    /// hand can capture.
    PlayOnly,
    /// Take a single table card of equal value.
    CaptureEqual,
    /// Take a set of table cards summing to the played card's value.
    CaptureSum,
    /// Take a set of table cards that, with the played card, totals 15.
    CaptureFifteen,
    /// Ace (or Matta in Ace mode): take the lone table Ace, a chosen
    /// one of several, or the whole table when it holds none.
    AceCapture,
}

/// A candidate or chosen play. Value object: equality is structural
/// over (player, card, kind, captured set); the captured set is kept
/// canonically sorted so derived equality is order-independent.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Move {
    pub player: PlayerId,
    pub card: Card,
    pub kind: MoveKind,
    captures: Vec<Card>,
}

impl Move {
    pub fn new(player: PlayerId, card: Card, kind: MoveKind, mut captures: Vec<Card>) -> Self {
        captures.sort();
        Self {
            player,
            card,
            kind,
            captures,
        }
    }

    pub fn play_only(player: PlayerId, card: Card) -> Self {
        Self::new(player, card, MoveKind::PlayOnly, Vec::new())
    }

    /// Captured table cards, sorted. Empty for `PlayOnly`.
    pub fn captures(&self) -> &[Card] {
        &self.captures
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !matches!(self.kind, MoveKind::PlayOnly)
    }
}

/// Deserialization funnels through `Move::new` so the captured set is
/// re-sorted no matter how the wire ordered it, and a duplicated
/// capture is rejected instead of smuggled past `apply_move`.
impl<'de> Deserialize<'de> for Move {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            player: PlayerId,
            card: Card,
            kind: MoveKind,
            captures: Vec<Card>,
        }

        let raw = Raw::deserialize(deserializer)?;
        let mv = Move::new(raw.player, raw.card, raw.kind, raw.captures);
        if mv.captures.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(serde::de::Error::custom("duplicate captured card"));
        }
        Ok(mv)
    }
}

/// All legal moves for the given seat's hand against the current table.
///
/// Forced capture is enforced hand-wide: `PlayOnly` candidates (one
/// per held card) appear only when no card in the hand can capture.
pub fn valid_moves(state: &GameState, who: PlayerId) -> Vec<Move> {
    if state.phase != Phase::Playing {
        return Vec::new();
    }
    let hand = &state.players[who as usize].hand;
    let mut moves = Vec::new();
    for &card in hand {
        capture_moves_for_card(&state.table, who, card, &mut moves);
    }
    if moves.is_empty() {
        for &card in hand {
            moves.push(Move::play_only(who, card));
        }
    }
    moves
}

/// Validate a manually selected capture set against the generated
/// candidates for that card. Returns the matching candidate, or `None`
/// when the selection matches nothing (an empty selection matches only
/// a currently-legal `PlayOnly`).
pub fn move_from_selection(
    state: &GameState,
    who: PlayerId,
    card: Card,
    selection: &[Card],
) -> Option<Move> {
    let mut wanted = selection.to_vec();
    wanted.sort();
    valid_moves(state, who)
        .into_iter()
        .find(|m| m.card == card && m.captures() == wanted.as_slice())
}

fn capture_moves_for_card(table: &[Card], who: PlayerId, card: Card, out: &mut Vec<Move>) {
    if card.is_matta() {
        matta_captures(table, who, card, out);
    } else if card.is_ace() {
        ace_captures(table, who, card, out);
    } else {
        plain_captures(table, who, card, out);
    }
}

/// Ordinary card of value v: equal-value singles, sum-to-v sets,
/// and sets completing v to fifteen.
fn plain_captures(table: &[Card], who: PlayerId, card: Card, out: &mut Vec<Move>) {
    let v = card.value();
    for &t in table {
        if t.value() == v {
            out.push(Move::new(who, card, MoveKind::CaptureEqual, vec![t]));
        }
    }
    for subset in subsets_summing_to(table, v, 2) {
        out.push(Move::new(who, card, MoveKind::CaptureSum, subset));
    }
    for subset in subsets_summing_to(table, FIFTEEN_TARGET - v, 1) {
        out.push(Move::new(who, card, MoveKind::CaptureFifteen, subset));
    }
}

/// Ace behavior: with no table Ace the whole table is taken; with one
/// or more table Aces, one candidate per Ace (the player chooses).
/// An empty table yields no capture.
fn ace_captures(table: &[Card], who: PlayerId, card: Card, out: &mut Vec<Move>) {
    if table.is_empty() {
        return;
    }
    let table_aces = aces(table);
    if table_aces.is_empty() {
        out.push(Move::new(who, card, MoveKind::AceCapture, table.to_vec()));
    } else {
        for ace in table_aces {
            out.push(Move::new(who, card, MoveKind::AceCapture, vec![ace]));
        }
    }
}

/// The Matta enumerates every capture any value assignment in 1..=10
/// could realize: any single table card by equal-value, full Ace
/// behavior, and every 2+ card set whose sum either equals the
/// assigned value or completes it to fifteen. While it sits on the
/// table it is a literal 7 for everyone else; that is handled by
/// `Card::value`, not here.
fn matta_captures(table: &[Card], who: PlayerId, card: Card, out: &mut Vec<Move>) {
    for &t in table {
        out.push(Move::new(who, card, MoveKind::CaptureEqual, vec![t]));
    }
    ace_captures(table, who, card, out);
    // Sum equal to the assigned value: sets totalling 1..=10.
    for target in 1..=10u8 {
        for subset in subsets_summing_to(table, target, 2) {
            out.push(Move::new(who, card, MoveKind::CaptureSum, subset));
        }
    }
    // Fifteen with assigned value v: sets totalling 15 - v, v in 1..=10.
    for target in (FIFTEEN_TARGET - 10)..=(FIFTEEN_TARGET - 1) {
        for subset in subsets_summing_to(table, target, 2) {
            out.push(Move::new(who, card, MoveKind::CaptureFifteen, subset));
        }
    }
}
