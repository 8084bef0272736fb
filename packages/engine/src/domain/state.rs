//! Mutable aggregate of one smazzata: deck, table, per-player piles,
//! and turn pointers.

use serde::{Deserialize, Serialize};

use super::cards_types::Card;
use super::rules::{MAX_PLAYERS, MIN_PLAYERS};
use crate::errors::domain::{DomainError, ValidationKind};

pub type PlayerId = u8;

/// Progression of a single smazzata.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Created, cards not yet on the table.
    Dealt,
    /// Players are taking turns.
    Playing,
    /// Settled; only `total_score` is meaningful afterwards.
    Ended,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// Cards currently held. Order is irrelevant to the rules but kept
    /// stable for display.
    pub hand: Vec<Card>,
    /// All cards captured this smazzata.
    pub captured: Vec<Card>,
    /// Scope made this smazzata.
    pub scopa_count: u8,
    /// Piles swept via scopa or the dealer's opening bonus, kept
    /// separately for display.
    pub scopa_piles: Vec<Vec<Card>>,
    /// Accuso points accrued this smazzata (monotonic non-decreasing).
    pub accusi_points: u8,
    /// Cumulative score across smazzate. Increment-only.
    pub total_score: i32,
}

impl PlayerState {
    pub fn empty() -> Self {
        Self {
            hand: Vec::new(),
            captured: Vec::new(),
            scopa_count: 0,
            scopa_piles: Vec::new(),
            accusi_points: 0,
            total_score: 0,
        }
    }

    /// Clear per-smazzata state, preserving the running total.
    pub fn reset_for_smazzata(&mut self) {
        self.hand.clear();
        self.captured.clear();
        self.scopa_count = 0;
        self.scopa_piles.clear();
        self.accusi_points = 0;
    }
}

/// Entire smazzata container, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub num_players: usize,
    /// Remaining undealt cards, top of the deck last.
    pub deck: Vec<Card>,
    /// Face-up capturable cards. Never holds duplicates.
    pub table: Vec<Card>,
    pub players: Vec<PlayerState>,
    /// Seat expected to act.
    pub turn: PlayerId,
    pub dealer: PlayerId,
    /// Seat that made the most recent capture; leftover table cards go
    /// here at the end of the smazzata.
    pub last_capture: Option<PlayerId>,
    pub phase: Phase,
}

impl GameState {
    pub fn new(num_players: usize, dealer: PlayerId) -> Result<Self, DomainError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}, got {num_players}"),
            ));
        }
        if (dealer as usize) >= num_players {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!("Dealer seat {dealer} out of range for {num_players} players"),
            ));
        }
        Ok(Self {
            num_players,
            deck: Vec::new(),
            table: Vec::new(),
            players: (0..num_players).map(|_| PlayerState::empty()).collect(),
            turn: first_to_play(dealer, num_players),
            dealer,
            last_capture: None,
            phase: Phase::Dealt,
        })
    }

    #[inline]
    pub fn player(&self, who: PlayerId) -> &PlayerState {
        &self.players[who as usize]
    }

    #[inline]
    pub fn player_mut(&mut self, who: PlayerId) -> &mut PlayerState {
        &mut self.players[who as usize]
    }

    pub fn hands_empty(&self) -> bool {
        self.players.iter().all(|p| p.hand.is_empty())
    }

    /// Remove a specific card from a hand. Removing a card that is not
    /// there is a contract violation, never silently ignored.
    pub fn remove_from_hand(&mut self, who: PlayerId, card: Card) -> Result<(), DomainError> {
        let hand = &mut self.players[who as usize].hand;
        match hand.iter().position(|&c| c == card) {
            Some(pos) => {
                hand.remove(pos);
                Ok(())
            }
            None => Err(DomainError::validation(
                ValidationKind::CardNotInHand,
                format!("{card:?} not in hand of seat {who}"),
            )),
        }
    }

    /// Remove a specific card from the table, loudly failing if absent.
    pub fn remove_from_table(&mut self, card: Card) -> Result<(), DomainError> {
        match self.table.iter().position(|&c| c == card) {
            Some(pos) => {
                self.table.remove(pos);
                Ok(())
            }
            None => Err(DomainError::validation(
                ValidationKind::CardNotOnTable,
                format!("{card:?} not on table"),
            )),
        }
    }

    pub fn add_to_table(&mut self, card: Card) -> Result<(), DomainError> {
        if self.table.contains(&card) {
            return Err(DomainError::validation(
                ValidationKind::DuplicateCard,
                format!("{card:?} already on table"),
            ));
        }
        self.table.push(card);
        Ok(())
    }

    /// Advance the turn one seat in play direction.
    pub fn advance_turn(&mut self) {
        self.turn = next_to_play(self.turn, self.num_players);
    }
}

/// Seat / turn math helpers (2-4 seats).
///
/// Play and deal both run counter-clockwise: the seat after `i` is
/// `(i + n - 1) % n`.
#[inline]
pub fn seat_offset(seat: PlayerId, delta: i8, num_players: usize) -> PlayerId {
    let n = num_players as i16;
    ((seat as i16 + delta as i16).rem_euclid(n)) as PlayerId
}

/// Seat acting after `seat`.
#[inline]
pub fn next_to_play(seat: PlayerId, num_players: usize) -> PlayerId {
    seat_offset(seat, -1, num_players)
}

/// First seat to act (and first dealt to) in a smazzata.
#[inline]
pub fn first_to_play(dealer: PlayerId, num_players: usize) -> PlayerId {
    next_to_play(dealer, num_players)
}
