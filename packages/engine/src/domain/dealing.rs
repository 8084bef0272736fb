//! Deterministic card dealing for a smazzata.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use tracing::debug;

use super::cards_logic::count_aces;
use super::cards_types::{Card, Rank, Suit};
use super::rules::{
    HAND_SIZE, INITIAL_TABLE_SIZE, MAX_DEAL_ATTEMPTS, MAX_PLAYERS, MIN_PLAYERS,
};
use super::seed_derivation::derive_deal_seed;
use super::state::{seat_offset, GameState, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

/// Generate the full 40-card deck in standard order.
pub fn full_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(40);
    for suit in Suit::ALL {
        for rank in Rank::ALL {
            deck.push(Card::new(suit, rank));
        }
    }
    deck
}

/// Fisher-Yates shuffle from a deterministic seeded generator.
fn shuffle_with_seed(deck: &mut [Card], seed: u64) {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);
}

/// Result of the opening deal: 3 cards per seat in deal order, 4 on
/// the table, the rest left as the deck.
#[derive(Debug, Clone)]
pub struct InitialDeal {
    pub hands: Vec<Vec<Card>>,
    pub table: Vec<Card>,
    pub deck: Vec<Card>,
}

/// Shuffle and deal the opening layout, retrying with derived seeds
/// until the table shows fewer than two Aces. The retry is a hard
/// invariant: a table seeded with two or more Aces is never accepted.
///
/// Hands are dealt in play order starting at the dealer's right hand
/// neighbour; `hands` is indexed by seat.
pub fn deal_smazzata(
    num_players: usize,
    dealer: PlayerId,
    game_seed: u64,
    smazzata_no: u32,
) -> Result<InitialDeal, DomainError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&num_players) {
        return Err(DomainError::validation(
            ValidationKind::InvalidPlayerCount,
            format!("Player count must be {MIN_PLAYERS}..={MAX_PLAYERS}"),
        ));
    }

    for attempt in 0..MAX_DEAL_ATTEMPTS {
        let mut deck = full_deck();
        shuffle_with_seed(&mut deck, derive_deal_seed(game_seed, smazzata_no, attempt));

        let mut hands: Vec<Vec<Card>> = vec![Vec::new(); num_players];
        for k in 0..num_players {
            let seat = seat_offset(dealer, -1 - k as i8, num_players);
            let at = deck.len() - HAND_SIZE;
            hands[seat as usize] = deck.split_off(at);
        }
        let table = deck.split_off(deck.len() - INITIAL_TABLE_SIZE);

        if count_aces(&table) < 2 {
            return Ok(InitialDeal { hands, table, deck });
        }
        debug!(attempt, "initial table holds two or more aces, redealing");
    }

    Err(DomainError::validation_other(
        "initial deal retries exhausted",
    ))
}

/// Deal three fresh cards to every empty hand, starting from the seat
/// at the dealer's right, once the previous hands are used up.
pub fn deal_next_hands(state: &mut GameState) -> Result<(), DomainError> {
    let needed = state.num_players * HAND_SIZE;
    if state.deck.len() < needed {
        return Err(DomainError::validation(
            ValidationKind::EmptyDeck,
            format!(
                "Deck holds {} cards, {needed} needed for a redeal",
                state.deck.len()
            ),
        ));
    }
    for k in 0..state.num_players {
        let seat = seat_offset(state.dealer, -1 - k as i8, state.num_players);
        let at = state.deck.len() - HAND_SIZE;
        let cards = state.deck.split_off(at);
        state.players[seat as usize].hand = cards;
    }
    Ok(())
}
