//! Smazzata orchestration: dealing, accusi, settlement.
//!
//! One `RoundManager` is owned per game session; it carries the
//! session seed, the dealer rotation, and the cumulative totals across
//! smazzate. There is no process-wide state anywhere in the engine.

use tracing::{debug, info};

use super::accusi::{best_accuso, is_cirulla, is_decino, AccusoType};
use super::cards_logic::value_sum;
use super::cards_types::Card;
use super::dealing::{deal_next_hands, deal_smazzata};
use super::moves::{move_from_selection, valid_moves, Move};
use super::play::{apply_move, PlayOutcome};
use super::rules::{OPENING_SWEEP_POINTS, TableRules};
use super::scoring::{is_cappotto, smazzata_scores, ScoreBreakdown};
use super::state::{first_to_play, next_to_play, GameState, Phase, PlayerId};
use crate::errors::domain::{DomainError, ValidationKind};

pub struct RoundManager {
    state: GameState,
    rules: TableRules,
    game_seed: u64,
    smazzata_no: u32,
    /// Best accuso value declared per seat this smazzata; declarations
    /// accrue as a monotonic max, not additively.
    claimed: Vec<u8>,
    scores: Option<Vec<ScoreBreakdown>>,
    cappotto: Option<PlayerId>,
}

impl RoundManager {
    /// Create a session for `num_players` seats, dealer at seat 0.
    /// All shuffles derive deterministically from `game_seed`.
    pub fn new(num_players: usize, rules: TableRules, game_seed: u64) -> Result<Self, DomainError> {
        let state = GameState::new(num_players, 0)?;
        Ok(Self {
            claimed: vec![0; num_players],
            state,
            rules,
            game_seed,
            smazzata_no: 0,
            scores: None,
            cappotto: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn rules(&self) -> &TableRules {
        &self.rules
    }

    pub fn smazzata_no(&self) -> u32 {
        self.smazzata_no
    }

    /// Settlement sheets of the finished smazzata; `None` while playing
    /// or when a cappotto short-circuited category scoring.
    pub fn scores(&self) -> Option<&[ScoreBreakdown]> {
        self.scores.as_deref()
    }

    /// Seat that won by cappotto this smazzata, if any.
    pub fn cappotto(&self) -> Option<PlayerId> {
        self.cappotto
    }

    /// Deal the opening layout and run the pre-play checks: the
    /// dealer's opening sweep bonus and the automatic accuso
    /// declarations on every hand.
    pub fn start_smazzata(&mut self) -> Result<(), DomainError> {
        if self.state.phase != Phase::Dealt {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Smazzata already started",
            ));
        }
        let deal = deal_smazzata(
            self.state.num_players,
            self.state.dealer,
            self.game_seed,
            self.smazzata_no,
        )?;
        for (seat, hand) in deal.hands.into_iter().enumerate() {
            self.state.players[seat].hand = hand;
        }
        self.state.table = deal.table;
        self.state.deck = deal.deck;

        self.apply_opening_sweep();
        self.auto_declare_accusi();

        self.state.turn = first_to_play(self.state.dealer, self.state.num_players);
        self.state.phase = Phase::Playing;
        Ok(())
    }

    /// Rotate the dealer, reset per-smazzata state (totals persist),
    /// and deal the next smazzata.
    pub fn start_next_smazzata(&mut self) -> Result<(), DomainError> {
        if self.state.phase != Phase::Ended {
            return Err(DomainError::validation(
                ValidationKind::PhaseMismatch,
                "Current smazzata still in progress",
            ));
        }
        self.smazzata_no += 1;
        self.state.dealer = next_to_play(self.state.dealer, self.state.num_players);
        for p in &mut self.state.players {
            p.reset_for_smazzata();
        }
        self.state.table.clear();
        self.state.deck.clear();
        self.state.last_capture = None;
        self.state.phase = Phase::Dealt;
        self.claimed.iter_mut().for_each(|c| *c = 0);
        self.scores = None;
        self.cappotto = None;
        self.start_smazzata()
    }

    pub fn valid_moves(&self, who: PlayerId) -> Vec<Move> {
        valid_moves(&self.state, who)
    }

    pub fn move_from_selection(
        &self,
        who: PlayerId,
        card: Card,
        selection: &[Card],
    ) -> Option<Move> {
        move_from_selection(&self.state, who, card, selection)
    }

    /// Apply one move and run the between-turns bookkeeping: redeal
    /// when hands run out, settle when the deck does too.
    pub fn play(&mut self, mv: &Move) -> Result<PlayOutcome, DomainError> {
        let outcome = apply_move(&mut self.state, mv)?;
        if outcome.round_over {
            self.settle();
        } else if outcome.hands_exhausted {
            debug!(
                smazzata = self.smazzata_no,
                deck = self.state.deck.len(),
                "hands exhausted, dealing next hands"
            );
            deal_next_hands(&mut self.state)?;
            self.auto_declare_accusi();
        }
        Ok(outcome)
    }

    /// Declare an accuso for the requested seat against its current
    /// hand. Succeeds only if the hand satisfies the checker and the
    /// seat has not already claimed an equal-or-higher value this
    /// smazzata; failure is an expected no-op.
    pub fn try_player_accuso(&mut self, who: PlayerId, accuso: AccusoType) -> bool {
        if self.state.phase != Phase::Playing || (who as usize) >= self.state.num_players {
            return false;
        }
        let hand = &self.state.players[who as usize].hand;
        let qualifies = match accuso {
            AccusoType::Cirulla => is_cirulla(hand),
            AccusoType::Decino => is_decino(hand),
        };
        if !qualifies {
            return false;
        }
        self.claim(who, accuso)
    }

    /// Dealer sweeps the opening table when its literal sum hits one of
    /// the configured targets. Distinct from in-play move generation;
    /// the Matta is never reinterpreted here.
    fn apply_opening_sweep(&mut self) {
        let sum = value_sum(&self.state.table);
        if !self.rules.opening_sweep_targets.contains(&sum) {
            return;
        }
        let dealer = self.state.dealer;
        info!(dealer, sum, "opening table sweep for the dealer");
        let swept: Vec<Card> = self.state.table.drain(..).collect();
        let player = self.state.player_mut(dealer);
        player.captured.extend_from_slice(&swept);
        player.scopa_piles.push(swept);
        player.accusi_points += OPENING_SWEEP_POINTS;
        self.state.last_capture = Some(dealer);
    }

    /// Run the accuso auto-declaration over every hand, Decino taking
    /// priority over Cirulla per seat.
    fn auto_declare_accusi(&mut self) {
        for seat in 0..self.state.num_players {
            if let Some(accuso) = best_accuso(&self.state.players[seat].hand) {
                if self.claim(seat as PlayerId, accuso) {
                    debug!(seat, ?accuso, "accuso declared");
                }
            }
        }
    }

    /// Monotonic-max accrual: a claim only adds the delta over the
    /// seat's previous best this smazzata.
    fn claim(&mut self, who: PlayerId, accuso: AccusoType) -> bool {
        let points = accuso.points();
        let best = &mut self.claimed[who as usize];
        if points <= *best {
            return false;
        }
        self.state.players[who as usize].accusi_points += points - *best;
        *best = points;
        true
    }

    /// End-of-smazzata settlement: leftover table cards to the last
    /// capturer, then cappotto short-circuit or the seven-category
    /// sheet added onto the running totals.
    fn settle(&mut self) {
        if let Some(who) = self.state.last_capture {
            if !self.state.table.is_empty() {
                let leftovers: Vec<Card> = self.state.table.drain(..).collect();
                self.state.players[who as usize]
                    .captured
                    .extend_from_slice(&leftovers);
            }
        }

        for seat in 0..self.state.num_players {
            let player = &self.state.players[seat];
            if is_cappotto(&player.captured, self.rules.cappotto_suit) {
                info!(seat, "cappotto: instant win");
                let player = &mut self.state.players[seat];
                player.total_score = player.total_score.max(self.rules.cappotto_score);
                self.cappotto = Some(seat as PlayerId);
                self.state.phase = Phase::Ended;
                return;
            }
        }

        let sheets = smazzata_scores(&self.state);
        for (seat, sheet) in sheets.iter().enumerate() {
            self.state.players[seat].total_score += sheet.total();
        }
        info!(
            smazzata = self.smazzata_no,
            totals = ?self.state.players.iter().map(|p| p.total_score).collect::<Vec<_>>(),
            "smazzata settled"
        );
        self.scores = Some(sheets);
        self.state.phase = Phase::Ended;
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
