//! In-memory game simulator for AI evaluation.
//!
//! Runs complete Cirulla sessions (first to 51 wins) entirely in
//! memory, one `RoundManager` per game, with an `AiPlayer` per seat.

use std::fmt;

use cirulla_engine::domain::rules::GAME_TARGET_SCORE;
use cirulla_engine::{AiError, AiPlayer, DomainError, Phase, RoundManager, TableRules};
use tracing::debug;

/// Hard ceiling on smazzate per game; a session that has not produced
/// a winner by then is reported as an error instead of spinning.
const MAX_SMAZZATE: u32 = 1000;

#[derive(Debug)]
pub enum SimulatorError {
    Domain(DomainError),
    Ai(AiError),
    NoWinner(u32),
}

impl fmt::Display for SimulatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulatorError::Domain(e) => write!(f, "domain error: {e}"),
            SimulatorError::Ai(e) => write!(f, "AI error: {e}"),
            SimulatorError::NoWinner(n) => write!(f, "no winner after {n} smazzate"),
        }
    }
}

impl std::error::Error for SimulatorError {}

impl From<DomainError> for SimulatorError {
    fn from(e: DomainError) -> Self {
        SimulatorError::Domain(e)
    }
}

impl From<AiError> for SimulatorError {
    fn from(e: AiError) -> Self {
        SimulatorError::Ai(e)
    }
}

/// Result of simulating a complete game.
#[derive(Debug, Clone)]
pub struct GameResult {
    /// Final cumulative scores, indexed by seat.
    pub final_scores: Vec<i32>,
    /// Seat with the highest final score.
    pub winner: u8,
    /// Smazzate played before someone reached the target.
    pub smazzate_played: u32,
}

/// In-memory game simulator: one deterministic session per seed.
pub struct Simulator {
    num_players: usize,
    game_seed: u64,
}

impl Simulator {
    pub fn new(num_players: usize, game_seed: u64) -> Self {
        Self {
            num_players,
            game_seed,
        }
    }

    /// Simulate a session until a seat reaches the target score.
    ///
    /// `ais` must hold one player per seat.
    pub fn simulate_game(&self, ais: &[Box<dyn AiPlayer>]) -> Result<GameResult, SimulatorError> {
        let mut rm = RoundManager::new(self.num_players, TableRules::default(), self.game_seed)?;
        rm.start_smazzata()?;

        loop {
            while rm.state().phase == Phase::Playing {
                let who = rm.state().turn;
                let candidates = rm.valid_moves(who);
                let mv = ais[who as usize]
                    .choose_move(rm.state(), who, &candidates)?
                    .ok_or_else(|| {
                        SimulatorError::Ai(AiError::InvalidMove(format!(
                            "seat {who} has no legal moves while playing"
                        )))
                    })?;
                rm.play(&mv)?;
            }

            let totals: Vec<i32> = rm.state().players.iter().map(|p| p.total_score).collect();
            debug!(smazzata = rm.smazzata_no(), ?totals, "smazzata finished");

            if totals.iter().any(|&t| t >= GAME_TARGET_SCORE) {
                let winner = totals
                    .iter()
                    .enumerate()
                    .max_by_key(|&(_, &t)| t)
                    .map(|(seat, _)| seat as u8)
                    .unwrap_or(0);
                return Ok(GameResult {
                    final_scores: totals,
                    winner,
                    smazzate_played: rm.smazzata_no() + 1,
                });
            }
            if rm.smazzata_no() + 1 >= MAX_SMAZZATE {
                return Err(SimulatorError::NoWinner(MAX_SMAZZATE));
            }
            rm.start_next_smazzata()?;
        }
    }
}
