#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules and scoring engine for Cirulla ("51"), a Scopa-family card
//! game for 2-4 players on the 40-card Italian deck.
//!
//! The engine is a pure library: single-threaded, synchronous, no I/O.
//! A presentation or transport layer drives it through legal-move
//! queries, move application, accuso declarations, and score queries;
//! all randomness (dealing) is deterministic given a seed.

pub mod ai;
pub mod domain;
pub mod errors;

// Re-exports for public API
pub use ai::{create_ai, AiConfig, AiError, AiPlayer, Difficulty, HeuristicPlayer, RandomPlayer};
pub use domain::accusi::{best_accuso, is_cirulla, is_decino, AccusoType};
pub use domain::moves::{move_from_selection, valid_moves, Move, MoveKind};
pub use domain::play::{apply_move, PlayOutcome};
pub use domain::round::RoundManager;
pub use domain::rules::TableRules;
pub use domain::scoring::{smazzata_scores, ScoreBreakdown};
pub use domain::state::{GameState, Phase, PlayerId, PlayerState};
pub use domain::{Card, Rank, Suit};
pub use errors::domain::{DomainError, ValidationKind};
