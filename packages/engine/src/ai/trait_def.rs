//! AI player trait definition.

use std::fmt;

use crate::domain::moves::Move;
use crate::domain::state::{GameState, PlayerId};

/// Errors that can occur during AI decision-making.
#[derive(Debug)]
pub enum AiError {
    /// AI encountered an internal error
    Internal(String),
    /// AI produced or received an invalid move set
    InvalidMove(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Internal(msg) => write!(f, "AI internal error: {msg}"),
            AiError::InvalidMove(msg) => write!(f, "AI invalid move: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Trait for AI players.
///
/// Implementations receive the full game state and the pre-computed
/// legal candidates for the seat to act, and must return one of the
/// candidates. The caller owns legality; the AI owns preference.
pub trait AiPlayer: Send + Sync {
    /// Choose one move out of `candidates`.
    ///
    /// An empty candidate list is a degenerate input, not a failure:
    /// implementations return `Ok(None)` for it and only for it.
    /// Errors are reserved for internal faults (e.g. a poisoned lock).
    fn choose_move(
        &self,
        state: &GameState,
        who: PlayerId,
        candidates: &[Move],
    ) -> Result<Option<Move>, AiError>;
}
