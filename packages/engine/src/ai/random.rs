//! Random AI player - picks a uniformly random legal move.
//!
//! This module provides [`RandomPlayer`], the reference implementation
//! of the [`AiPlayer`](super::AiPlayer) trait. It demonstrates the
//! patterns custom AIs should follow:
//! - Thread-safe interior mutability using [`std::sync::Mutex`]
//! - Deterministic behavior via optional seeding
//! - Proper error handling without panics
//! - Choosing only from the provided legal candidates

use std::sync::Mutex;

use rand::prelude::*;

use super::trait_def::{AiError, AiPlayer};
use crate::domain::moves::Move;
use crate::domain::state::{GameState, PlayerId};

/// AI that plays a random legal move.
///
/// Uses `Mutex<StdRng>` for interior mutability since trait methods
/// take `&self` but the RNG needs mutable access. Pass a seed for
/// reproducible behavior in tests, `None` for system entropy.
pub struct RandomPlayer {
    rng: Mutex<StdRng>,
}

impl RandomPlayer {
    pub const NAME: &'static str = "RandomPlayer";
    pub const VERSION: &'static str = "1.0.0";

    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(s) = seed {
            StdRng::seed_from_u64(s)
        } else {
            StdRng::from_os_rng()
        };
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl AiPlayer for RandomPlayer {
    fn choose_move(
        &self,
        _state: &GameState,
        _who: PlayerId,
        candidates: &[Move],
    ) -> Result<Option<Move>, AiError> {
        if candidates.is_empty() {
            return Ok(None);
        }

        // Convert a poisoned lock into an AiError instead of panicking.
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| AiError::Internal(format!("RNG lock poisoned: {e}")))?;

        let choice = candidates
            .choose(&mut *rng)
            .cloned()
            .ok_or_else(|| AiError::Internal("Failed to choose random move".into()))?;

        Ok(Some(choice))
    }
}
