//! AI player module - automated move selection.
//!
//! This module provides:
//! - [`AiPlayer`] trait for pluggable implementations
//! - [`RandomPlayer`]: random legal moves (seedable for tests)
//! - [`HeuristicPlayer`]: deterministic, difficulty-tiered baseline
//! - [`AiConfig`]: typed view over JSON AI configuration

mod config;
mod heuristic;
mod random;
mod trait_def;

pub use config::{AiConfig, Difficulty};
pub use heuristic::HeuristicPlayer;
pub use random::RandomPlayer;
use serde_json::Value as JsonValue;
pub use trait_def::{AiError, AiPlayer};

/// Create an AI player from an `ai_type` string and optional config.
///
/// Currently supports:
/// - "random": RandomPlayer with optional `seed` from config
/// - "heuristic": HeuristicPlayer with optional `difficulty` ("normal" / "hard")
///
/// Returns None if `ai_type` is unrecognized.
pub fn create_ai(ai_type: &str, config: Option<&JsonValue>) -> Option<Box<dyn AiPlayer>> {
    let config = AiConfig::from_json(config);
    match ai_type {
        "random" => Some(Box::new(RandomPlayer::new(config.seed()))),
        "heuristic" => Some(Box::new(HeuristicPlayer::new(config.difficulty()))),
        _ => None,
    }
}
