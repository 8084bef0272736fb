//! AI configuration handling.
//!
//! Provides a typed interface for AI configuration, extracting the
//! standard fields from a JSON config while preserving AI-specific
//! custom fields.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Strength tier for the heuristic player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Greedy captures, naive discards.
    #[default]
    Normal,
    /// Scopa-aware captures, guarded discards.
    Hard,
}

/// Standard configuration for AI players.
///
/// Extracts the common fields (`seed`, `difficulty`) from a JSON
/// config, while preserving any other fields in `custom` for
/// implementation-specific knobs.
///
/// # Example JSON Config
///
/// ```json
/// {"seed": 12345, "difficulty": "hard"}
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    /// Optional RNG seed for deterministic AI behavior, used by
    /// implementations that randomize (e.g. `RandomPlayer`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Optional strength tier for the heuristic player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    /// AI-specific configuration.
    ///
    /// Preserves any fields from the original JSON that are not part
    /// of the standard schema; implementations can query this for
    /// their own needs.
    #[serde(flatten)]
    pub custom: JsonValue,
}

impl AiConfig {
    /// Create an `AiConfig` from an optional JSON value.
    ///
    /// Extracts standard fields while preserving everything else in
    /// `custom`. `None` or malformed input yields an empty config.
    pub fn from_json(config: Option<&JsonValue>) -> Self {
        match config {
            Some(json) => serde_json::from_value(json.clone()).unwrap_or_else(|_| Self::empty()),
            None => Self::empty(),
        }
    }

    /// Get the RNG seed, if configured.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Get the difficulty tier, defaulting to `Normal`.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty.unwrap_or_default()
    }

    /// Get a custom configuration field by key.
    pub fn get_custom(&self, key: &str) -> Option<&JsonValue> {
        self.custom.get(key)
    }

    /// Create an empty configuration (no seed, no custom fields).
    pub fn empty() -> Self {
        Self {
            seed: None,
            difficulty: None,
            custom: JsonValue::Object(serde_json::Map::new()),
        }
    }

    /// Create a configuration with just a seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::empty()
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self::empty()
    }
}
