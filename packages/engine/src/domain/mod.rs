//! Domain layer: pure game logic types and helpers.

pub mod accusi;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_serde;
pub mod cards_types;
pub mod dealing;
pub mod moves;
pub mod play;
pub mod round;
pub mod rules;
pub mod scoring;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod tests_moves;
#[cfg(test)]
mod tests_play;
#[cfg(test)]
mod tests_props_moves;

// Re-exports for ergonomics
pub use cards_logic::{subsets_summing_to, value_sum};
pub use cards_parsing::try_parse_cards;
pub use cards_types::{Card, Rank, Suit};
pub use dealing::{deal_smazzata, full_deck};
pub use seed_derivation::derive_deal_seed;
