//! RNG seed derivation for deterministic dealing.
//!
//! Each (game, smazzata, deal attempt) combination gets its own seed,
//! so replaying a session from its base seed reproduces every shuffle,
//! including the redeals forced by the two-Aces table invariant.

/// Derive the shuffle seed for one deal attempt.
///
/// Deterministic and unique per (game_seed, smazzata_no, attempt);
/// wrapping arithmetic keeps extreme base seeds well-defined.
pub fn derive_deal_seed(game_seed: u64, smazzata_no: u32, attempt: u32) -> u64 {
    game_seed
        .wrapping_add(u64::from(smazzata_no).wrapping_mul(1_000_000))
        .wrapping_add(u64::from(attempt).wrapping_mul(100))
        .wrapping_add(1)
}
