//! Seed derivation for puzzle shuffles.
//!
//! Every puzzle owns its own [`PuzzleRng`]. Streams are never shared between
//! puzzles: each one is seeded from the session seed mixed with the puzzle's
//! ordinal, so the same session seed always yields the same boards.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Random source stored inside each puzzle.
pub type PuzzleRng = StdRng;

/// Compute a deterministic per-puzzle seed from the session seed.
///
/// # Arguments
///
/// * `game_seed` - Base seed set at session start
/// * `ordinal` - Position of the puzzle in the registry (0 for the first puzzle built)
pub fn compute_seed(game_seed: u64, ordinal: u32) -> u64 {
    // SplitMix64 / FxHash multipliers
    let mut hash = game_seed;

    hash ^= u64::from(ordinal).wrapping_mul(0x9e3779b97f4a7c15);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xc4ceb9fe1a85ec53);
    hash ^= hash >> 33;

    hash
}

/// Build the random source for the puzzle at `ordinal`.
pub fn puzzle_rng(game_seed: u64, ordinal: u32) -> PuzzleRng {
    PuzzleRng::seed_from_u64(compute_seed(game_seed, ordinal))
}
