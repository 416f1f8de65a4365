/// Session configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Base seed for every puzzle shuffle in the session.
    /// Each puzzle derives its own stream from it, see [`crate::puzzle::compute_seed`].
    pub seed: u64,
    /// Distance the player travels per movement input, in world units.
    pub step: f64,
    /// Extra margin around the player box used when resolving interaction targets.
    pub reach: f64,
    /// Grid shape of the enigma puzzles built by the room registry.
    pub puzzle_rows: usize,
    pub puzzle_cols: usize,
}

impl GameConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;
    pub const DEFAULT_STEP: f64 = 4.0;
    pub const DEFAULT_REACH: f64 = 8.0;
    pub const DEFAULT_PUZZLE_ROWS: usize = 3;
    pub const DEFAULT_PUZZLE_COLS: usize = 3;

    pub fn new() -> Self {
        Self {
            seed: Self::DEFAULT_SEED,
            step: Self::DEFAULT_STEP,
            reach: Self::DEFAULT_REACH,
            puzzle_rows: Self::DEFAULT_PUZZLE_ROWS,
            puzzle_cols: Self::DEFAULT_PUZZLE_COLS,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
