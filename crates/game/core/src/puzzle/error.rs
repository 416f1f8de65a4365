//! Puzzle errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised by [`EnigmaPuzzle`](super::EnigmaPuzzle) operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// A grid needs at least one row and one column.
    #[error("puzzle shape {rows}x{cols} is empty")]
    InvalidShape { rows: usize, cols: usize },

    /// Linear index outside `[0, rows * cols)`.
    #[error("piece index {index} is out of range (puzzle has {len} pieces)")]
    IndexOutOfRange { index: usize, len: usize },

    /// The grid no longer holds each piece id exactly once.
    #[error("puzzle '{name}' grid is not a permutation of 0..{len}")]
    CorruptGrid { name: String, len: usize },
}

impl GameError for PuzzleError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidShape { .. } | Self::IndexOutOfRange { .. } => ErrorSeverity::Validation,
            Self::CorruptGrid { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidShape { .. } => "PUZZLE_INVALID_SHAPE",
            Self::IndexOutOfRange { .. } => "PUZZLE_INDEX_OUT_OF_RANGE",
            Self::CorruptGrid { .. } => "PUZZLE_CORRUPT_GRID",
        }
    }
}
