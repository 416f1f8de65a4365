//! Sliding-tile enigma puzzle.
//!
//! An [`EnigmaPuzzle`] is an N×M grid of piece ids driven by a two-click
//! protocol: the first [`hit`](EnigmaPuzzle::hit) selects a cell, the second
//! swaps it with the previously selected one.
//!
//! # Invariants
//!
//! - The grid always holds every id in `[0, rows * cols)` exactly once.
//! - Cells are addressed by row-major linear index: `row = index / cols`,
//!   `col = index % cols`.
//! - [`is_solved`](EnigmaPuzzle::is_solved) walks the grid **column-major**.
//!   For grids wider and taller than one cell this differs from the row-major
//!   identity the puzzle is constructed with, so a fresh 2×2 puzzle is not solved.
mod error;
mod rng;

pub use error::PuzzleError;
pub use rng::{PuzzleRng, compute_seed, puzzle_rng};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Identifier of a single puzzle piece (its index in the solved image).
pub type PieceId = usize;

#[derive(Clone, Debug)]
pub struct EnigmaPuzzle {
    rows: usize,
    cols: usize,
    name: String,
    /// Row-major storage of the rows×cols grid.
    pieces: Vec<PieceId>,
    pending: Option<usize>,
    rng: PuzzleRng,
}

impl EnigmaPuzzle {
    /// Creates a puzzle in the identity arrangement (`pieces[r][c] = r * cols + c`).
    pub fn new(
        rows: usize,
        cols: usize,
        name: impl Into<String>,
        rng: PuzzleRng,
    ) -> Result<Self, PuzzleError> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::InvalidShape { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            name: name.into(),
            pieces: (0..rows * cols).collect(),
            pending: None,
            rng,
        })
    }

    /// Creates a puzzle whose shuffles are drawn from `StdRng::seed_from_u64(seed)`.
    pub fn with_seed(
        rows: usize,
        cols: usize,
        name: impl Into<String>,
        seed: u64,
    ) -> Result<Self, PuzzleError> {
        Self::new(rows, cols, name, PuzzleRng::seed_from_u64(seed))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of pieces (`rows * cols`).
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Index selected by the first click of a pair, if any.
    pub fn pending_selection(&self) -> Option<usize> {
        self.pending
    }

    /// Piece at `(row, col)`, or `None` outside the grid.
    pub fn piece(&self, row: usize, col: usize) -> Option<PieceId> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.pieces[row * self.cols + col])
    }

    /// Copy of the grid as `rows` vectors of `cols` pieces.
    ///
    /// The returned grid is detached: mutating it never affects the puzzle.
    pub fn pieces(&self) -> Vec<Vec<PieceId>> {
        self.pieces.chunks(self.cols).map(<[_]>::to_vec).collect()
    }

    /// Shuffles the pieces with the puzzle's own random source.
    pub fn shuffle_pieces(&mut self) {
        self.pieces.shuffle(&mut self.rng);
        debug_assert!(self.check_permutation().is_ok());
        tracing::debug!(puzzle = %self.name, "pieces shuffled");
    }

    /// Applies a uniform random permutation drawn from `rng` to the row-major grid.
    pub fn shuffle_pieces_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pieces.shuffle(rng);
        debug_assert!(self.check_permutation().is_ok());
        tracing::debug!(puzzle = %self.name, "pieces shuffled");
    }

    /// Exchanges the pieces at two linear indices.
    ///
    /// Symmetric and self-inverse: applying the same pair twice restores the grid.
    pub fn swap_pieces(&mut self, first: usize, second: usize) -> Result<(), PuzzleError> {
        self.check_index(first)?;
        self.check_index(second)?;
        self.pieces.swap(first, second);
        debug_assert!(self.check_permutation().is_ok());
        Ok(())
    }

    /// Feeds one click into the selection protocol.
    ///
    /// Returns `Ok(false)` when `index` becomes the pending selection and
    /// `Ok(true)` when it completes a pair and the swap was applied. An
    /// out-of-range index is rejected without touching the selection or the grid.
    pub fn hit(&mut self, index: usize) -> Result<bool, PuzzleError> {
        self.check_index(index)?;
        match self.pending.take() {
            None => {
                self.pending = Some(index);
                Ok(false)
            }
            Some(selected) => {
                self.swap_pieces(selected, index)?;
                tracing::trace!(puzzle = %self.name, selected, index, "pieces swapped");
                Ok(true)
            }
        }
    }

    /// True iff a column-major walk of the grid yields `0, 1, ..., rows * cols - 1`.
    pub fn is_solved(&self) -> bool {
        (0..self.cols)
            .flat_map(|col| (0..self.rows).map(move |row| (row, col)))
            .map(|(row, col)| self.pieces[row * self.cols + col])
            .eq(0..self.len())
    }

    /// Verifies the grid is still a permutation of `[0, rows * cols)`.
    pub fn check_permutation(&self) -> Result<(), PuzzleError> {
        let len = self.len();
        let mut seen = vec![false; len];
        for &piece in &self.pieces {
            match seen.get_mut(piece) {
                Some(slot) if !*slot => *slot = true,
                _ => {
                    return Err(PuzzleError::CorruptGrid {
                        name: self.name.clone(),
                        len,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), PuzzleError> {
        if index < self.len() {
            Ok(())
        } else {
            Err(PuzzleError::IndexOutOfRange {
                index,
                len: self.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorSeverity, GameError};

    fn puzzle(rows: usize, cols: usize) -> EnigmaPuzzle {
        EnigmaPuzzle::with_seed(rows, cols, "test", 11).unwrap()
    }

    fn sorted(puzzle: &EnigmaPuzzle) -> Vec<PieceId> {
        let mut flat: Vec<_> = puzzle.pieces().into_iter().flatten().collect();
        flat.sort_unstable();
        flat
    }

    #[test]
    fn starts_in_identity_arrangement() {
        let puzzle = puzzle(2, 3);
        assert_eq!(puzzle.pieces(), vec![vec![0, 1, 2], vec![3, 4, 5]]);
        assert_eq!(puzzle.piece(1, 2), Some(5));
        assert_eq!(puzzle.piece(2, 0), None);
        assert_eq!(puzzle.pending_selection(), None);
    }

    #[test]
    fn rejects_empty_shape() {
        let err = EnigmaPuzzle::with_seed(0, 3, "empty", 0).unwrap_err();
        assert_eq!(err, PuzzleError::InvalidShape { rows: 0, cols: 3 });
        assert!(EnigmaPuzzle::with_seed(3, 0, "empty", 0).is_err());
    }

    #[test]
    fn shuffle_and_swap_preserve_permutation() {
        for (rows, cols) in [(1, 1), (1, 5), (4, 1), (2, 2), (3, 3), (3, 5)] {
            let mut puzzle = puzzle(rows, cols);
            let expected: Vec<_> = (0..rows * cols).collect();
            for round in 0..10 {
                puzzle.shuffle_pieces();
                let last = puzzle.len() - 1;
                puzzle.swap_pieces(round % puzzle.len(), last).unwrap();
                assert_eq!(sorted(&puzzle), expected);
                assert!(puzzle.check_permutation().is_ok());
            }
        }
    }

    #[test]
    fn same_seed_shuffles_identically() {
        let mut a = puzzle(3, 3);
        let mut b = puzzle(3, 3);
        a.shuffle_pieces();
        b.shuffle_pieces();
        assert_eq!(a.pieces(), b.pieces());
    }

    #[test]
    fn shuffle_with_external_rng() {
        let mut a = puzzle(4, 4);
        let mut b = puzzle(4, 4);
        a.shuffle_pieces_with(&mut PuzzleRng::seed_from_u64(99));
        b.shuffle_pieces_with(&mut PuzzleRng::seed_from_u64(99));
        assert_eq!(a.pieces(), b.pieces());
    }

    #[test]
    fn single_row_or_column_is_solved_when_fresh() {
        assert!(puzzle(1, 4).is_solved());
        assert!(puzzle(4, 1).is_solved());
        assert!(puzzle(1, 1).is_solved());
    }

    #[test]
    fn fresh_square_grid_is_not_solved() {
        // Column-major walk of {{0,1},{2,3}} is 0,2,1,3.
        assert!(!puzzle(2, 2).is_solved());
    }

    #[test]
    fn column_major_identity_is_solved() {
        let mut puzzle = puzzle(2, 2);
        puzzle.swap_pieces(1, 2).unwrap();
        assert_eq!(puzzle.pieces(), vec![vec![0, 2], vec![1, 3]]);
        assert!(puzzle.is_solved());

        let mut wide = self::puzzle(2, 3);
        // Target grid {{0,2,4},{1,3,5}}.
        wide.swap_pieces(1, 3).unwrap(); // {{0,3,2},{1,4,5}}
        wide.swap_pieces(1, 2).unwrap(); // {{0,2,3},{1,4,5}}
        wide.swap_pieces(2, 4).unwrap(); // {{0,2,4},{1,3,5}}
        assert!(wide.is_solved());
    }

    #[test]
    fn hit_protocol_selects_then_swaps() {
        let mut puzzle = puzzle(2, 2);
        let before = puzzle.pieces();

        assert!(!puzzle.hit(0).unwrap());
        assert_eq!(puzzle.pieces(), before);
        assert_eq!(puzzle.pending_selection(), Some(0));

        assert!(puzzle.hit(3).unwrap());
        assert_eq!(puzzle.pieces(), vec![vec![3, 1], vec![2, 0]]);
        assert_eq!(puzzle.pending_selection(), None);

        // Third hit starts a new cycle.
        assert!(!puzzle.hit(1).unwrap());
        assert_eq!(puzzle.pending_selection(), Some(1));
    }

    #[test]
    fn hit_rejects_out_of_range_without_side_effects() {
        let mut puzzle = puzzle(2, 2);
        let err = puzzle.hit(4).unwrap_err();
        assert_eq!(err, PuzzleError::IndexOutOfRange { index: 4, len: 4 });
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert_eq!(puzzle.pending_selection(), None);

        puzzle.hit(2).unwrap();
        assert!(puzzle.hit(9).is_err());
        assert_eq!(puzzle.pending_selection(), Some(2));
        assert_eq!(puzzle.pieces(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn swap_is_an_involution() {
        let mut puzzle = puzzle(3, 3);
        puzzle.shuffle_pieces();
        let before = puzzle.pieces();
        puzzle.swap_pieces(2, 7).unwrap();
        assert_ne!(puzzle.pieces(), before);
        puzzle.swap_pieces(2, 7).unwrap();
        assert_eq!(puzzle.pieces(), before);
    }

    #[test]
    fn swap_rejects_out_of_range() {
        let mut puzzle = puzzle(2, 2);
        assert!(puzzle.swap_pieces(0, 4).is_err());
        assert!(puzzle.swap_pieces(7, 0).is_err());
        assert_eq!(puzzle.pieces(), vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn pieces_returns_a_detached_copy() {
        let puzzle = puzzle(2, 2);
        let mut copy = puzzle.pieces();
        copy[0][0] = 42;
        assert_eq!(puzzle.piece(0, 0), Some(0));
    }

    #[test]
    fn corrupt_grid_is_fatal() {
        let mut puzzle = puzzle(2, 2);
        puzzle.pieces[3] = 0;
        let err = puzzle.check_permutation().unwrap_err();
        assert_eq!(err.severity(), ErrorSeverity::Fatal);
        assert_eq!(err.error_code(), "PUZZLE_CORRUPT_GRID");
    }
}
