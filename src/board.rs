//! Bounds-checked 8x8 board grid
//!
//! The grid is plain storage: it maps coordinates to [`PieceId`]
//! placements and knows nothing about chess rules. The match engine is its
//! sole writer and treats it as exclusively owned storage.
//!
//! Public operations (`place`, `remove`, `occupant`, `has_piece`) are
//! bounds checked and fail with [`BoardError::OutOfBounds`] for
//! coordinates outside the grid. The crate-internal fast path (`get`,
//! `set`, `take`) skips the check; the engine only calls it with
//! coordinates already validated.

use crate::error::BoardError;
use crate::position::Position;
use crate::types::PieceId;

/// Board edge length
pub const BOARD_SIZE: usize = 8;

/// Fixed-size 2D cell store holding piece placements
#[derive(Debug, Clone, Default)]
pub struct Board {
    squares: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub(crate) fn new() -> Self {
        Board::default()
    }

    fn check_bounds(position: Position) -> Result<(), BoardError> {
        if position.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: position.row,
                col: position.col,
            })
        }
    }

    /// Place a piece on an empty square
    pub fn place(&mut self, id: PieceId, position: Position) -> Result<(), BoardError> {
        Self::check_bounds(position)?;
        if self.get(position).is_some() {
            return Err(BoardError::Occupied {
                row: position.row,
                col: position.col,
            });
        }
        self.set(position, id);
        Ok(())
    }

    /// Remove and return whatever occupies the square
    pub fn remove(&mut self, position: Position) -> Result<Option<PieceId>, BoardError> {
        Self::check_bounds(position)?;
        Ok(self.take(position))
    }

    /// The piece occupying the square, if any
    pub fn occupant(&self, position: Position) -> Result<Option<PieceId>, BoardError> {
        Self::check_bounds(position)?;
        Ok(self.get(position))
    }

    /// True if the square holds a piece
    pub fn has_piece(&self, position: Position) -> Result<bool, BoardError> {
        Ok(self.occupant(position)?.is_some())
    }

    /// Unchecked lookup; `position` must be in bounds
    pub(crate) fn get(&self, position: Position) -> Option<PieceId> {
        debug_assert!(position.in_bounds());
        self.squares[position.row as usize][position.col as usize]
    }

    /// Unchecked placement; `position` must be in bounds
    pub(crate) fn set(&mut self, position: Position, id: PieceId) {
        debug_assert!(position.in_bounds());
        self.squares[position.row as usize][position.col as usize] = Some(id);
    }

    /// Unchecked removal; `position` must be in bounds
    pub(crate) fn take(&mut self, position: Position) -> Option<PieceId> {
        debug_assert!(position.in_bounds());
        self.squares[position.row as usize][position.col as usize].take()
    }
}
