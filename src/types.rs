//! Core types for the rules engine
//!
//! The piece model is a closed set of kinds dispatched by exhaustive
//! `match` rather than trait objects: the set is fixed and small, so the
//! compiler can verify that every kind is handled everywhere.
//!
//! The match engine owns every [`Piece`] in an arena indexed by
//! [`PieceId`]; the board grid stores only ids. Pieces never hold a
//! reference back to the board — move generation takes the board state as
//! an explicit parameter instead.

use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// The closed set of chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// True for the kinds a pawn may promote into
    pub fn is_promotion_kind(self) -> bool {
        matches!(
            self,
            PieceKind::Bishop | PieceKind::Knight | PieceKind::Rook | PieceKind::Queen
        )
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Rook => "Rook",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        write!(f, "{name}")
    }
}

/// Handle into the match-owned piece arena
///
/// Ids are stable for the lifetime of a match; capture and promotion never
/// invalidate them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PieceId(pub(crate) usize);

/// A chess piece owned by the match engine
///
/// `position` is `None` while the piece is captured. `move_count` is
/// incremented on every completed move and decremented on undo; castling
/// and the pawn double-advance both key off it being zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Option<Position>,
    pub move_count: u32,
}

impl Piece {
    pub(crate) fn new(kind: PieceKind, color: Color, position: Position) -> Self {
        Piece {
            kind,
            color,
            position: Some(position),
            move_count: 0,
        }
    }

    /// True once the piece has completed at least one move
    pub fn has_moved(&self) -> bool {
        self.move_count > 0
    }
}

/// Possibility matrix: the squares a piece could occupy next
///
/// An 8x8 boolean grid produced by the move generator, ignoring whether
/// the move would leave the mover's own king in check. Self-check is
/// filtered later by the match engine's simulate-and-rollback step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MoveMatrix([[bool; 8]; 8]);

impl MoveMatrix {
    /// Mark a square as reachable
    pub(crate) fn mark(&mut self, position: Position) {
        debug_assert!(position.in_bounds());
        self.0[position.row as usize][position.col as usize] = true;
    }

    /// True if the piece can reach the given square
    pub fn at(&self, position: Position) -> bool {
        position.in_bounds() && self.0[position.row as usize][position.col as usize]
    }

    /// True if the piece can reach any square at all
    pub fn any(&self) -> bool {
        self.0.iter().any(|row| row.iter().any(|&cell| cell))
    }

    /// Iterate over every reachable square
    pub fn targets(&self) -> impl Iterator<Item = Position> + '_ {
        self.0.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|&(_, &cell)| cell)
                .map(move |(col, _)| Position::new(row as i8, col as i8))
        })
    }
}
