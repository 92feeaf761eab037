//! Per-piece move generation
//!
//! For each piece kind this module computes the possibility matrix: an 8x8
//! boolean grid of squares the piece could occupy next, ignoring whether
//! the move would leave its own king in check. Self-check filtering is the
//! match engine's job (simulate, test, roll back).
//!
//! Generation runs in one of two modes:
//!
//! - [`GenMode::Moves`] — full move generation, including pawn advances
//!   and castling candidates. This is what callers see.
//! - [`GenMode::Attacks`] — only the squares the piece attacks: pawn
//!   diagonals are marked whether or not an enemy stands there, pawn
//!   advances are skipped, and castling is never generated. Used for check
//!   detection and for the castling transit-square rule without recursing
//!   into castling itself.
//!
//! # Module Structure
//!
//! - `pawn` - advances, diagonal captures, en passant
//! - `knight` - the 8 fixed L-shaped offsets
//! - `bishop` / `rook` / `queen` - directional ray sweeps via `sliding`
//! - `king` - adjacent squares plus castling candidates
//! - `attack` - square-attack queries over a whole side

mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub(crate) mod attack;


use crate::board::Board;
use crate::position::Position;
use crate::types::{Color, MoveMatrix, Piece, PieceId, PieceKind};

/// What the generator is being asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GenMode {
    Moves,
    Attacks,
}

/// Read-only view of the state move generation needs
///
/// Move generation takes the board as an explicit parameter; pieces do not
/// carry a reference back to it.
pub(crate) struct BoardView<'a> {
    pub board: &'a Board,
    pub pieces: &'a [Piece],
    pub en_passant_vulnerable: Option<PieceId>,
}

impl BoardView<'_> {
    pub(crate) fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    /// Color of the piece on a square, `None` if empty
    ///
    /// `position` must be in bounds.
    pub(crate) fn color_at(&self, position: Position) -> Option<Color> {
        self.board.get(position).map(|id| self.piece(id).color)
    }

    pub(crate) fn is_empty(&self, position: Position) -> bool {
        self.board.get(position).is_none()
    }
}

/// Compute the possibility matrix for a piece
///
/// The piece must be on the board; a captured piece yields an empty
/// matrix (the caller validates the source square first).
pub(crate) fn possible_moves(view: &BoardView<'_>, id: PieceId, mode: GenMode) -> MoveMatrix {
    let piece = view.piece(id);
    let mut matrix = MoveMatrix::default();
    let Some(from) = piece.position else {
        return matrix;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate(view, piece, from, mode, &mut matrix),
        PieceKind::Rook => rook::generate(view, piece, from, &mut matrix),
        PieceKind::Knight => knight::generate(view, piece, from, &mut matrix),
        PieceKind::Bishop => bishop::generate(view, piece, from, &mut matrix),
        PieceKind::Queen => queen::generate(view, piece, from, &mut matrix),
        PieceKind::King => king::generate(view, piece, from, mode, &mut matrix),
    }

    matrix
}
