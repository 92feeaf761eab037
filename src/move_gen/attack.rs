//! Square-attack queries
//!
//! Answers "does any piece of this color attack this square?" by scanning
//! the side's on-board pieces and testing their attack matrices. Attack
//! generation never includes castling, so the castling transit rule can
//! call in here without recursing.
//!
//! Exhaustive scanning is O(pieces x squares) but the board is fixed at
//! 8x8 with at most 32 pieces, which keeps the worst case trivially small.

use super::{possible_moves, BoardView, GenMode};
use crate::position::Position;
use crate::types::{Color, PieceId};

/// True if any on-board piece of color `by` attacks `square`
pub(crate) fn is_attacked(view: &BoardView<'_>, by: Color, square: Position) -> bool {
    view.pieces
        .iter()
        .enumerate()
        .filter(|(_, piece)| piece.color == by && piece.position.is_some())
        .any(|(index, _)| possible_moves(view, PieceId(index), GenMode::Attacks).at(square))
}
