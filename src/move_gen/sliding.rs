//! Sliding piece move generation
//!
//! Common ray-sweep logic for bishops, rooks and queens. Each direction is
//! walked square by square until blocked by the board edge, a friendly
//! piece (stop, exclude) or an enemy piece (stop, include as capture).

use super::BoardView;
use crate::position::Position;
use crate::types::{MoveMatrix, Piece};

/// Sweep each direction from `from`, marking reachable squares
pub(super) fn sweep(
    view: &BoardView<'_>,
    piece: &Piece,
    from: Position,
    directions: &[(i8, i8)],
    matrix: &mut MoveMatrix,
) {
    for &(dr, dc) in directions {
        let mut position = from.offset(dr, dc);
        while position.in_bounds() {
            match view.color_at(position) {
                None => matrix.mark(position),
                Some(color) if color != piece.color => {
                    matrix.mark(position);
                    break;
                }
                Some(_) => break,
            }
            position = position.offset(dr, dc);
        }
    }
}

/// Mark each single-step offset that is empty or enemy-occupied
///
/// Shared by knights and kings, whose targets are fixed offsets rather
/// than rays.
pub(super) fn step(
    view: &BoardView<'_>,
    piece: &Piece,
    from: Position,
    offsets: &[(i8, i8)],
    matrix: &mut MoveMatrix,
) {
    for &(dr, dc) in offsets {
        let position = from.offset(dr, dc);
        if position.in_bounds() && view.color_at(position) != Some(piece.color) {
            matrix.mark(position);
        }
    }
}
