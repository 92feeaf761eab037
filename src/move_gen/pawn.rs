//! Pawn move generation
//!
//! Pawns are the only pieces whose moves and attacks differ:
//!
//! - one square forward if the destination is empty
//! - two squares forward only on the pawn's first move, with both the
//!   intervening and destination squares empty
//! - diagonal capture onto an enemy-occupied square
//! - en passant: a diagonal move onto an empty square when the adjacent
//!   square (same row as the pawn, target column) holds the currently
//!   en-passant-vulnerable enemy pawn
//!
//! In attack mode only the two diagonals are marked, occupied or not:
//! a pawn covers those squares even when nothing stands there, which is
//! what the castling transit rule and check detection need. Forward
//! advances are never attacks.

use super::{BoardView, GenMode};
use crate::position::Position;
use crate::types::{Color, MoveMatrix, Piece, PieceKind};

/// Forward direction in internal rows: White advances toward row 0
fn direction(color: Color) -> i8 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

pub(super) fn generate(
    view: &BoardView<'_>,
    piece: &Piece,
    from: Position,
    mode: GenMode,
    matrix: &mut MoveMatrix,
) {
    let dir = direction(piece.color);

    if mode == GenMode::Attacks {
        for dc in [-1, 1] {
            let target = from.offset(dir, dc);
            if target.in_bounds() {
                matrix.mark(target);
            }
        }
        return;
    }

    // Single advance
    let ahead = from.offset(dir, 0);
    if ahead.in_bounds() && view.is_empty(ahead) {
        matrix.mark(ahead);

        // Double advance, first move only
        let two_ahead = from.offset(2 * dir, 0);
        if piece.move_count == 0 && two_ahead.in_bounds() && view.is_empty(two_ahead) {
            matrix.mark(two_ahead);
        }
    }

    // Diagonal captures, including en passant
    for dc in [-1, 1] {
        let target = from.offset(dir, dc);
        if !target.in_bounds() {
            continue;
        }
        match view.color_at(target) {
            Some(color) if color != piece.color => matrix.mark(target),
            Some(_) => {}
            None => {
                if is_en_passant_capture(view, piece, from, target) {
                    matrix.mark(target);
                }
            }
        }
    }
}

/// True if moving diagonally onto the empty `target` captures the
/// en-passant-vulnerable pawn standing beside the mover
fn is_en_passant_capture(
    view: &BoardView<'_>,
    piece: &Piece,
    from: Position,
    target: Position,
) -> bool {
    let Some(vulnerable) = view.en_passant_vulnerable else {
        return false;
    };
    let beside = Position::new(from.row, target.col);
    match view.board.get(beside) {
        Some(id) => {
            id == vulnerable
                && view.piece(id).color != piece.color
                && view.piece(id).kind == PieceKind::Pawn
        }
        None => false,
    }
}
