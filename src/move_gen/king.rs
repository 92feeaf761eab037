//! King move generation
//!
//! Kings step to the 8 adjacent squares under the usual occupancy rule.
//! In move mode the two castling candidates are added when the strict
//! preconditions hold:
//!
//! - the king stands on its home file (relevant for custom setups)
//! - neither the king nor the corresponding corner rook has ever moved
//! - every square between them is empty
//! - the king is not in check, and neither the square it transits nor the
//!   one it lands on is attacked
//!
//! Castling shows up in the matrix as a plain two-column king move; the
//! match engine derives the rook relocation from that displacement.

use super::{attack, BoardView, GenMode};
use crate::position::Position;
use crate::types::{MoveMatrix, Piece, PieceKind};

const OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(super) fn generate(
    view: &BoardView<'_>,
    piece: &Piece,
    from: Position,
    mode: GenMode,
    matrix: &mut MoveMatrix,
) {
    super::sliding::step(view, piece, from, &OFFSETS, matrix);

    // Candidates only exist for a king on its home file; with a custom
    // setup an unmoved king elsewhere must not castle, and anchoring on
    // col 4 keeps both candidates exactly two columns from the source.
    if mode == GenMode::Moves && piece.move_count == 0 && from.col == 4 {
        let enemy = piece.color.opponent();
        if attack::is_attacked(view, enemy, from) {
            return;
        }

        // Kingside: rook on the h-file corner, f and g files clear
        if can_castle(view, piece, from, Position::new(from.row, 7), &[5, 6], &[5, 6]) {
            matrix.mark(Position::new(from.row, 6));
        }

        // Queenside: rook on the a-file corner, b through d files clear,
        // only the king's transit (d) and destination (c) need to be safe
        if can_castle(view, piece, from, Position::new(from.row, 0), &[1, 2, 3], &[2, 3]) {
            matrix.mark(Position::new(from.row, 2));
        }
    }
}

fn can_castle(
    view: &BoardView<'_>,
    king: &Piece,
    king_from: Position,
    rook_square: Position,
    empty_cols: &[i8],
    safe_cols: &[i8],
) -> bool {
    let Some(rook_id) = view.board.get(rook_square) else {
        return false;
    };
    let rook = view.piece(rook_id);
    if rook.kind != PieceKind::Rook || rook.color != king.color || rook.has_moved() {
        return false;
    }

    if !empty_cols
        .iter()
        .all(|&col| view.is_empty(Position::new(king_from.row, col)))
    {
        return false;
    }

    let enemy = king.color.opponent();
    safe_cols
        .iter()
        .all(|&col| !attack::is_attacked(view, enemy, Position::new(king_from.row, col)))
}
