//! Queen move generation
//!
//! Queens combine the rook and bishop rays: all eight directions.

use super::{sliding, BoardView};
use crate::position::Position;
use crate::types::{MoveMatrix, Piece};

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(super) fn generate(view: &BoardView<'_>, piece: &Piece, from: Position, matrix: &mut MoveMatrix) {
    sliding::sweep(view, piece, from, &DIRECTIONS, matrix);
}
