//! Bishop move generation
//!
//! Bishops sweep the four diagonal rays until blocked.

use super::{sliding, BoardView};
use crate::position::Position;
use crate::types::{MoveMatrix, Piece};

const DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub(super) fn generate(view: &BoardView<'_>, piece: &Piece, from: Position, matrix: &mut MoveMatrix) {
    sliding::sweep(view, piece, from, &DIRECTIONS, matrix);
}
