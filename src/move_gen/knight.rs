//! Knight move generation
//!
//! Knights jump to the 8 fixed L-shaped offsets; a target is reachable if
//! it is empty or enemy-occupied. Nothing blocks a knight.

use super::{sliding, BoardView};
use crate::position::Position;
use crate::types::{MoveMatrix, Piece};

const OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(super) fn generate(view: &BoardView<'_>, piece: &Piece, from: Position, matrix: &mut MoveMatrix) {
    sliding::step(view, piece, from, &OFFSETS, matrix);
}
