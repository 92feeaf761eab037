//! Check and checkmate evaluation
//!
//! Check is a direct attack query against the defending king's square.
//! Checkmate is the exhaustive version: simulate every marked move of
//! every piece of the checked side through the make/undo protocol and see
//! whether any of them clears the check. O(pieces x squares) per
//! invocation, which the fixed 8x8 board keeps cheap.

use super::ChessMatch;
use crate::move_gen::{self, attack, GenMode};
use crate::position::Position;
use crate::types::{Color, PieceId, PieceKind};
use tracing::debug;

impl ChessMatch {
    /// The defending king's square
    ///
    /// A color with no king on the board is a broken internal invariant,
    /// not a user-facing condition, so this panics rather than erroring.
    fn king_of(&self, color: Color) -> Position {
        self.on_board
            .iter()
            .map(|&id| &self.pieces[id.0])
            .find(|piece| piece.kind == PieceKind::King && piece.color == color)
            .and_then(|piece| piece.position)
            .unwrap_or_else(|| panic!("internal error: no {color} king on the board"))
    }

    /// True if any opposing piece attacks the king of `color`
    pub(crate) fn test_check(&self, color: Color) -> bool {
        let king = self.king_of(color);
        attack::is_attacked(&self.view(), color.opponent(), king)
    }

    /// True if `color` is in check and no move of theirs resolves it
    pub(crate) fn test_checkmate(&mut self, color: Color) -> bool {
        if !self.test_check(color) {
            return false;
        }

        let defenders: Vec<PieceId> = self
            .on_board
            .iter()
            .copied()
            .filter(|&id| self.pieces[id.0].color == color)
            .collect();

        for id in defenders {
            let matrix = move_gen::possible_moves(&self.view(), id, GenMode::Moves);
            for target in matrix.targets() {
                let source = self.pieces[id.0]
                    .position
                    .expect("on-board piece has a position");
                let applied = self.make_move(id, source, target);
                let still_in_check = self.test_check(color);
                self.undo_move(applied);
                if !still_in_check {
                    return false;
                }
            }
        }
        true
    }

    /// Finish a committed move: evaluate the opponent's status, advance
    /// the turn unless the match ended, and update the en-passant state
    ///
    /// `vulnerable` is the pawn that just advanced two ranks, if the move
    /// was one; every other move clears the vulnerability.
    pub(crate) fn conclude_turn(&mut self, vulnerable: Option<PieceId>) {
        let opponent = self.current_player.opponent();
        self.check = self.test_check(opponent);

        if self.check && self.test_checkmate(opponent) {
            // The turn freezes: the current player stays the winner
            self.checkmate = true;
            debug!("[STATUS] checkmate, {} wins", self.current_player);
        } else {
            if self.check {
                debug!("[STATUS] {opponent} is in check");
            }
            self.turn += 1;
            self.current_player = opponent;
        }

        self.en_passant_vulnerable = vulnerable;
    }
}
