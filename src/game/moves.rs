//! Move execution protocol
//!
//! A move is applied through an explicit [`AppliedMove`] record: source,
//! target, mover, the captured piece with the square it was taken from,
//! and any special-move metadata. [`undo_move`] is the exact inverse of
//! [`make_move`], restoring board occupancy, piece positions, move counts
//! and captured-set membership bit for bit. The same make/undo pair drives
//! both the self-check test after a real move and the exhaustive
//! simulated-move search in checkmate detection.
//!
//! [`make_move`]: ChessMatch::make_move
//! [`undo_move`]: ChessMatch::undo_move

use super::ChessMatch;
use crate::error::{MatchError, MatchResult};
use crate::position::{ChessPosition, Position};
use crate::types::{Color, Piece, PieceId, PieceKind};
use tracing::debug;

/// Side effects of a move that touch squares other than source and target
#[derive(Debug, Clone, Copy)]
pub(crate) enum SpecialMove {
    /// The rook leg of a castling move
    Castling {
        rook: PieceId,
        rook_from: Position,
        rook_to: Position,
    },
    /// Capture of the en-passant-vulnerable pawn beside the destination
    EnPassant,
}

/// Everything needed to undo one applied move
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppliedMove {
    pub source: Position,
    pub target: Position,
    pub mover: PieceId,
    /// Captured piece and the square it was removed from (for en passant
    /// that square is not the move's target)
    pub captured: Option<(PieceId, Position)>,
    pub special: Option<SpecialMove>,
}

impl ChessMatch {
    /// Attempt a move for the current player
    ///
    /// Runs the full protocol: validate the source piece and target
    /// square, apply the move (with castling and en passant side effects),
    /// roll back atomically if the mover's own king would be left in
    /// check, then evaluate promotion, opponent check, checkmate and turn
    /// advancement.
    ///
    /// If the move leaves a pawn on the far rank, the match enters the
    /// pending-promotion state and check/turn evaluation is deferred until
    /// [`replace_promotion`] supplies the new piece kind.
    ///
    /// Returns the captured piece, or `None` if the move captured nothing.
    /// On any error the match state is unchanged.
    ///
    /// [`replace_promotion`]: ChessMatch::replace_promotion
    pub fn perform_move(
        &mut self,
        source: ChessPosition,
        target: ChessPosition,
    ) -> MatchResult<Option<Piece>> {
        if self.checkmate {
            return Err(MatchError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(MatchError::PromotionPending);
        }

        let source_position = source.to_position();
        let target_position = target.to_position();
        let (mover, matrix) = self.validate_source(source_position)?;
        if !matrix.at(target_position) {
            return Err(MatchError::IllegalTarget);
        }

        let applied = self.make_move(mover, source_position, target_position);
        if self.test_check(self.current_player) {
            self.undo_move(applied);
            return Err(MatchError::SelfCheck);
        }

        let moved = self.pieces[mover.0];
        let captured = applied.captured.map(|(id, _)| self.pieces[id.0]);
        debug!(
            "[MOVE] {} {} {} -> {}",
            moved.color, moved.kind, source, target
        );

        let promotion_row = match moved.color {
            Color::White => 0,
            Color::Black => 7,
        };
        if moved.kind == PieceKind::Pawn && target_position.row == promotion_row {
            self.pending_promotion = Some(mover);
            debug!("[PROMOTION] {} pawn on {} awaits a choice", moved.color, target);
            return Ok(captured);
        }

        // En passant vulnerability reflects the move just made, before the
        // turn flips to the opponent
        let double_advance = moved.kind == PieceKind::Pawn
            && (target_position.row - source_position.row).abs() == 2;
        self.conclude_turn(double_advance.then_some(mover));

        Ok(captured)
    }

    /// Apply a move and return the record needed to undo it
    ///
    /// The target must come from the mover's possibility matrix; this is
    /// where castling and en passant side effects are carried out.
    pub(crate) fn make_move(
        &mut self,
        mover: PieceId,
        source: Position,
        target: Position,
    ) -> AppliedMove {
        let mut captured = self.board.take(target).map(|id| (id, target));
        self.board.take(source);
        self.board.set(target, mover);
        self.pieces[mover.0].position = Some(target);
        self.pieces[mover.0].move_count += 1;

        if let Some((id, _)) = captured {
            self.capture_piece(id);
        }

        let mut special = None;
        let moved = self.pieces[mover.0];

        // Castling shows up as the king shifting two columns; the rook
        // legs are fixed offsets from the king's source square
        if moved.kind == PieceKind::King && (target.col - source.col).abs() == 2 {
            let (rook_from, rook_to) = if target.col > source.col {
                (Position::new(source.row, 7), Position::new(source.row, 5))
            } else {
                (Position::new(source.row, 0), Position::new(source.row, 3))
            };
            if let Some(rook) = self.board.take(rook_from) {
                self.board.set(rook_to, rook);
                self.pieces[rook.0].position = Some(rook_to);
                self.pieces[rook.0].move_count += 1;
                special = Some(SpecialMove::Castling {
                    rook,
                    rook_from,
                    rook_to,
                });
            }
        }

        // A pawn moving diagonally onto an empty square is en passant: the
        // captured pawn stands beside the mover, not on the target
        if moved.kind == PieceKind::Pawn && source.col != target.col && captured.is_none() {
            let beside = Position::new(source.row, target.col);
            if let Some(pawn) = self.board.take(beside) {
                self.capture_piece(pawn);
                captured = Some((pawn, beside));
                special = Some(SpecialMove::EnPassant);
            }
        }

        AppliedMove {
            source,
            target,
            mover,
            captured,
            special,
        }
    }

    /// Exact inverse of [`make_move`]
    ///
    /// [`make_move`]: ChessMatch::make_move
    pub(crate) fn undo_move(&mut self, applied: AppliedMove) {
        if let Some(SpecialMove::Castling {
            rook,
            rook_from,
            rook_to,
        }) = applied.special
        {
            self.board.take(rook_to);
            self.board.set(rook_from, rook);
            self.pieces[rook.0].position = Some(rook_from);
            self.pieces[rook.0].move_count -= 1;
        }

        self.board.take(applied.target);
        self.board.set(applied.source, applied.mover);
        self.pieces[applied.mover.0].position = Some(applied.source);
        self.pieces[applied.mover.0].move_count -= 1;

        if let Some((id, square)) = applied.captured {
            self.board.set(square, id);
            self.restore_piece(id, square);
        }
    }
}
