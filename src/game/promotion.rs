//! Pawn promotion protocol
//!
//! A pawn reaching the far rank leaves the match in a pending-promotion
//! state: the move is committed, but check evaluation and the turn are on
//! hold until the caller chooses the replacement kind. Until then every
//! other operation fails with `PromotionPending`.

use super::ChessMatch;
use crate::error::{MatchError, MatchResult};
use crate::types::{Piece, PieceKind};
use tracing::debug;

impl ChessMatch {
    /// Replace the pending promotion pawn with the chosen kind
    ///
    /// `kind` must be one of Bishop, Knight, Rook or Queen. The new piece
    /// takes the pawn's square and color, after which the move concludes
    /// normally: the opponent's check and checkmate status is evaluated
    /// with the promoted piece on the board, and the turn advances.
    ///
    /// Returns the promoted piece.
    pub fn replace_promotion(&mut self, kind: PieceKind) -> MatchResult<Piece> {
        let id = self
            .pending_promotion
            .ok_or(MatchError::NoPendingPromotion)?;
        if !kind.is_promotion_kind() {
            return Err(MatchError::InvalidPromotionKind(kind));
        }

        self.pieces[id.0].kind = kind;
        self.pending_promotion = None;

        let promoted = self.pieces[id.0];
        debug!("[PROMOTION] {} pawn promoted to {}", promoted.color, kind);

        // A promotion move is never a two-rank pawn advance, so it always
        // clears the en-passant vulnerability
        self.conclude_turn(None);

        Ok(promoted)
    }
}
