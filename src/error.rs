//! Error types for the rules engine
//!
//! Provides custom error types for board storage and match operations.
//! Every user-facing error is locally recoverable and leaves the match
//! state unchanged; `SelfCheck` is raised only after the attempted move
//! has been rolled back.

use crate::types::PieceKind;
use thiserror::Error;

/// Errors raised by the bounds-checked board grid
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate outside the 8x8 grid
    #[error("position ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// Placement onto a square that already holds a piece
    #[error("there is already a piece on ({row}, {col})")]
    Occupied { row: i8, col: i8 },
}

/// Errors that can occur while driving a chess match
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// Source square is empty
    #[error("there is no piece on the source square")]
    NoPieceAtSource,

    /// Source piece belongs to the opponent
    #[error("the chosen piece belongs to the opponent")]
    NotYourPiece,

    /// Source piece has no reachable square at all
    #[error("there is no possible move for the chosen piece")]
    NoLegalMoves,

    /// Target square is not in the piece's possibility matrix
    #[error("the chosen piece cannot move to the target square")]
    IllegalTarget,

    /// Move would leave the mover's own king in check (state already rolled back)
    #[error("you cannot put your own king in check")]
    SelfCheck,

    /// Promotion requested while no pawn is waiting on the back rank
    #[error("there is no pawn waiting for promotion")]
    NoPendingPromotion,

    /// Promotion requested with a kind outside {Bishop, Knight, Rook, Queen}
    #[error("{0} is not a valid kind for promotion")]
    InvalidPromotionKind(PieceKind),

    /// A pending promotion must be resolved before the match can proceed
    #[error("a pawn promotion must be resolved before the next move")]
    PromotionPending,

    /// Match already ended in checkmate
    #[error("the match is already over")]
    GameOver,

    /// Algebraic coordinate outside a1..h8
    #[error("invalid position: column must be 'a'-'h' and row 1-8")]
    InvalidPosition,

    /// Board storage error
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type alias for match operations
pub type MatchResult<T> = Result<T, MatchError>;
