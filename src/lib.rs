//! # chess_match - Deterministic Chess Rules Engine
//!
//! Authoritative chess semantics for any front end: given a board state
//! and a proposed move, the engine determines legality, applies the move
//! (including castling, en passant and promotion) and detects check and
//! checkmate. There is no AI, no notation parsing and no clock — only
//! rule enforcement.
//!
//! ## Architecture
//!
//! - [`board`] - bounds-checked 8x8 grid mapping coordinates to pieces
//! - move generation - per-kind possibility matrices, ignoring self-check
//! - [`ChessMatch`] - the match state machine: turn management, move
//!   execution with atomic rollback, special moves, check and checkmate
//!
//! Check handling is built on simulated moves: the engine applies a
//! hypothetical move, tests the king's square for attack, and rolls the
//! move back through an explicit inverse record. The same protocol drives
//! both self-check rejection and the exhaustive checkmate search.
//!
//! ## Usage
//!
//! ```rust
//! use chess_match::{ChessMatch, ChessPosition, PieceKind};
//!
//! let mut game = ChessMatch::new();
//! let e2: ChessPosition = "e2".parse().unwrap();
//! let e4: ChessPosition = "e4".parse().unwrap();
//!
//! let captured = game.perform_move(e2, e4).unwrap();
//! assert!(captured.is_none());
//! assert_eq!(game.turn(), 2);
//! ```
//!
//! ## Concurrency
//!
//! The engine is single-threaded and synchronous: one match instance, one
//! caller, no interior suspension points. Wrap a match in external
//! serialization for networked deployments; the simulate/rollback
//! protocol is not safe under interleaved mutation.

pub mod board;
pub mod error;
pub mod position;
pub mod types;

mod game;
mod move_gen;

pub use board::{Board, BOARD_SIZE};
pub use error::{BoardError, MatchError, MatchResult};
pub use game::ChessMatch;
pub use position::{ChessPosition, Position};
pub use types::{Color, MoveMatrix, Piece, PieceId, PieceKind};
