//! Match engine
//!
//! [`ChessMatch`] owns the whole game: the board grid, every piece, the
//! turn state and the special-move bookkeeping. It is the sole writer of
//! piece positions and board occupancy; callers drive it through a small
//! synchronous API (`possible_moves`, `perform_move`, `replace_promotion`
//! and read accessors) and never mutate state directly.
//!
//! Pieces live in an arena (`Vec<Piece>` indexed by [`PieceId`]) and are
//! tracked by two disjoint id sets, on-board and captured. A single
//! transfer operation moves membership between them, so a piece is in
//! exactly one set at any time.
//!
//! # Module Structure
//!
//! - `moves` - the move execution protocol: validate, apply, roll back
//! - `status` - check and checkmate evaluation
//! - `promotion` - the pending-promotion protocol

mod moves;
mod promotion;
mod status;

#[cfg(test)]
mod tests;

use crate::board::{Board, BOARD_SIZE};
use crate::error::{BoardError, MatchError, MatchResult};
use crate::move_gen::{self, BoardView, GenMode};
use crate::position::{ChessPosition, Position};
use crate::types::{Color, MoveMatrix, Piece, PieceId, PieceKind};

/// State machine for one chess match
#[derive(Debug, Clone)]
pub struct ChessMatch {
    board: Board,
    /// Arena owning every piece ever created in this match
    pieces: Vec<Piece>,
    on_board: Vec<PieceId>,
    captured: Vec<PieceId>,
    turn: u32,
    current_player: Color,
    check: bool,
    checkmate: bool,
    en_passant_vulnerable: Option<PieceId>,
    pending_promotion: Option<PieceId>,
}

impl ChessMatch {
    /// New match with the standard 32-piece initial setup
    pub fn new() -> Self {
        let mut chess_match = ChessMatch::empty();
        chess_match.initial_setup();
        chess_match
    }

    /// New match with an empty board
    ///
    /// Combine with [`place_new_piece`] to build custom positions, puzzles
    /// or test scenarios. The match is not playable until both kings are
    /// placed.
    ///
    /// [`place_new_piece`]: ChessMatch::place_new_piece
    pub fn empty() -> Self {
        ChessMatch {
            board: Board::new(),
            pieces: Vec::new(),
            on_board: Vec::new(),
            captured: Vec::new(),
            turn: 1,
            current_player: Color::White,
            check: false,
            checkmate: false,
            en_passant_vulnerable: None,
            pending_promotion: None,
        }
    }

    /// Place a new piece on an algebraic coordinate
    pub fn place_new_piece(
        &mut self,
        column: char,
        row: u8,
        kind: PieceKind,
        color: Color,
    ) -> MatchResult<()> {
        let position = ChessPosition::new(column, row)?.to_position();
        if self.board.get(position).is_some() {
            return Err(BoardError::Occupied {
                row: position.row,
                col: position.col,
            }
            .into());
        }
        self.add_piece(position, kind, color);
        Ok(())
    }

    fn initial_setup(&mut self) {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let col = file as i8;
            self.add_piece(Position::new(7, col), kind, Color::White);
            self.add_piece(Position::new(6, col), PieceKind::Pawn, Color::White);
            self.add_piece(Position::new(0, col), kind, Color::Black);
            self.add_piece(Position::new(1, col), PieceKind::Pawn, Color::Black);
        }
    }

    fn add_piece(&mut self, position: Position, kind: PieceKind, color: Color) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(kind, color, position));
        self.board.set(position, id);
        self.on_board.push(id);
        id
    }

    /// Turn number, starting at 1
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// The side to move
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// True if the player to move is in check
    ///
    /// After checkmate the flag stays set for the mated side. While a
    /// promotion is pending the flag is not yet re-evaluated; it reflects
    /// the position before the promoting move until [`replace_promotion`]
    /// resolves it.
    ///
    /// [`replace_promotion`]: ChessMatch::replace_promotion
    pub fn in_check(&self) -> bool {
        self.check
    }

    /// True once the match has ended in checkmate
    ///
    /// Checkmate freezes the turn: the current player remains the winner
    /// and no further moves are accepted.
    pub fn in_checkmate(&self) -> bool {
        self.checkmate
    }

    /// The pawn awaiting a promotion choice, if any
    pub fn pending_promotion(&self) -> Option<Piece> {
        self.pending_promotion.map(|id| self.pieces[id.0])
    }

    /// Snapshot of the full board
    pub fn pieces(&self) -> [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] {
        let mut snapshot = [[None; BOARD_SIZE]; BOARD_SIZE];
        for (row, cells) in snapshot.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                let position = Position::new(row as i8, col as i8);
                *cell = self.board.get(position).map(|id| self.pieces[id.0]);
            }
        }
        snapshot
    }

    /// Every piece captured so far, in capture order
    pub fn captured_pieces(&self) -> Vec<Piece> {
        self.captured.iter().map(|&id| self.pieces[id.0]).collect()
    }

    /// Possibility matrix for the piece on `source`
    ///
    /// Validates the source square the same way [`perform_move`] does. The
    /// matrix ignores self-check; a move it marks can still be rejected
    /// with [`MatchError::SelfCheck`] when performed.
    ///
    /// [`perform_move`]: ChessMatch::perform_move
    pub fn possible_moves(&self, source: ChessPosition) -> MatchResult<MoveMatrix> {
        if self.checkmate {
            return Err(MatchError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(MatchError::PromotionPending);
        }
        self.validate_source(source.to_position())
            .map(|(_, matrix)| matrix)
    }

    fn validate_source(&self, source: Position) -> MatchResult<(PieceId, MoveMatrix)> {
        let id = self.board.get(source).ok_or(MatchError::NoPieceAtSource)?;
        if self.pieces[id.0].color != self.current_player {
            return Err(MatchError::NotYourPiece);
        }
        let matrix = move_gen::possible_moves(&self.view(), id, GenMode::Moves);
        if !matrix.any() {
            return Err(MatchError::NoLegalMoves);
        }
        Ok((id, matrix))
    }

    pub(crate) fn view(&self) -> BoardView<'_> {
        BoardView {
            board: &self.board,
            pieces: &self.pieces,
            en_passant_vulnerable: self.en_passant_vulnerable,
        }
    }

    /// Move a piece from the on-board set to the captured set
    fn capture_piece(&mut self, id: PieceId) {
        self.on_board.retain(|&member| member != id);
        self.captured.push(id);
        self.pieces[id.0].position = None;
    }

    /// Inverse of [`capture_piece`], used only by move rollback
    ///
    /// [`capture_piece`]: ChessMatch::capture_piece
    fn restore_piece(&mut self, id: PieceId, position: Position) {
        self.captured.retain(|&member| member != id);
        self.on_board.push(id);
        self.pieces[id.0].position = Some(position);
    }
}

impl Default for ChessMatch {
    fn default() -> Self {
        ChessMatch::new()
    }
}
