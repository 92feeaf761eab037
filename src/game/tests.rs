//! Scenario test suite for the match engine
//!
//! Exercises the full move execution protocol: validation errors, atomic
//! commit-or-revert, special moves, check, checkmate and promotion.
//!
//! # Test Organization
//!
//! - `test_setup_*` - initial position and custom placement
//! - `test_validation_*` - the classified source/target errors
//! - `test_capture_* / test_en_passant_*` - captures and set membership
//! - `test_castling_*` - coordinated king/rook relocation
//! - `test_check_* / test_checkmate_*` - status evaluation and turn freeze
//! - `test_promotion_*` - the pending-promotion protocol
//! - `test_rollback_*` - simulate-then-undo exactness

use super::*;
use crate::types::Color::{Black, White};
use crate::types::PieceKind::{Bishop, King, Knight, Pawn, Queen, Rook};

fn sq(square: &str) -> ChessPosition {
    square.parse().expect("valid algebraic square")
}

fn mv(game: &mut ChessMatch, from: &str, to: &str) -> MatchResult<Option<Piece>> {
    game.perform_move(sq(from), sq(to))
}

fn piece_at(game: &ChessMatch, square: &str) -> Piece {
    let position = sq(square).to_position();
    let id = game.board.get(position).expect("piece on square");
    game.pieces[id.0]
}

/// Full observable state, for byte-identical commit-or-revert checks
///
/// The on-board set is order-insensitive (rollback may reorder it), so
/// membership is compared sorted.
#[derive(Debug, Clone, PartialEq)]
struct Snapshot {
    pieces: Vec<Piece>,
    board: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
    on_board: Vec<usize>,
    captured: Vec<usize>,
    turn: u32,
    current_player: Color,
    check: bool,
    checkmate: bool,
    en_passant: Option<usize>,
    pending: Option<usize>,
}

fn snapshot(game: &ChessMatch) -> Snapshot {
    let mut on_board: Vec<usize> = game.on_board.iter().map(|id| id.0).collect();
    on_board.sort_unstable();
    Snapshot {
        pieces: game.pieces.clone(),
        board: game.pieces(),
        on_board,
        captured: game.captured.iter().map(|id| id.0).collect(),
        turn: game.turn,
        current_player: game.current_player,
        check: game.check,
        checkmate: game.checkmate,
        en_passant: game.en_passant_vulnerable.map(|id| id.0),
        pending: game.pending_promotion.map(|id| id.0),
    }
}

// ============================================================================
// Setup
// ============================================================================

#[test]
fn test_setup_places_the_standard_army() {
    let game = ChessMatch::new();

    assert_eq!(game.on_board.len(), 32);
    assert!(game.captured.is_empty());
    assert_eq!(game.turn(), 1);
    assert_eq!(game.current_player(), White);

    let king = piece_at(&game, "e1");
    assert_eq!((king.kind, king.color), (King, White));
    let queen = piece_at(&game, "d8");
    assert_eq!((queen.kind, queen.color), (Queen, Black));
    let pawn = piece_at(&game, "a2");
    assert_eq!((pawn.kind, pawn.color, pawn.move_count), (Pawn, White, 0));
}

#[test]
fn test_setup_rejects_doubled_placement() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 4, Knight, White).unwrap();

    assert!(matches!(
        game.place_new_piece('e', 4, Rook, Black),
        Err(MatchError::Board(BoardError::Occupied { .. }))
    ));
    assert_eq!(
        game.place_new_piece('j', 1, Rook, White),
        Err(MatchError::InvalidPosition)
    );
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_validation_classifies_bad_sources_and_targets() {
    let mut game = ChessMatch::new();

    assert_eq!(mv(&mut game, "e4", "e5"), Err(MatchError::NoPieceAtSource));
    assert_eq!(mv(&mut game, "e7", "e5"), Err(MatchError::NotYourPiece));
    assert_eq!(mv(&mut game, "b1", "b3"), Err(MatchError::IllegalTarget));
}

#[test]
fn test_validation_rejects_a_piece_with_no_moves() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('e', 8, King, Black).unwrap();
    game.place_new_piece('e', 2, Pawn, White).unwrap();
    game.place_new_piece('e', 3, Knight, White).unwrap();

    // Pawn is blocked ahead and has nothing to capture
    assert_eq!(mv(&mut game, "e2", "e3"), Err(MatchError::NoLegalMoves));
}

#[test]
fn test_failed_moves_leave_state_untouched() {
    let mut game = ChessMatch::new();
    let before = snapshot(&game);

    assert!(mv(&mut game, "b1", "b3").is_err());
    assert!(mv(&mut game, "e5", "e6").is_err());
    assert_eq!(snapshot(&game), before, "failed validation must not mutate the match");
}

#[test]
fn test_committed_move_advances_the_turn() {
    let mut game = ChessMatch::new();

    let captured = mv(&mut game, "e2", "e4").unwrap();
    assert!(captured.is_none());
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player(), Black);

    let pawn = piece_at(&game, "e4");
    assert_eq!(pawn.move_count, 1);
    assert!(!game.board.has_piece(sq("e2").to_position()).unwrap());
}

// ============================================================================
// Captures
// ============================================================================

#[test]
fn test_capture_transfers_membership_and_conserves_pieces() {
    let mut game = ChessMatch::new();
    mv(&mut game, "e2", "e4").unwrap();
    mv(&mut game, "d7", "d5").unwrap();

    let captured = mv(&mut game, "e4", "d5").unwrap().expect("a pawn is captured");
    assert_eq!((captured.kind, captured.color), (Pawn, Black));
    assert_eq!(captured.position, None, "captured pieces leave the board");

    assert_eq!(game.on_board.len(), 31);
    assert_eq!(game.captured_pieces().len(), 1);
    assert_eq!(
        game.on_board.len() + game.captured.len(),
        32,
        "total piece count is invariant"
    );
    assert_eq!(piece_at(&game, "d5").color, White);
}

// ============================================================================
// En passant
// ============================================================================

#[test]
fn test_en_passant_captures_the_pawn_beside_the_target() {
    let mut game = ChessMatch::new();
    mv(&mut game, "e2", "e4").unwrap();
    mv(&mut game, "a7", "a6").unwrap();
    mv(&mut game, "e4", "e5").unwrap();
    mv(&mut game, "d7", "d5").unwrap();

    let vulnerable = game.en_passant_vulnerable.expect("double advance sets vulnerability");
    assert_eq!(game.pieces[vulnerable.0].position, Some(sq("d5").to_position()));

    let captured = mv(&mut game, "e5", "d6").unwrap().expect("en passant captures");
    assert_eq!((captured.kind, captured.color), (Pawn, Black));

    assert_eq!(piece_at(&game, "d6").color, White);
    assert!(!game.board.has_piece(sq("d5").to_position()).unwrap(), "the captured pawn came off d5");
    assert!(!game.board.has_piece(sq("e5").to_position()).unwrap());
    assert_eq!(game.captured_pieces().len(), 1);
}

#[test]
fn test_en_passant_expires_after_one_turn() {
    let mut game = ChessMatch::new();
    mv(&mut game, "e2", "e4").unwrap();
    mv(&mut game, "a7", "a6").unwrap();
    mv(&mut game, "e4", "e5").unwrap();
    mv(&mut game, "d7", "d5").unwrap();
    mv(&mut game, "b1", "c3").unwrap();
    mv(&mut game, "a6", "a5").unwrap();

    assert_eq!(game.en_passant_vulnerable, None, "vulnerability lasts one move");
    assert_eq!(mv(&mut game, "e5", "d6"), Err(MatchError::IllegalTarget));
}

// ============================================================================
// Castling
// ============================================================================

#[test]
fn test_castling_relocates_king_and_rook_together() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('h', 1, Rook, White).unwrap();
    game.place_new_piece('e', 8, King, Black).unwrap();

    assert!(mv(&mut game, "e1", "g1").unwrap().is_none());

    let king = piece_at(&game, "g1");
    assert_eq!((king.kind, king.move_count), (King, 1));
    let rook = piece_at(&game, "f1");
    assert_eq!((rook.kind, rook.move_count), (Rook, 1), "the rook relocates in the same move");
    assert!(!game.board.has_piece(sq("e1").to_position()).unwrap());
    assert!(!game.board.has_piece(sq("h1").to_position()).unwrap());
    assert_eq!(game.current_player(), Black);
}

#[test]
fn test_queenside_castling_uses_the_a_file_rook() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('a', 1, Rook, White).unwrap();
    game.place_new_piece('e', 8, King, Black).unwrap();

    mv(&mut game, "e1", "c1").unwrap();
    assert_eq!(piece_at(&game, "c1").kind, King);
    assert_eq!(piece_at(&game, "d1").kind, Rook);
    assert!(!game.board.has_piece(sq("a1").to_position()).unwrap());
}

#[test]
fn test_a_king_off_its_home_file_cannot_reach_the_castling_square() {
    // Custom setup with an unmoved king on c1: g1 is four columns away
    // and must be rejected outright, not treated as a castling candidate
    let mut game = ChessMatch::empty();
    game.place_new_piece('c', 1, King, White).unwrap();
    game.place_new_piece('h', 1, Rook, White).unwrap();
    game.place_new_piece('e', 8, King, Black).unwrap();

    let before = snapshot(&game);
    assert_eq!(mv(&mut game, "c1", "g1"), Err(MatchError::IllegalTarget));
    assert_eq!(snapshot(&game), before, "the rejected move must leave no trace");
}

// ============================================================================
// Check and self-check
// ============================================================================

#[test]
fn test_pinned_piece_move_is_self_check_and_reverts_exactly() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('e', 2, Rook, White).unwrap();
    game.place_new_piece('e', 8, Rook, Black).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    let before = snapshot(&game);

    // The white rook is pinned to its king by the black rook
    assert_eq!(mv(&mut game, "e2", "d2"), Err(MatchError::SelfCheck));
    assert_eq!(snapshot(&game), before, "self-check must roll back bit-identically");

    // Moving along the pin stays legal
    assert!(mv(&mut game, "e2", "e5").is_ok());
}

#[test]
fn test_check_is_flagged_and_must_be_resolved() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('a', 1, Rook, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();

    mv(&mut game, "a1", "a8").unwrap();
    assert!(game.in_check());
    assert!(!game.in_checkmate());
    assert_eq!(game.current_player(), Black);
    assert_eq!(game.turn(), 2);

    // Staying on the attacked back rank is still check
    assert_eq!(mv(&mut game, "h8", "g8"), Err(MatchError::SelfCheck));

    mv(&mut game, "h8", "h7").unwrap();
    assert!(!game.in_check());
}

// ============================================================================
// Checkmate
// ============================================================================

#[test]
fn test_back_rank_checkmate_freezes_the_turn() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('a', 1, Rook, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    game.place_new_piece('g', 7, Pawn, Black).unwrap();
    game.place_new_piece('h', 7, Pawn, Black).unwrap();

    mv(&mut game, "a1", "a8").unwrap();
    assert!(game.in_check());
    assert!(game.in_checkmate());
    assert_eq!(game.current_player(), White, "checkmate freezes the turn on the winner");
    assert_eq!(game.turn(), 1);

    assert_eq!(mv(&mut game, "h8", "h7"), Err(MatchError::GameOver));
    assert_eq!(game.possible_moves(sq("a8")), Err(MatchError::GameOver));
}

#[test]
fn test_checkmate_search_finds_a_defence() {
    // Same back-rank attack, but a black knight on b6 covers a8 and can
    // capture the checker without standing in the rook's line
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('a', 1, Rook, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    game.place_new_piece('g', 7, Pawn, Black).unwrap();
    game.place_new_piece('h', 7, Pawn, Black).unwrap();
    game.place_new_piece('b', 6, Knight, Black).unwrap();

    mv(&mut game, "a1", "a8").unwrap();
    assert!(game.in_check());
    assert!(!game.in_checkmate(), "the checking rook can be captured");
    assert_eq!(game.current_player(), Black);

    mv(&mut game, "b6", "a8").unwrap();
    assert!(!game.in_check());
}

#[test]
fn test_fools_mate_from_the_initial_position() {
    let mut game = ChessMatch::new();
    mv(&mut game, "f2", "f3").unwrap();
    mv(&mut game, "e7", "e5").unwrap();
    mv(&mut game, "g2", "g4").unwrap();
    mv(&mut game, "d8", "h4").unwrap();

    assert!(game.in_check());
    assert!(game.in_checkmate());
    assert_eq!(game.current_player(), Black, "black delivered the mate");
    assert_eq!(game.turn(), 4);
}

// ============================================================================
// Promotion
// ============================================================================

#[test]
fn test_promotion_is_pending_until_a_kind_is_chosen() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    game.place_new_piece('a', 7, Pawn, White).unwrap();

    mv(&mut game, "a7", "a8").unwrap();
    let pending = game.pending_promotion().expect("pawn on the far rank awaits promotion");
    assert_eq!((pending.kind, pending.color), (Pawn, White));
    assert_eq!(game.turn(), 1, "the turn is on hold until the choice arrives");
    assert_eq!(game.current_player(), White);

    assert_eq!(mv(&mut game, "e1", "e2"), Err(MatchError::PromotionPending));
    assert_eq!(game.possible_moves(sq("e1")), Err(MatchError::PromotionPending));

    assert_eq!(
        game.replace_promotion(King),
        Err(MatchError::InvalidPromotionKind(King))
    );
    assert_eq!(
        game.replace_promotion(Pawn),
        Err(MatchError::InvalidPromotionKind(Pawn))
    );

    let promoted = game.replace_promotion(Queen).unwrap();
    assert_eq!(promoted.kind, Queen);
    assert_eq!(piece_at(&game, "a8").kind, Queen);
    assert!(game.pending_promotion().is_none());
    assert_eq!(game.turn(), 2);
    assert_eq!(game.current_player(), Black);
}

#[test]
fn test_promotion_check_is_evaluated_with_the_new_piece() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    game.place_new_piece('a', 7, Pawn, White).unwrap();

    mv(&mut game, "a7", "a8").unwrap();
    assert!(!game.in_check(), "status is deferred while the promotion is pending");

    game.replace_promotion(Queen).unwrap();
    assert!(game.in_check(), "the promoted queen checks along the back rank");
    assert!(!game.in_checkmate());
}

#[test]
fn test_promotion_outside_pending_state_fails() {
    let mut game = ChessMatch::new();
    assert_eq!(game.replace_promotion(Queen), Err(MatchError::NoPendingPromotion));
}

#[test]
fn test_promotion_also_triggers_for_black_on_row_seven() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    game.place_new_piece('h', 2, Pawn, Black).unwrap();

    mv(&mut game, "e1", "d1").unwrap();
    mv(&mut game, "h2", "h1").unwrap();
    assert!(game.pending_promotion().is_some());

    let promoted = game.replace_promotion(Knight).unwrap();
    assert_eq!((promoted.kind, promoted.color), (Knight, Black));
    assert_eq!(piece_at(&game, "h1").kind, Knight);
}

// ============================================================================
// Rollback
// ============================================================================

#[test]
fn test_rollback_restores_a_capture_exactly() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('d', 1, Rook, White).unwrap();
    game.place_new_piece('d', 7, Pawn, Black).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    let before = snapshot(&game);

    let rook = game.board.get(sq("d1").to_position()).unwrap();
    let applied = game.make_move(rook, sq("d1").to_position(), sq("d7").to_position());
    assert_eq!(game.captured.len(), 1, "the pawn is captured during simulation");
    assert_eq!(piece_at(&game, "d7").kind, Rook);

    game.undo_move(applied);
    assert_eq!(snapshot(&game), before, "undo must restore board, counts and membership");
}

#[test]
fn test_rollback_restores_castling_side_effects() {
    let mut game = ChessMatch::empty();
    game.place_new_piece('e', 1, King, White).unwrap();
    game.place_new_piece('h', 1, Rook, White).unwrap();
    game.place_new_piece('h', 8, King, Black).unwrap();
    let before = snapshot(&game);

    let king = game.board.get(sq("e1").to_position()).unwrap();
    let applied = game.make_move(king, sq("e1").to_position(), sq("g1").to_position());
    assert_eq!(piece_at(&game, "f1").kind, Rook, "the rook leg is applied");

    game.undo_move(applied);
    assert_eq!(snapshot(&game), before, "undo must reverse both legs of castling");
}

#[test]
fn test_kings_survive_every_committed_move() {
    let mut game = ChessMatch::new();
    for (from, to) in [
        ("e2", "e4"),
        ("d7", "d5"),
        ("e4", "d5"),
        ("d8", "d5"),
        ("b1", "c3"),
        ("d5", "e5"),
    ] {
        mv(&mut game, from, to).unwrap();

        let board = game.pieces();
        let kings: Vec<Color> = board
            .iter()
            .flatten()
            .flatten()
            .filter(|piece| piece.kind == King)
            .map(|piece| piece.color)
            .collect();
        assert!(kings.contains(&White) && kings.contains(&Black));
        assert_eq!(
            game.on_board.len() + game.captured.len(),
            32,
            "piece count is conserved after {from}-{to}"
        );
    }
}

// ============================================================================
// Snapshots
// ============================================================================

#[test]
fn test_board_snapshot_serializes() {
    let game = ChessMatch::new();
    let json = serde_json::to_string(&game.pieces()).unwrap();
    let back: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE] = serde_json::from_str(&json).unwrap();
    assert_eq!(back, game.pieces());
}
