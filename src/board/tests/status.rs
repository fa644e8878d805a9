//! Check, checkmate and stalemate tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, PieceKind};

#[test]
fn test_starting_position_is_quiet() {
    let board = Board::new();
    for color in Color::BOTH {
        assert!(!board.is_king_in_check(color));
        assert!(!board.is_checkmate(color));
        assert!(!board.is_stalemate(color));
        assert!(board.has_any_legal_move(color));
    }
}

#[test]
fn test_missing_king_is_never_in_check() {
    let board = BoardBuilder::new()
        .piece(sq("e4"), Color::Black, PieceKind::Queen)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    assert!(!board.is_king_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White));
}

#[test]
fn test_first_king_in_row_major_order_is_used() {
    // two white kings; the one nearer row 0 is the one examined
    let board = BoardBuilder::new()
        .piece(sq("a8"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::King)
        .piece(sq("h5"), Color::Black, PieceKind::Rook)
        .build();
    assert_eq!(board.king_square(Color::White), Some(sq("a8")));
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_queen_mates_boxed_king() {
    // queen on e2 supported by the king on e3
    let board = Board::from_fen("8/8/8/8/8/4k3/4q3/4K3");
    assert!(board.is_king_in_check(Color::White));
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_unsupported_queen_can_be_captured() {
    let board = Board::from_fen("k7/8/8/8/8/8/4q3/4K3");
    assert!(board.is_king_in_check(Color::White));
    assert!(!board.is_checkmate(Color::White));
    assert_eq!(board.legal_moves(sq("e1"), Color::White), vec![sq("e2")]);
}

#[test]
fn test_back_rank_mate() {
    let board = Board::from_fen("R5k1/5ppp/8/8/8/8/8/6K1");
    assert!(board.is_checkmate(Color::Black));
}

#[test]
fn test_check_that_can_be_blocked() {
    let board = Board::from_fen("R5k1/4bppp/8/8/8/8/8/6K1");
    assert!(board.is_king_in_check(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(
        board.legal_moves(sq("e7"), Color::Black),
        vec![sq("f8"), sq("d8")]
    );
    assert!(board.legal_moves(sq("g8"), Color::Black).is_empty());
}

#[test]
fn test_stalemate_position() {
    let board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8");
    assert!(!board.is_king_in_check(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert!(board.legal_moves_for(Color::Black).is_empty());
    // white is fine
    assert!(!board.is_stalemate(Color::White));
}

#[test]
fn test_stalemate_with_blocked_pawn() {
    let board = Board::from_fen("k7/P7/1Q6/8/8/8/8/7K");
    assert!(board.is_stalemate(Color::Black));
}

#[test]
fn test_check_counts_pawn_diagonals() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("d2"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(board.is_king_in_check(Color::White));

    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::Black, PieceKind::Pawn)
        .build();
    assert!(!board.is_king_in_check(Color::White));
}

#[test]
fn test_check_through_gap_only() {
    let blocked = Board::from_fen("4r2k/8/8/8/8/8/4P3/4K3");
    assert!(!blocked.is_king_in_check(Color::White));

    let open = Board::from_fen("4r2k/8/8/8/8/8/3P4/4K3");
    assert!(open.is_king_in_check(Color::White));
}
