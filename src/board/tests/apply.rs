//! Move application tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, MoveError, Piece, PieceKind};

#[test]
fn test_apply_returns_new_board() {
    let board = Board::new();
    let applied = board.apply_move(sq("e2"), sq("e4")).unwrap();

    assert!(applied.board.is_empty(sq("e2")));
    assert_eq!(
        applied.board.piece_at(sq("e4")),
        Some(Piece::new(PieceKind::Pawn, Color::White).moved())
    );
    assert_eq!(applied.captured, None);
    assert!(applied.moved.has_moved);

    // source untouched
    assert_eq!(board, Board::new());
}

#[test]
fn test_apply_reports_capture() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("a7"), Color::Black, PieceKind::Knight)
        .build();
    let applied = board.apply_move(sq("a1"), sq("a7")).unwrap();

    assert_eq!(
        applied.captured,
        Some(Piece::new(PieceKind::Knight, Color::Black))
    );
    assert_eq!(applied.board.occupied().count(), 3);
    assert_eq!(applied.board.piece_at(sq("a7")).map(|p| p.kind), Some(PieceKind::Rook));
}

#[test]
fn test_apply_rejects_empty_origin() {
    let board = Board::new();
    assert_eq!(
        board.apply_move(sq("d4"), sq("d5")),
        Err(MoveError::NoPieceAt { square: sq("d4") })
    );
}

#[test]
fn test_apply_rejects_illegal_destination() {
    let board = Board::new();
    assert!(matches!(
        board.apply_move(sq("b1"), sq("d2")),
        Err(MoveError::IllegalDestination { .. })
    ));
}

#[test]
fn test_apply_rejects_move_into_check() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("e2"), Color::White, PieceKind::Bishop)
        .piece(sq("e8"), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.apply_move(sq("e2"), sq("d3")).is_err());
}

#[test]
fn test_apply_works_for_either_color() {
    // the piece's own color decides legality, not a global turn
    let board = Board::new();
    assert!(board.apply_move(sq("e7"), sq("e5")).is_ok());
}
