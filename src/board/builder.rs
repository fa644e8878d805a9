//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::board::{BoardBuilder, Color, PieceKind, Square};
//!
//! let board = BoardBuilder::new()
//!     .piece(Square(7, 4), Color::White, PieceKind::King)
//!     .piece(Square(0, 4), Color::Black, PieceKind::King)
//!     .piece(Square(6, 0), Color::White, PieceKind::Pawn)
//!     .build();
//! assert!(board.piece_at(Square(6, 0)).is_some());
//! ```

use super::{Board, Color, Piece, PieceKind, Square};

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    board: Board,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub const fn new() -> Self {
        BoardBuilder {
            board: Board::empty(),
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        BoardBuilder {
            board: Board::new(),
        }
    }

    /// Place an unmoved piece, replacing any existing one.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Piece::new(kind, color));
        self
    }

    /// Place a piece that is flagged as having moved.
    #[must_use]
    pub fn moved_piece(mut self, square: Square, color: Color, kind: PieceKind) -> Self {
        self.board.set(square, Piece::new(kind, color).moved());
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.board.take(square);
        self
    }

    #[must_use]
    pub fn build(self) -> Board {
        self.board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position() {
        let built = BoardBuilder::starting_position().build();
        assert_eq!(built, Board::new());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardBuilder::new()
            .piece(Square(7, 4), Color::White, PieceKind::King)
            .piece(Square(0, 4), Color::Black, PieceKind::King)
            .build();

        assert_eq!(board.occupied().count(), 2);
        assert!(board.piece_at(Square(0, 0)).is_none());
    }

    #[test]
    fn test_replacing_a_piece() {
        let board = BoardBuilder::new()
            .piece(Square(4, 4), Color::White, PieceKind::Knight)
            .piece(Square(4, 4), Color::Black, PieceKind::Queen)
            .build();

        let piece = board.piece_at(Square(4, 4)).unwrap();
        assert_eq!(piece.kind, PieceKind::Queen);
        assert_eq!(piece.color, Color::Black);
    }

    #[test]
    fn test_moved_piece_flag() {
        let board = BoardBuilder::new()
            .moved_piece(Square(4, 4), Color::White, PieceKind::Rook)
            .build();
        assert!(board.piece_at(Square(4, 4)).unwrap().has_moved);
    }

    #[test]
    fn test_clear_square() {
        let board = BoardBuilder::starting_position()
            .clear(Square(7, 0)) // white rook on a1
            .build();

        assert!(board.piece_at(Square(7, 0)).is_none());
        assert!(board.piece_at(Square(7, 1)).is_some());
    }
}
