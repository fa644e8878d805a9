//! Algebraic notation for played moves.
//!
//! Grammar: `[piece letter][from-file on pawn capture][x]<destination>[+|#]`.
//! No disambiguation is emitted, so two knights that can reach the same
//! square produce the same string.
//!
//! # Examples
//! ```
//! use chess_rules::board::{notate, Color, Piece, PieceKind, Square};
//!
//! let pawn = Piece::new(PieceKind::Pawn, Color::White);
//! assert_eq!(notate(Square(6, 4), Square(4, 4), pawn, None, false, false), "e4");
//! ```

use super::error::MoveError;
use super::{Board, Piece, PieceKind, Square};

/// Render a move. `+` is appended when `in_check` and not mate, `#` on mate.
#[must_use]
pub fn notate(
    from: Square,
    to: Square,
    piece: Piece,
    captured: Option<Piece>,
    in_check: bool,
    is_checkmate: bool,
) -> String {
    let mut san = String::with_capacity(6);

    if let Some(letter) = piece.kind.san_letter() {
        san.push(letter);
    }

    if captured.is_some() {
        if piece.kind == PieceKind::Pawn {
            san.push(from.file_char());
        }
        san.push('x');
    }

    san.push_str(&to.to_string());

    if is_checkmate {
        san.push('#');
    } else if in_check {
        san.push('+');
    }

    san
}

impl Board {
    /// Notation for moving the piece on `from` to `to` in this position,
    /// with check and mate judged for the opponent on the resulting board.
    pub fn move_to_san(&self, from: Square, to: Square) -> Result<String, MoveError> {
        let applied = self.apply_move(from, to)?;
        let opponent = applied.moved.color.opponent();
        let in_check = applied.board.is_king_in_check(opponent);
        let mate = in_check && applied.board.is_checkmate(opponent);
        Ok(notate(from, to, applied.moved, applied.captured, in_check, mate))
    }
}
