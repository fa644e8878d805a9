//! Move generation.
//!
//! Two views over the same per-piece geometry:
//! - `attacks` - raw reach of one piece, ignoring self-check. Used to answer
//!   "is this square attacked by that color".
//! - `legal_moves` - raw candidates filtered by simulating each one on a
//!   scratch board and rejecting those that leave the mover's king in check.
//!
//! Candidates are produced in a fixed order (pawn pushes then captures,
//! rook directions right/down/left/up, bishop directions, knight and king
//! offsets row-major; queens are rook moves followed by bishop moves).

mod leapers;
mod pawns;
mod sliders;

use leapers::{KING_OFFSETS, KNIGHT_OFFSETS};
use sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

use super::{Board, Color, PieceKind, Square, SquareSet};

impl Board {
    /// Raw candidate destinations of the piece on `from`, in generation order.
    ///
    /// Empty if the square is empty or holds a piece of the other color.
    #[must_use]
    pub fn raw_moves(&self, from: Square, color: Color) -> Vec<Square> {
        let mut out = Vec::new();
        let Some(piece) = self.piece_at(from) else {
            return out;
        };
        if piece.color != color {
            return out;
        }

        match piece.kind {
            PieceKind::Pawn => self.pawn_targets(from, color, &mut out),
            PieceKind::Rook => self.sliding_targets(from, color, &ROOK_DIRECTIONS, &mut out),
            PieceKind::Knight => self.leaper_targets(from, color, &KNIGHT_OFFSETS, &mut out),
            PieceKind::Bishop => self.sliding_targets(from, color, &BISHOP_DIRECTIONS, &mut out),
            PieceKind::Queen => {
                self.sliding_targets(from, color, &ROOK_DIRECTIONS, &mut out);
                self.sliding_targets(from, color, &BISHOP_DIRECTIONS, &mut out);
            }
            PieceKind::King => self.leaper_targets(from, color, &KING_OFFSETS, &mut out),
        }
        out
    }

    /// Squares the piece of `color` on `square` threatens or can reach,
    /// ignoring whether its own king would be left in check.
    ///
    /// Independent of whose turn it is.
    #[must_use]
    pub fn attacks(&self, square: Square, color: Color) -> SquareSet {
        self.raw_moves(square, color).into_iter().collect()
    }

    /// Returns true if any piece of `by` reaches `target`.
    #[must_use]
    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        self.pieces_of(by)
            .any(|(sq, _)| self.attacks(sq, by).contains(target))
    }

    /// Legal destinations for the piece on `square` when `mover` is to move.
    ///
    /// A candidate survives only if, after playing it on a scratch copy,
    /// `mover`'s king is not in check. Empty if the square is empty or the
    /// piece does not belong to `mover`.
    #[must_use]
    pub fn legal_moves(&self, square: Square, mover: Color) -> Vec<Square> {
        let mut moves = self.raw_moves(square, mover);
        moves.retain(|&to| {
            let scratch = self.with_move_unchecked(square, to);
            !scratch.is_king_in_check(mover)
        });
        moves
    }

    /// Every legal (from, to) pair for `color`, pieces in row-major order.
    #[must_use]
    pub fn legal_moves_for(&self, color: Color) -> Vec<(Square, Square)> {
        self.pieces_of(color)
            .flat_map(|(from, _)| {
                self.legal_moves(from, color)
                    .into_iter()
                    .map(move |to| (from, to))
            })
            .collect()
    }
}
