use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, PieceKind, Square};

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

static STARTING_POSITION: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for (col, &kind) in BACK_RANK.iter().enumerate() {
        for color in Color::BOTH {
            let pawn_row = color.pawn_start_row();
            board.set(Square(color.back_row(), col), Piece::new(kind, color));
            board.set(Square(pawn_row, col), Piece::new(PieceKind::Pawn, color));
        }
    }
    board
});

/// An 8x8 grid of optional pieces, addressed `[row][col]`.
///
/// `Board` is `Copy`: every simulation and move application works on its own
/// value, never on a board a caller still holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Board {
    pub(crate) squares: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// The standard starting position. White occupies rows 6-7, Black rows 0-1.
    #[must_use]
    pub fn new() -> Self {
        *STARTING_POSITION
    }

    /// A board with no pieces
    #[must_use]
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.squares.get(sq.0).and_then(|row| row.get(sq.1)).copied().flatten()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    #[inline]
    fn slot_mut(&mut self, sq: Square) -> Option<&mut Option<Piece>> {
        self.squares.get_mut(sq.0).and_then(|row| row.get_mut(sq.1))
    }

    /// Place a piece, replacing whatever stood there. Off-board squares are ignored.
    #[inline]
    pub fn set(&mut self, sq: Square, piece: Piece) {
        if let Some(slot) = self.slot_mut(sq) {
            *slot = Some(piece);
        }
    }

    /// Remove and return the piece on a square
    #[inline]
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.slot_mut(sq).and_then(Option::take)
    }

    /// All pieces of one color in row-major order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied()
            .filter(move |(_, piece)| piece.color == color)
    }

    /// All occupied squares in row-major order
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// The square of the first king of `color` in row-major order
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(sq, _)| sq)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
