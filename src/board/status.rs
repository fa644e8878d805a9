//! Check, checkmate and stalemate detection.

use super::{Board, Color};

impl Board {
    /// Returns true if the first king of `color` (row-major) is attacked.
    ///
    /// A board without such a king is reported as not in check.
    #[must_use]
    pub fn is_king_in_check(&self, color: Color) -> bool {
        match self.king_square(color) {
            Some(king) => self.is_square_attacked(king, color.opponent()),
            None => false,
        }
    }

    /// Returns true if any piece of `color` has at least one legal move.
    #[must_use]
    pub fn has_any_legal_move(&self, color: Color) -> bool {
        self.pieces_of(color)
            .any(|(sq, _)| !self.legal_moves(sq, color).is_empty())
    }

    /// In check with no legal move.
    #[must_use]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_king_in_check(color) && !self.has_any_legal_move(color)
    }

    /// Not in check, yet no legal move.
    #[must_use]
    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_king_in_check(color) && !self.has_any_legal_move(color)
    }
}
