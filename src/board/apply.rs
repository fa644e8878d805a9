use super::error::MoveError;
use super::{Board, Piece, Square};

/// Result of applying a move: the new board, the piece as it now stands on
/// the destination, and whatever was captured there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub moved: Piece,
    pub captured: Option<Piece>,
}

impl Board {
    /// Apply a move, returning a new board. `self` is left untouched.
    ///
    /// Only guards the transition: the origin must hold a piece and `to`
    /// must be among that piece's legal destinations.
    pub fn apply_move(&self, from: Square, to: Square) -> Result<AppliedMove, MoveError> {
        let piece = self
            .piece_at(from)
            .ok_or(MoveError::NoPieceAt { square: from })?;
        if !self.legal_moves(from, piece.color).contains(&to) {
            return Err(MoveError::IllegalDestination { from, to });
        }

        let mut board = *self;
        let captured = board.take(to);
        board.take(from);
        let moved = piece.moved();
        board.set(to, moved);

        log::trace!("applied {from}{to}, captured {captured:?}");
        Ok(AppliedMove {
            board,
            moved,
            captured,
        })
    }

    /// Scratch copy with the piece on `from` moved to `to`, overwriting the
    /// destination. No legality checks; used for self-check simulation.
    #[must_use]
    pub(crate) fn with_move_unchecked(&self, from: Square, to: Square) -> Board {
        let mut scratch = *self;
        if let Some(piece) = scratch.take(from) {
            scratch.set(to, piece);
        }
        scratch
    }
}
