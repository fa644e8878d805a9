#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Piece};

/// Captured pieces, partitioned by the color that lost them.
///
/// Append-only; each list is in capture order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CapturedPieces {
    white: Vec<Piece>,
    black: Vec<Piece>,
}

impl CapturedPieces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pieces `color` has lost, oldest first
    #[must_use]
    pub fn lost_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }

    pub(crate) fn record(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.white.len() + self.black.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.white.is_empty() && self.black.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_record_partitions_by_loser() {
        let mut captured = CapturedPieces::new();
        captured.record(Piece::new(PieceKind::Knight, Color::Black));
        captured.record(Piece::new(PieceKind::Pawn, Color::White));
        captured.record(Piece::new(PieceKind::Queen, Color::Black));

        let black: Vec<PieceKind> = captured.lost_by(Color::Black).iter().map(|p| p.kind).collect();
        assert_eq!(black, vec![PieceKind::Knight, PieceKind::Queen]);
        assert_eq!(captured.lost_by(Color::White).len(), 1);
        assert_eq!(captured.len(), 3);
        assert!(!captured.is_empty());
    }
}
