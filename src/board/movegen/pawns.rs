use super::super::{Board, Color, Square};

impl Board {
    /// Pawn pushes (one, or two from the start row through empty squares)
    /// followed by diagonal captures of enemy pieces, left then right.
    pub(crate) fn pawn_targets(&self, from: Square, color: Color, out: &mut Vec<Square>) {
        let dir = color.pawn_direction();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                out.push(one);
                if from.row() == color.pawn_start_row() {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            out.push(two);
                        }
                    }
                }
            }
        }

        for dcol in [-1, 1] {
            if let Some(to) = from.offset(dir, dcol) {
                if self.piece_at(to).is_some_and(|p| p.color != color) {
                    out.push(to);
                }
            }
        }
    }
}
