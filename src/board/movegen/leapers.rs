use super::super::{Board, Color, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Board {
    /// Fixed-offset jumps onto empty or enemy-occupied squares.
    pub(crate) fn leaper_targets(
        &self,
        from: Square,
        color: Color,
        offsets: &[(isize, isize)],
        out: &mut Vec<Square>,
    ) {
        for &(drow, dcol) in offsets {
            if let Some(to) = from.offset(drow, dcol) {
                if self.piece_at(to).map_or(true, |p| p.color != color) {
                    out.push(to);
                }
            }
        }
    }
}
