use super::super::{Board, Color, Square};

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Walk each direction until the edge or the first occupied square.
    /// An occupied square is included only when it holds an enemy piece.
    pub(crate) fn sliding_targets(
        &self,
        from: Square,
        color: Color,
        directions: &[(isize, isize)],
        out: &mut Vec<Square>,
    ) {
        for &(drow, dcol) in directions {
            let mut current = from;
            while let Some(to) = current.offset(drow, dcol) {
                match self.piece_at(to) {
                    None => out.push(to),
                    Some(blocker) => {
                        if blocker.color != color {
                            out.push(to);
                        }
                        break;
                    }
                }
                current = to;
            }
        }
    }
}
