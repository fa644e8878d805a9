use super::error::FenError;
use super::{Board, Piece, Square};

impl Board {
    /// Parse a board from the piece-placement field of a FEN string.
    ///
    /// Only the first whitespace-separated field is read; side to move,
    /// castling and en passant fields are ignored. The first FEN rank
    /// (rank 8) maps to row 0.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut board = Board::empty();
        let placement = fen.split_whitespace().next().unwrap_or("");

        let mut ranks = 0;
        for (row, rank_str) in placement.split('/').enumerate() {
            if row >= 8 {
                return Err(FenError::InvalidRank { rank: row });
            }
            ranks += 1;
            let mut col = 0;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 {
                        return Err(FenError::InvalidPiece { char: c });
                    }
                    col += skip as usize;
                } else {
                    let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if col >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: row,
                            files: col + 1,
                        });
                    }
                    board.set(Square(row, col), piece);
                    col += 1;
                }
            }
            if col > 8 {
                return Err(FenError::TooManyFiles {
                    rank: row,
                    files: col,
                });
            }
            if col < 8 {
                return Err(FenError::TooFewFiles {
                    rank: row,
                    files: col,
                });
            }
        }

        if ranks < 8 {
            return Err(FenError::TooFewRanks { found: ranks });
        }
        Ok(board)
    }

    /// Parse a board from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// The piece-placement field of this board in FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut out = String::new();
            let mut empty = 0;
            for col in 0..8 {
                if let Some(piece) = self.piece_at(Square(row, col)) {
                    if empty > 0 {
                        out.push_str(&empty.to_string());
                        empty = 0;
                    }
                    out.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            rows.push(out);
        }
        rows.join("/")
    }
}
