use std::fmt;

use super::{Board, Square};

impl fmt::Display for Board {
    /// Rank 8 first, White uppercase, empty squares as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +-----------------+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for col in 0..8 {
                let ch = self
                    .piece_at(Square(row, col))
                    .map_or('.', |p| p.to_fen_char());
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  +-----------------+")?;
        write!(f, "    a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_starting_position() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "8 | r n b q k b n r |");
        assert_eq!(lines[5], "4 | . . . . . . . . |");
        assert_eq!(lines[8], "1 | R N B Q K B N R |");
        assert_eq!(lines[10], "    a b c d e f g h");
    }
}
