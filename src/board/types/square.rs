//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (row, col).
///
/// Row 0 is rank 8 (Black's back rank) and row 7 is rank 1. Column 0 is
/// file a. Geometry is expressed directly in this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        let sq = Square(row, col);
        sq.is_on_board().then_some(sq)
    }

    /// Both coordinates lie in 0..8
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// File letter ('a'..='h')
    #[inline]
    #[must_use]
    pub const fn file_char(self) -> char {
        (b'a'.wrapping_add(self.col() as u8)) as char
    }

    /// Rank digit ('1'..='8'); rank = 8 - row
    #[inline]
    #[must_use]
    pub const fn rank_char(self) -> char {
        (b'8'.wrapping_sub(self.row() as u8)) as char
    }

    /// Row-major index (0-63, a8=0, h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// The square reached by stepping (drow, dcol), if it is on the board
    #[inline]
    #[must_use]
    pub fn offset(self, drow: isize, dcol: isize) -> Option<Self> {
        let row = usize::try_from(self.0 as isize + drow).ok()?;
        let col = usize::try_from(self.1 as isize + dcol).ok()?;
        Square::new(row, col)
    }

    /// All 64 squares in row-major order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let col = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => (b'8' - bytes[1]) as usize,
            _ => return Err(invalid()),
        };

        Ok(Square(row, col))
    }
}
