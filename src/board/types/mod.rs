//! Core chess types.
//!
//! - `PieceKind`, `Color` and `Piece` - what stands on a square
//! - `Square` - a (row, col) coordinate
//! - `SquareSet` - 64-bit set of squares

mod piece;
mod square;
mod square_set;

pub use piece::{Color, Piece, PieceKind};
pub use square::Square;
pub use square_set::{SquareSet, SquareSetIter};
