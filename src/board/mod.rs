//! Chess board representation and rules.
//!
//! A `Board` is an owned 8x8 grid of optional pieces. Everything here is a
//! pure function of a board: raw attacks, legal moves, check/mate/stalemate
//! detection, move application and notation. Castling, en passant and
//! promotion are not part of the rule set.
//!
//! # Example
//! ```
//! use chess_rules::board::{Board, Color, Square};
//!
//! let board = Board::new();
//! let moves = board.legal_moves(Square(6, 4), Color::White);
//! assert_eq!(moves, vec![Square(5, 4), Square(4, 4)]);
//! ```

mod apply;
mod builder;
mod display;
mod error;
mod fen;
mod movegen;
pub mod prelude;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use apply::AppliedMove;
pub use builder::BoardBuilder;
pub use error::{FenError, MoveError, SquareError};
pub use san::notate;
pub use state::Board;
pub use types::{Color, Piece, PieceKind, Square, SquareSet, SquareSetIter};
