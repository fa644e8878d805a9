//! Prelude module for convenient imports.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    notate, AppliedMove, Board, BoardBuilder, Color, FenError, MoveError, Piece, PieceKind,
    Square, SquareError, SquareSet,
};
