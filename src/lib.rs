//! Chess rules engine.
//!
//! [`board`] holds the pure rules: raw attacks, legal moves, check, mate and
//! stalemate detection, move application and algebraic notation.
//! [`game`] layers a turn-based [`GameState`] over it for a presentation
//! layer to drive, and [`cli`] is a small text front end over that.

pub mod board;
pub mod cli;
pub mod game;

pub use board::{Board, Color, Piece, PieceKind, Square};
pub use game::{GameState, Outcome};
