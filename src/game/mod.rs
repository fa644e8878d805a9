//! Game flow on top of the rules in [`crate::board`].
//!
//! A presentation layer drives play through three actions on [`GameState`]:
//! `select`, `move_piece` and `reset`. Each returns a complete new state.
//!
//! # Example
//! ```
//! use chess_rules::board::Square;
//! use chess_rules::game::GameState;
//!
//! let game = GameState::new().select(Square(6, 4));
//! assert!(game.legal_moves().contains(&Square(4, 4)));
//!
//! let game = game.move_piece(Square(6, 4), Square(4, 4));
//! assert_eq!(game.moves(), ["e4"]);
//! ```

mod captured;
mod state;


pub use captured::CapturedPieces;
pub use state::{GameState, Outcome};
