use log::{debug, trace};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::CapturedPieces;
use crate::board::{notate, Board, Color, Square};

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
}

/// Complete game snapshot.
///
/// Every action (`select`, `move_piece`, `reset`) returns a new `GameState`
/// and leaves the receiver untouched, so old snapshots stay valid for
/// history scrubbing.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameState {
    board: Board,
    to_move: Color,
    selected: Option<Square>,
    legal_moves: Vec<Square>,
    captured: CapturedPieces,
    in_check: bool,
    in_checkmate: bool,
    in_stalemate: bool,
    moves: Vec<String>,
}

impl GameState {
    /// Standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Color::White)
    }

    /// Start from an arbitrary position. Status flags are computed for
    /// `to_move`; captures and move history start empty.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color) -> Self {
        let in_check = board.is_king_in_check(to_move);
        let no_moves = !board.has_any_legal_move(to_move);
        GameState {
            board,
            to_move,
            selected: None,
            legal_moves: Vec::new(),
            captured: CapturedPieces::new(),
            in_check,
            in_checkmate: in_check && no_moves,
            in_stalemate: !in_check && no_moves,
            moves: Vec::new(),
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[must_use]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    /// Legal destinations for the current selection
    #[must_use]
    pub fn legal_moves(&self) -> &[Square] {
        &self.legal_moves
    }

    #[must_use]
    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    /// The side to move is in check
    #[must_use]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    #[must_use]
    pub fn in_checkmate(&self) -> bool {
        self.in_checkmate
    }

    #[must_use]
    pub fn in_stalemate(&self) -> bool {
        self.in_stalemate
    }

    /// Notation of every move played, in order
    #[must_use]
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&str> {
        self.moves.last().map(String::as_str)
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        if self.in_checkmate {
            Some(Outcome::Checkmate {
                winner: self.to_move.opponent(),
            })
        } else if self.in_stalemate {
            Some(Outcome::Stalemate)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome().is_some()
    }

    /// Select a square. Selecting an empty square or one held by the side
    /// not to move clears the selection.
    #[must_use]
    pub fn select(&self, square: Square) -> GameState {
        let owned = square.is_on_board()
            && self
                .board
                .piece_at(square)
                .is_some_and(|p| p.color == self.to_move);

        if !owned {
            trace!("select {square}: nothing of {} there", self.to_move);
            return GameState {
                selected: None,
                legal_moves: Vec::new(),
                ..self.clone()
            };
        }

        let legal_moves = self.board.legal_moves(square, self.to_move);
        debug!("select {square}: {} legal moves", legal_moves.len());
        GameState {
            selected: Some(square),
            legal_moves,
            ..self.clone()
        }
    }

    /// Play `from` -> `to` for the side to move.
    ///
    /// Returns an unchanged copy if `from` does not hold a piece of the side
    /// to move or `to` is not one of its legal destinations.
    #[must_use]
    pub fn move_piece(&self, from: Square, to: Square) -> GameState {
        if !from.is_on_board() || !to.is_on_board() {
            trace!("move {from:?} -> {to:?} rejected: off the board");
            return self.clone();
        }
        if !self
            .board
            .piece_at(from)
            .is_some_and(|p| p.color == self.to_move)
        {
            trace!("move {from}{to} rejected: not a {} piece", self.to_move);
            return self.clone();
        }

        let applied = match self.board.apply_move(from, to) {
            Ok(applied) => applied,
            Err(e) => {
                trace!("move rejected: {e}");
                return self.clone();
            }
        };

        let next = self.to_move.opponent();
        let in_check = applied.board.is_king_in_check(next);
        let no_moves = !applied.board.has_any_legal_move(next);
        let in_checkmate = in_check && no_moves;
        let in_stalemate = !in_check && no_moves;

        let mut captured = self.captured.clone();
        if let Some(piece) = applied.captured {
            captured.record(piece);
        }

        let san = notate(from, to, applied.moved, applied.captured, in_check, in_checkmate);
        debug!("{} plays {san}", self.to_move);

        let mut moves = self.moves.clone();
        moves.push(san);

        let state = GameState {
            board: applied.board,
            to_move: next,
            selected: None,
            legal_moves: Vec::new(),
            captured,
            in_check,
            in_checkmate,
            in_stalemate,
            moves,
        };
        if let Some(outcome) = state.outcome() {
            debug!("game over: {outcome:?}");
        }
        state
    }

    /// Back to the starting position.
    #[must_use]
    pub fn reset(&self) -> GameState {
        debug!("reset after {} moves", self.moves.len());
        GameState::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
