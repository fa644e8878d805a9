//! Error types for board operations.

use std::fmt;

use super::Square;

/// Error type for piece-placement (FEN) parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Invalid piece character in position string
    InvalidPiece { char: char },
    /// More than 8 ranks in the placement field
    InvalidRank { rank: usize },
    /// Too many files in a rank
    TooManyFiles { rank: usize, files: usize },
    /// Fewer than 8 files in a rank
    TooFewFiles { rank: usize, files: usize },
    /// Fewer than 8 ranks in the placement field
    TooFewRanks { found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "Invalid rank index {rank} in FEN")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::TooFewFiles { rank, files } => {
                write!(f, "Too few files ({files}) in rank {rank}")
            }
            FenError::TooFewRanks { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RowOutOfBounds { row } => {
                write!(f, "Row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "Column {col} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for rejected move applications
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The origin square is empty
    NoPieceAt { square: Square },
    /// The destination is not a legal move for the piece on the origin
    IllegalDestination { from: Square, to: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NoPieceAt { square } => write!(f, "No piece on {square}"),
            MoveError::IllegalDestination { from, to } => {
                write!(f, "Illegal move {from}{to}")
            }
        }
    }
}

impl std::error::Error for MoveError {}
