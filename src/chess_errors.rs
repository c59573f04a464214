//! Errors used at the text boundaries of the engine.
//!
//! Rules queries never fail: absence and illegality are empty lists or `None`.
//! `ChessError` is reserved for parsing external text (FEN, PGN, square names)
//! and for applying a move whose origin square is empty, which can only happen
//! when a caller skips the legal-move queries.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;
use crate::utils::algebraic::square_to_algebraic;

pub type ChessResult<T> = Result<T, ChessError>;

/// Unified error type for the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A square name such as `e4` could not be parsed.
    InvalidSquareName(String),

    /// A FEN string was malformed.
    ///
    /// Payload: a description of the offending field.
    InvalidFen(String),

    /// PGN text could not be parsed or replayed.
    InvalidPgn(String),

    /// Move text did not match any legal move in the current position.
    IllegalMove(String),

    /// A move was applied from an empty square.
    NoPieceOnSquare(Square),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidSquareName(name) => write!(f, "invalid square name: {name}"),
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidPgn(msg) => write!(f, "invalid PGN: {msg}"),
            ChessError::IllegalMove(text) => write!(f, "illegal move: {text}"),
            ChessError::NoPieceOnSquare(square) => {
                write!(f, "no piece on {}", square_to_algebraic(*square))
            }
        }
    }
}

impl Error for ChessError {}
