//! Square name conversions.
//!
//! Algebraic names are file letter (a-h by column) plus rank digit, where the
//! rank is `8 - row` because rows run from rank 8 down to rank 1.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

pub const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// Convert a square name such as `"e4"` to a square.
#[inline]
pub fn algebraic_to_square(name: &str) -> ChessResult<Square> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquareName(name.to_owned()));
    }

    let col = file - b'a';
    let row = 8 - (rank - b'0');
    Ok(Square::new(row, col))
}

#[inline]
pub fn file_char(col: u8) -> char {
    char::from(b'a' + col)
}

#[inline]
pub fn rank_char(row: u8) -> char {
    char::from(b'0' + (8 - row))
}

/// Convert a square to its name, for example row 4 col 4 to `"e4"`.
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    let mut out = String::with_capacity(2);
    out.push(file_char(square.col));
    out.push(rank_char(square.row));
    out
}
