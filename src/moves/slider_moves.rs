//! Ray directions and ray casting for bishops, rooks and queens.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Piece, Square};

pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
];

/// Walk from `from` (exclusive) along `direction`.
///
/// Returns the empty squares passed over and the first occupied square with its
/// piece, if the ray hits one before the edge.
pub fn cast_ray(
    board: &Board,
    from: Square,
    direction: (i8, i8),
) -> (Vec<Square>, Option<(Square, Piece)>) {
    let mut empty = Vec::with_capacity(7);
    let mut cursor = from;
    while let Some(next) = cursor.offset(direction.0, direction.1) {
        if let Some(piece) = board.piece_at(next) {
            return (empty, Some((next, piece)));
        }
        empty.push(next);
        cursor = next;
    }
    (empty, None)
}

/// First piece met along `direction`, ignoring the squares before it.
#[inline]
pub fn first_blocker(board: &Board, from: Square, direction: (i8, i8)) -> Option<(Square, Piece)> {
    let mut cursor = from;
    while let Some(next) = cursor.offset(direction.0, direction.1) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        cursor = next;
    }
    None
}
