//! Pawn geometry: advance direction, start and promotion rows, capture offsets.

use crate::game_state::chess_types::{Color, Square};

#[inline]
pub const fn pawn_start_row(color: Color) -> u8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}

#[inline]
pub const fn pawn_promotion_row(color: Color) -> u8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Squares a pawn of `color` standing on `square` attacks.
#[inline]
pub fn pawn_attack_targets(color: Color, square: Square) -> impl Iterator<Item = Square> {
    let d_row = color.pawn_direction();
    [-1i8, 1i8]
        .into_iter()
        .filter_map(move |d_col| square.offset(d_row, d_col))
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub fn en_passant_victim_square(mover: Color, to: Square) -> Option<Square> {
    to.offset(-mover.pawn_direction(), 0)
}
