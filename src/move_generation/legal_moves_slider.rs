//! Pseudo-legal bishop, rook and queen moves.
//!
//! Each ray contributes its empty squares and, when the first occupied square
//! holds an enemy piece, that capture.

use crate::game_state::chess_types::*;
use crate::moves::slider_moves::{cast_ray, BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

pub fn slider_directions(kind: PieceKind) -> &'static [(i8, i8)] {
    match kind {
        PieceKind::Bishop => &BISHOP_DIRECTIONS,
        PieceKind::Rook => &ROOK_DIRECTIONS,
        PieceKind::Queen => &QUEEN_DIRECTIONS,
        _ => &[],
    }
}

pub fn generate_slider_moves(game_state: &GameState, from: Square, slider: Piece, out: &mut Vec<Move>) {
    for direction in slider_directions(slider.kind) {
        let (empty, hit) = cast_ray(&game_state.board, from, *direction);
        out.extend(empty.into_iter().map(|to| Move::quiet(from, to)));
        if let Some((to, target)) = hit {
            if target.color != slider.color {
                out.push(Move::quiet(from, to));
            }
        }
    }
}
