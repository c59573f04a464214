//! Pseudo-legal knight moves.

use crate::game_state::chess_types::*;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(game_state: &GameState, from: Square, knight: Piece, out: &mut Vec<Move>) {
    for to in knight_targets(from) {
        let own_piece = game_state
            .board
            .piece_at(to)
            .is_some_and(|p| p.color == knight.color);
        if !own_piece {
            out.push(Move::quiet(from, to));
        }
    }
}
