//! Pseudo-legal pawn moves: pushes, captures, promotion and en passant.

use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::{
    en_passant_victim_square, pawn_attack_targets, pawn_promotion_row, pawn_start_row,
};

pub fn generate_pawn_moves(game_state: &GameState, from: Square, pawn: Piece, out: &mut Vec<Move>) {
    let board = &game_state.board;
    let side = pawn.color;
    let dir = side.pawn_direction();
    let promotion_row = pawn_promotion_row(side);

    let advance_kind = |to: Square| {
        if to.row == promotion_row {
            SpecialMove::Promotion(PieceKind::Queen)
        } else {
            SpecialMove::Quiet
        }
    };

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty_at(one_step) {
            out.push(Move::new(from, one_step, advance_kind(one_step)));

            if from.row == pawn_start_row(side) {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(Move::new(from, two_step, SpecialMove::DoublePush));
                    }
                }
            }
        }
    }

    for to in pawn_attack_targets(side, from) {
        if board.piece_at(to).is_some_and(|target| target.color != side) {
            out.push(Move::new(from, to, advance_kind(to)));
        }
    }

    if let Some(target) = game_state.en_passant_target {
        let adjacent = target.row as i8 == from.row as i8 + dir
            && (target.col as i8 - from.col as i8).abs() == 1;
        let victim_present = en_passant_victim_square(side, target)
            .and_then(|sq| board.piece_at(sq))
            .is_some_and(|p| p.kind == PieceKind::Pawn && p.color != side);
        if adjacent && victim_present && board.is_empty_at(target) {
            out.push(Move::new(from, target, SpecialMove::EnPassant));
        }
    }
}
