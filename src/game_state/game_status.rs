//! Termination status derivation.
//!
//! Precedence: checkmate/stalemate first, then the fifty-move rule, threefold
//! repetition and insufficient material, and finally check or normal play.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{HALFMOVE_DRAW_LIMIT, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;
use crate::search::zobrist::position_key;

/// Status of the position for the side to move. Pure in the state.
pub fn get_game_status(game_state: &GameState) -> GameStatus {
    let side = game_state.side_to_move;
    let in_check = is_king_in_check(&game_state.board, side);

    if !has_any_legal_move(game_state, side) {
        return if in_check {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        };
    }

    if game_state.halfmove_clock >= HALFMOVE_DRAW_LIMIT {
        return GameStatus::Draw(DrawReason::FiftyMoveRule);
    }

    if repetition_count(game_state) >= REPETITION_DRAW_COUNT {
        return GameStatus::Draw(DrawReason::Repetition);
    }

    if has_insufficient_material(&game_state.board) {
        return GameStatus::Draw(DrawReason::InsufficientMaterial);
    }

    if in_check {
        GameStatus::Check
    } else {
        GameStatus::Playing
    }
}

/// How often the current position appears in the position history.
pub fn repetition_count(game_state: &GameState) -> usize {
    let current = position_key(&game_state.board, game_state.side_to_move);
    game_state
        .position_history
        .iter()
        .filter(|key| **key == current)
        .count()
}

/// Bare kings, king against a lone minor piece, or one bishop each on the same shade.
pub fn has_insufficient_material(board: &Board) -> bool {
    let mut light = Vec::with_capacity(16);
    let mut dark = Vec::with_capacity(16);
    for (square, piece) in board.pieces() {
        if piece.kind == PieceKind::King {
            continue;
        }
        match piece.color {
            Color::Light => light.push((square, piece.kind)),
            Color::Dark => dark.push((square, piece.kind)),
        }
    }

    let is_minor = |kind: PieceKind| matches!(kind, PieceKind::Bishop | PieceKind::Knight);

    match (light.as_slice(), dark.as_slice()) {
        ([], []) => true,
        ([], [(_, kind)]) | ([(_, kind)], []) => is_minor(*kind),
        ([(light_sq, PieceKind::Bishop)], [(dark_sq, PieceKind::Bishop)]) => {
            light_sq.shade() == dark_sq.shade()
        }
        _ => false,
    }
}
