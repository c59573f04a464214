//! Full legal move generation pipeline.
//!
//! Generates per-piece pseudo-legal moves, plays each on a board copy through
//! `relocate_pieces`, and keeps the ones that leave the mover's king unattacked.
//! `get_all_legal_moves` is the only answer to "does a legal move exist"; status
//! derivation, search and notation all go through it.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::relocate_pieces;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_slider::generate_slider_moves;

/// Pseudo-legal moves for the piece on `from`, in per-piece generation order.
pub fn generate_raw_moves(game_state: &GameState, from: Square) -> Vec<Move> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(28);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut out),
        PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut out),
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            generate_slider_moves(game_state, from, piece, &mut out)
        }
        PieceKind::King => generate_king_moves(game_state, from, piece, &mut out),
    }
    out
}

/// Whether playing `mv` keeps `color`'s king out of attack.
#[inline]
pub fn leaves_king_safe(game_state: &GameState, mv: Move, color: Color) -> bool {
    let mut board = game_state.board;
    relocate_pieces(&mut board, mv).is_some() && !is_king_in_check(&board, color)
}

/// Legal moves of the piece on `from`, whichever side it belongs to.
pub fn get_legal_moves(game_state: &GameState, from: Square) -> Vec<Move> {
    let Some(piece) = game_state.board.piece_at(from) else {
        return Vec::new();
    };
    generate_raw_moves(game_state, from)
        .into_iter()
        .filter(|mv| leaves_king_safe(game_state, *mv, piece.color))
        .collect()
}

/// Lazily yields `color`'s legal moves in board-scan order.
pub fn legal_moves_iter(game_state: &GameState, color: Color) -> impl Iterator<Item = Move> + '_ {
    game_state
        .board
        .pieces_of(color)
        .flat_map(move |(from, _)| get_legal_moves(game_state, from))
}

pub fn get_all_legal_moves(game_state: &GameState, color: Color) -> Vec<Move> {
    legal_moves_iter(game_state, color).collect()
}

/// Stops at the first legal move found.
#[inline]
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    legal_moves_iter(game_state, color).next().is_some()
}

/// One variant per promotion piece for each promotion move, other moves unchanged.
pub fn expand_promotions(moves: &[Move]) -> Vec<Move> {
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        match mv.special {
            SpecialMove::Promotion(_) => {
                out.extend(PROMOTION_KINDS.iter().map(|kind| mv.with_promotion(*kind)))
            }
            _ => out.push(*mv),
        }
    }
    out
}
