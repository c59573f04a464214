//! Coordinate ("long algebraic") move text such as `e2e4` or `e7e8q`.
//!
//! Parsing only ever returns a move taken from the legal-move list of the side
//! to move, so the result can be handed to `GameState::make_move` as-is.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::get_legal_moves;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub fn move_to_long_algebraic(mv: Move) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(mv.from));
    out.push_str(&square_to_algebraic(mv.to));
    if let Some(kind) = mv.promotion_piece() {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

/// Resolve coordinate text against the legal moves of the side to move.
///
/// A promotion without a trailing piece letter promotes to a queen. The letter
/// is accepted in either case.
pub fn long_algebraic_to_move(text: &str, game_state: &GameState) -> ChessResult<Move> {
    let text = text.trim();
    let illegal = || ChessError::IllegalMove(text.to_owned());

    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(illegal());
    }

    let from = algebraic_to_square(&text[0..2]).map_err(|_| illegal())?;
    let to = algebraic_to_square(&text[2..4]).map_err(|_| illegal())?;
    let promotion = match text[4..].chars().next() {
        Some(ch) => Some(promotion_from_char(ch).ok_or_else(illegal)?),
        None => None,
    };

    let mover = game_state.board.piece_at(from).ok_or_else(illegal)?;
    if mover.color != game_state.side_to_move {
        return Err(illegal());
    }

    let candidate = get_legal_moves(game_state, from)
        .into_iter()
        .find(|mv| mv.to == to)
        .ok_or_else(illegal)?;

    match (candidate.special, promotion) {
        (SpecialMove::Promotion(_), Some(kind)) => Ok(candidate.with_promotion(kind)),
        (SpecialMove::Promotion(_), None) => Ok(candidate.with_promotion(PieceKind::Queen)),
        (_, None) => Ok(candidate),
        (_, Some(_)) => Err(illegal()),
    }
}

fn promotion_from_char(ch: char) -> Option<PieceKind> {
    PieceKind::from_letter(ch.to_ascii_uppercase()).filter(|kind| PROMOTION_KINDS.contains(kind))
}
