//! Pure move application.
//!
//! `relocate_pieces` is the single board transformation for a move: it is used
//! both here and by the legality filter, so a simulated move and a played move
//! always leave identical boards.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::{
    KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TO_COL, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TO_COL,
};
use crate::game_state::chess_types::*;
use crate::moves::pawn_moves::en_passant_victim_square;

/// Everything a move changes, computed in one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub board: Board,
    pub en_passant_target: Option<Square>,
    pub castling_rights: CastlingRights,
    pub halfmove_clock: u16,
    pub mover: Piece,
    pub captured: Option<Piece>,
}

/// Move the pieces for `mv` on `board`.
///
/// Returns the moving piece and the captured piece, or `None` when the origin
/// square is empty (the board is left untouched in that case).
pub fn relocate_pieces(board: &mut Board, mv: Move) -> Option<(Piece, Option<Piece>)> {
    let mover = board.take(mv.from)?;
    let mut captured = board.take(mv.to);

    match mv.special {
        SpecialMove::EnPassant => {
            if let Some(victim) = en_passant_victim_square(mover.color, mv.to) {
                board.take(victim);
            }
            captured = Some(Piece::new(PieceKind::Pawn, mover.color.opposite()));
        }
        SpecialMove::CastleKingside => {
            move_rook(board, mv.to.row, KINGSIDE_ROOK_COL, KINGSIDE_ROOK_TO_COL);
        }
        SpecialMove::CastleQueenside => {
            move_rook(board, mv.to.row, QUEENSIDE_ROOK_COL, QUEENSIDE_ROOK_TO_COL);
        }
        SpecialMove::Quiet | SpecialMove::DoublePush | SpecialMove::Promotion(_) => {}
    }

    let arriving = match mv.special {
        SpecialMove::Promotion(kind) => Piece::new(kind, mover.color),
        _ => mover,
    };
    board.set(mv.to, Some(arriving));

    Some((mover, captured))
}

/// Apply `mv` to a copy of the position's board and derive the new rights and clock.
pub fn apply_move(game_state: &GameState, mv: Move) -> Option<AppliedMove> {
    let mut board = game_state.board;
    let (mover, captured) = relocate_pieces(&mut board, mv)?;

    let en_passant_target = match mv.special {
        SpecialMove::DoublePush => mv.from.offset(mover.color.pawn_direction(), 0),
        _ => None,
    };

    let mut castling_rights = game_state.castling_rights;
    if mover.kind == PieceKind::King {
        castling_rights.clear_color(mover.color);
    }
    if mover.kind == PieceKind::Rook {
        castling_rights.clear_rook_home(mv.from);
    }
    // Anything landing on a rook home square removes that corner's right.
    castling_rights.clear_rook_home(mv.to);

    let halfmove_clock = if mover.kind == PieceKind::Pawn || captured.is_some() {
        0
    } else {
        game_state.halfmove_clock.saturating_add(1)
    };

    Some(AppliedMove {
        board,
        en_passant_target,
        castling_rights,
        halfmove_clock,
        mover,
        captured,
    })
}

fn move_rook(board: &mut Board, row: u8, from_col: u8, to_col: u8) {
    let rook = board.take(Square::new(row, from_col));
    board.set(Square::new(row, to_col), rook);
}
