//! Pseudo-legal king steps and castling.
//!
//! Castling needs the right, the king and rook on their home squares, empty
//! squares between them, and the king's start, transit and destination squares
//! free of attack.

use crate::game_state::chess_rules::{
    KINGSIDE_KING_TO_COL, KINGSIDE_ROOK_COL, KING_HOME_COL, QUEENSIDE_KING_TO_COL,
    QUEENSIDE_ROOK_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(game_state: &GameState, from: Square, king: Piece, out: &mut Vec<Move>) {
    for to in king_targets(from) {
        let own_piece = game_state
            .board
            .piece_at(to)
            .is_some_and(|p| p.color == king.color);
        if !own_piece {
            out.push(Move::quiet(from, to));
        }
    }

    generate_castling_moves(game_state, from, king.color, out);
}

fn generate_castling_moves(game_state: &GameState, king_from: Square, side: Color, out: &mut Vec<Move>) {
    let home_row = side.home_row();
    if king_from != Square::new(home_row, KING_HOME_COL) {
        return;
    }

    let rights = game_state.castling_rights;
    if rights.kingside(side)
        && castling_path_clear(game_state, side, KINGSIDE_ROOK_COL, &[5, 6], &[4, 5, 6])
    {
        out.push(Move::new(
            king_from,
            Square::new(home_row, KINGSIDE_KING_TO_COL),
            SpecialMove::CastleKingside,
        ));
    }
    if rights.queenside(side)
        && castling_path_clear(game_state, side, QUEENSIDE_ROOK_COL, &[1, 2, 3], &[4, 3, 2])
    {
        out.push(Move::new(
            king_from,
            Square::new(home_row, QUEENSIDE_KING_TO_COL),
            SpecialMove::CastleQueenside,
        ));
    }
}

fn castling_path_clear(
    game_state: &GameState,
    side: Color,
    rook_col: u8,
    empty_cols: &[u8],
    safe_cols: &[u8],
) -> bool {
    let board = &game_state.board;
    let row = side.home_row();
    let rook_home = board.piece_at(Square::new(row, rook_col));
    if rook_home != Some(Piece::new(PieceKind::Rook, side)) {
        return false;
    }
    if !empty_cols
        .iter()
        .all(|col| board.is_empty_at(Square::new(row, *col)))
    {
        return false;
    }
    safe_cols
        .iter()
        .all(|col| !is_square_attacked(board, Square::new(row, *col), side.opposite()))
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    fn castles(fen: &str) -> Vec<SpecialMove> {
        let game = parse_fen(fen).expect("FEN should parse");
        let from = game
            .board
            .find_king(game.side_to_move)
            .expect("side to move has a king");
        let king = game.board.piece_at(from).expect("king square occupied");
        let mut out = Vec::new();
        generate_king_moves(&game, from, king, &mut out);
        out.into_iter()
            .map(|m| m.special)
            .filter(|s| matches!(s, SpecialMove::CastleKingside | SpecialMove::CastleQueenside))
            .collect()
    }

    #[test]
    fn both_sides_available_on_open_back_rank() {
        let found = castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(found, vec![SpecialMove::CastleKingside, SpecialMove::CastleQueenside]);
    }

    #[test]
    fn attacked_transit_square_blocks_castling() {
        // Dark rook on f8 covers f1.
        let found = castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1");
        assert_eq!(found, vec![SpecialMove::CastleQueenside]);
    }

    #[test]
    fn attacked_b_file_square_does_not_block_queenside() {
        // Only the king's own path matters; b1 may be attacked.
        let found = castles("1r2k3/8/8/8/8/8/8/R3K3 w Q - 0 1");
        assert_eq!(found, vec![SpecialMove::CastleQueenside]);
    }

    #[test]
    fn occupied_square_between_king_and_rook_blocks_castling() {
        let found = castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1");
        assert_eq!(found, vec![SpecialMove::CastleKingside]);
    }

    #[test]
    fn missing_rook_blocks_castling_even_with_stale_right() {
        let found = castles("4k3/8/8/8/8/8/8/4K2R w KQ - 0 1");
        assert_eq!(found, vec![SpecialMove::CastleKingside]);
    }

    #[test]
    fn king_in_check_cannot_castle() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").is_empty());
    }
}
