//! Zobrist-style position keys for repetition tracking.
//!
//! The key covers piece placement and side to move only. Castling rights and
//! the en-passant target are not folded in, so two positions that differ only
//! in those rights count as the same position for repetition.
//!
//! Keys are compile-time constants from a fixed seed, so hashes are
//! deterministic across runs.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
}

// Evaluated at compile time; read-only data, never written at run time.
static TABLES: ZobristTables = build_tables();

const fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    let mut color = 0;
    while color < 2 {
        let mut kind = 0;
        while kind < 6 {
            let mut sq = 0;
            while sq < 64 {
                let (value, next_seed) = next_random_u64(seed);
                piece_square[color][kind][sq] = value;
                seed = next_seed;
                sq += 1;
            }
            kind += 1;
        }
        color += 1;
    }

    let (side_to_move, _) = next_random_u64(seed);

    ZobristTables {
        piece_square,
        side_to_move,
    }
}

/// splitmix64 step: the output and the advanced state.
const fn next_random_u64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (z ^ (z >> 31), state)
}

#[inline]
pub fn piece_square_key(piece: Piece, square: Square) -> u64 {
    TABLES.piece_square[piece.color.index()][piece.kind.index()][square.index()]
}

/// Key for a board with `side_to_move` to play.
pub fn position_key(board: &Board, side_to_move: Color) -> u64 {
    let mut key = board
        .pieces()
        .fold(0u64, |acc, (square, piece)| acc ^ piece_square_key(piece, square));
    if side_to_move == Color::Dark {
        key ^= TABLES.side_to_move;
    }
    key
}

#[cfg(test)]
mod tests {
    use super::{piece_square_key, position_key};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn starting_position_key_is_deterministic() {
        let a = position_key(&Board::initial(), Color::Light);
        let b = position_key(&Board::initial(), Color::Light);
        assert_eq!(a, b);
    }

    #[test]
    fn side_to_move_changes_key() {
        let board = Board::initial();
        assert_ne!(
            position_key(&board, Color::Light),
            position_key(&board, Color::Dark)
        );
    }

    #[test]
    fn castling_rights_do_not_change_key() {
        let with_rights =
            parse_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").expect("FEN should parse");
        let without_rights =
            parse_fen("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").expect("FEN should parse");
        assert_eq!(
            position_key(&with_rights.board, with_rights.side_to_move),
            position_key(&without_rights.board, without_rights.side_to_move)
        );
    }

    #[test]
    fn moving_a_piece_changes_key() {
        let mut board = Board::initial();
        let before = position_key(&board, Color::Light);
        let knight = board.take(Square::new(7, 6));
        board.set(Square::new(5, 5), knight);
        assert_ne!(before, position_key(&board, Color::Light));
    }

    #[test]
    fn piece_keys_are_distinct() {
        let mut keys = Vec::with_capacity(2 * 6 * 64);
        for color in [Color::Light, Color::Dark] {
            for kind in PROMOTION_KINDS.iter().copied().chain([PieceKind::Pawn, PieceKind::King]) {
                for index in 0..64u8 {
                    let square = Square::new(index / 8, index % 8);
                    keys.push(piece_square_key(Piece::new(kind, color), square));
                }
            }
        }
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 2 * 6 * 64);
    }
}
