//! Canonical chess-rule constants.
//!
//! Starting layout, draw thresholds, and the fixed squares castling depends on.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Plies without pawn move or capture after which the game is drawn.
pub const HALFMOVE_DRAW_LIMIT: u16 = 100;

/// Occurrences of one position key that draw the game.
pub const REPETITION_DRAW_COUNT: usize = 3;

pub const KING_HOME_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

/// King destination and rook destination columns for each castling side.
pub const KINGSIDE_KING_TO_COL: u8 = 6;
pub const KINGSIDE_ROOK_TO_COL: u8 = 5;
pub const QUEENSIDE_KING_TO_COL: u8 = 2;
pub const QUEENSIDE_ROOK_TO_COL: u8 = 3;
