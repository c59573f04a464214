//! Crate root module declarations for the Duel Chess engine.
//!
//! Exposes the rules core (game state, move generation), notation utilities,
//! search and engines, and the console front-end under stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod game_status;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_slider;
    pub mod perft;
}

pub mod search {
    pub mod board_scoring;
    pub mod minimax;
    pub mod zobrist;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod san;
    pub mod text_export;
}

pub mod console {
    pub mod console_top;
}

pub use chess_errors::{ChessError, ChessResult};
pub use game_state::chess_types::{
    Color, GameState, GameStatus, Move, Piece, PieceKind, SpecialMove, Square,
};
pub use move_generation::legal_move_generator::{get_all_legal_moves, get_legal_moves};
pub use search::minimax::get_best_move;
pub use utils::san::{move_to_san, san_to_move};
