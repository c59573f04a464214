//! Authoritative game state.
//!
//! A `GameState` is never mutated by play: `make_move` builds the complete
//! successor (board, rights, clocks, histories and derived status) and leaves
//! `self` untouched. The status is recomputed from the rest of the state every
//! time a state is built and cannot be set from outside.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_status::get_game_status;
use crate::move_generation::legal_move_apply::apply_move;
use crate::search::zobrist::position_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,

    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    /// Moves played from the starting position, one per ply.
    pub move_history: Vec<Move>,
    /// Position key after each ply.
    pub position_history: Vec<u64>,
    /// Captured pieces, indexed by the captured piece's color.
    pub captured_pieces: [Vec<Piece>; 2],
    pub last_move: Option<Move>,

    /// FEN the game started from when it was not the standard layout.
    pub setup_fen: Option<String>,

    status: GameStatus,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, light to move, full rights, empty history.
    pub fn new_game() -> Self {
        Self {
            board: Board::initial(),
            side_to_move: Color::Light,
            castling_rights: CastlingRights::ALL,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            move_history: Vec::new(),
            position_history: Vec::new(),
            captured_pieces: [Vec::new(), Vec::new()],
            last_move: None,
            setup_fen: None,
            status: GameStatus::Playing,
        }
    }

    /// Build a state from raw position fields; history starts empty.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            ..Self::new_game()
        };
        state.status = get_game_status(&state);
        state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Play `mv` and return the successor state.
    ///
    /// `mv` must come from the legal-move queries; only an empty origin square
    /// is detected, nothing else is re-validated.
    pub fn make_move(&self, mv: Move) -> ChessResult<GameState> {
        let applied = apply_move(self, mv).ok_or(ChessError::NoPieceOnSquare(mv.from))?;
        let next_turn = self.side_to_move.opposite();

        let mut captured_pieces = self.captured_pieces.clone();
        if let Some(captured) = applied.captured {
            captured_pieces[captured.color.index()].push(captured);
        }

        let mut move_history = Vec::with_capacity(self.move_history.len() + 1);
        move_history.extend_from_slice(&self.move_history);
        move_history.push(mv);

        let mut position_history = Vec::with_capacity(self.position_history.len() + 1);
        position_history.extend_from_slice(&self.position_history);
        position_history.push(position_key(&applied.board, next_turn));

        let fullmove_number = if applied.mover.color == Color::Dark {
            self.fullmove_number.saturating_add(1)
        } else {
            self.fullmove_number
        };

        let mut next = GameState {
            board: applied.board,
            side_to_move: next_turn,
            castling_rights: applied.castling_rights,
            en_passant_target: applied.en_passant_target,
            halfmove_clock: applied.halfmove_clock,
            fullmove_number,
            move_history,
            position_history,
            captured_pieces,
            last_move: Some(mv),
            setup_fen: self.setup_fen.clone(),
            status: GameStatus::Playing,
        };
        next.status = get_game_status(&next);
        Ok(next)
    }

    /// Pieces of `color` that have been captured so far.
    #[inline]
    pub fn captured_of(&self, color: Color) -> &[Piece] {
        &self.captured_pieces[color.index()]
    }
}
