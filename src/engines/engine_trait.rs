//! Engine abstraction used by the console front-end.
//!
//! Defines common request parameters and output payloads so different move
//! choosers can be selected at runtime behind a single trait object.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{GameState, Move};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for this request.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    /// Diagnostics in `info string ...` form, one per line.
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams)
        -> ChessResult<EngineOutput>;
}
