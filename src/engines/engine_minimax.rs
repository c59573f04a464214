//! Minimax engine.
//!
//! Wraps the fixed-depth alpha-beta search behind the `Engine` trait and reports
//! the searched depth, node count and score as info lines.

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};
use crate::search::minimax::{search_best_move, SearchConfig};
use crate::utils::long_algebraic::move_to_long_algebraic;

pub struct MinimaxEngine<S: BoardScorer = PieceSquareScorer> {
    scorer: S,
    config: SearchConfig,
}

impl MinimaxEngine<PieceSquareScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(PieceSquareScorer, config)
    }
}

impl Default for MinimaxEngine<PieceSquareScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> MinimaxEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }
}

impl<S: BoardScorer> Engine for MinimaxEngine<S> {
    fn name(&self) -> &str {
        "Duel Chess Minimax"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let config = match params.depth {
            Some(depth) => SearchConfig::with_depth(depth),
            None => self.config,
        };
        let result = search_best_move(game_state, &self.scorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::with_capacity(2),
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score cp {}",
            result.reached_depth, result.nodes, result.best_score
        ));
        if let Some(mv) = result.best_move {
            out.info_lines.push(format!(
                "info string minimax_engine bestmove {}",
                move_to_long_algebraic(mv)
            ));
        }
        Ok(out)
    }
}
