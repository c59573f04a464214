//! Random-move engine.
//!
//! Selects uniformly from the legal moves of the side to move. Used as a
//! diagnostic opponent and to drive random playouts.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::GameState;
use crate::move_generation::legal_move_generator::get_all_legal_moves;

#[derive(Debug, Default)]
pub struct RandomEngine {
    seeded_rng: Option<StdRng>,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self { seeded_rng: None }
    }

    /// Reproducible move choices from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seeded_rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Duel Chess Random"
    }

    fn choose_move(
        &mut self,
        game_state: &GameState,
        params: &GoParams,
    ) -> ChessResult<EngineOutput> {
        let legal_moves = get_all_legal_moves(game_state, game_state.side_to_move);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        if let Some(depth) = params.depth {
            out.info_lines.push(format!(
                "info string random_engine requested_depth {} ignored",
                depth
            ));
        }

        out.best_move = match self.seeded_rng.as_mut() {
            Some(rng) => legal_moves.choose(rng).copied(),
            None => legal_moves.choose(&mut rand::rng()).copied(),
        };
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::{Engine, GoParams};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::get_all_legal_moves;
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn random_engine_picks_a_legal_move() {
        let game = GameState::new_game();
        let mut engine = RandomEngine::new();
        let out = engine
            .choose_move(&game, &GoParams::default())
            .expect("engine should answer");
        let mv = out.best_move.expect("start position has moves");
        assert!(get_all_legal_moves(&game, Color::Light).contains(&mv));
        assert!(out.info_lines[0].starts_with("info string random_engine legal_moves 20"));
    }

    #[test]
    fn seeded_engines_agree() {
        let game = GameState::new_game();
        let mut a = RandomEngine::seeded(7);
        let mut b = RandomEngine::seeded(7);
        for _ in 0..5 {
            let left = a.choose_move(&game, &GoParams::default()).expect("engine should answer");
            let right = b.choose_move(&game, &GoParams::default()).expect("engine should answer");
            assert_eq!(left.best_move, right.best_move);
        }
    }

    #[test]
    fn no_move_in_finished_game() {
        let mated = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let out = RandomEngine::seeded(1)
            .choose_move(&mated, &GoParams::default())
            .expect("engine should answer");
        assert_eq!(out.best_move, None);
    }
}
