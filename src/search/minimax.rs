//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes and black minimizes a white-positive score. Each node orders
//! captures ahead of quiet moves with a stable sort, so the remaining order is
//! the generator's board-scan order and the search is deterministic for a given
//! position. Promotions are always searched as queen promotions.

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::get_all_legal_moves;
use crate::search::board_scoring::{BoardScorer, PieceSquareScorer};

/// Reference search depth in plies.
pub const DEFAULT_SEARCH_DEPTH: u8 = 3;
/// Upper bound on configured depth.
///
/// The search recurses once per ply, so this cap is also the bound on stack
/// frames. Depths past it are clamped rather than searched with a work stack.
pub const MAX_SEARCH_DEPTH: u8 = 6;
/// Base magnitude of a checkmate score; remaining depth is added on top.
pub const MATE_SCORE: i32 = 100_000;

const INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

impl SearchConfig {
    pub fn with_depth(depth: u8) -> Self {
        Self { max_depth: depth }
    }

    /// Depth actually searched: at least one ply, at most `MAX_SEARCH_DEPTH`.
    #[inline]
    pub fn effective_depth(self) -> u8 {
        self.max_depth.clamp(1, MAX_SEARCH_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
}

/// Best move for the side to move at the reference depth, or `None` when the
/// side to move has no legal move.
pub fn get_best_move(game_state: &GameState) -> Option<Move> {
    search_best_move(game_state, &PieceSquareScorer, SearchConfig::default()).best_move
}

pub fn search_best_move<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let depth = config.effective_depth();
    let mut nodes = 0u64;
    let maximizing = game_state.side_to_move == Color::Light;

    let moves = ordered_moves(game_state);
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            best_score: leaf_score(game_state, scorer, depth),
            reached_depth: 0,
            nodes: 1,
        };
    }

    let mut alpha = -INFINITY;
    let mut beta = INFINITY;
    let mut best_move = moves[0];
    let mut best_score = if maximizing { -INFINITY } else { INFINITY };

    for mv in moves {
        let Ok(next) = game_state.make_move(mv) else {
            continue;
        };
        let score = minimax(&next, scorer, depth - 1, alpha, beta, &mut nodes);

        // Only a strictly better score replaces the incumbent.
        if maximizing && score > best_score {
            best_score = score;
            best_move = mv;
            alpha = alpha.max(score);
        } else if !maximizing && score < best_score {
            best_score = score;
            best_move = mv;
            beta = beta.min(score);
        }
    }

    SearchResult {
        best_move: Some(best_move),
        best_score,
        reached_depth: depth,
        nodes,
    }
}

fn minimax<S: BoardScorer + ?Sized>(
    game_state: &GameState,
    scorer: &S,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 || game_state.status().is_terminal() {
        return leaf_score(game_state, scorer, depth);
    }

    let maximizing = game_state.side_to_move == Color::Light;
    let mut best = if maximizing { -INFINITY } else { INFINITY };

    for mv in ordered_moves(game_state) {
        let Ok(next) = game_state.make_move(mv) else {
            continue;
        };
        let score = minimax(&next, scorer, depth - 1, alpha, beta, nodes);

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(best);
        } else {
            best = best.min(score);
            beta = beta.min(best);
        }
        if beta <= alpha {
            break;
        }
    }

    best
}

/// Score of a node that is not expanded further.
///
/// A mated side to move loses by `MATE_SCORE + depth`, so mates found with more
/// depth remaining (closer to the root) weigh more.
fn leaf_score<S: BoardScorer + ?Sized>(game_state: &GameState, scorer: &S, depth: u8) -> i32 {
    match game_state.status() {
        GameStatus::Checkmate => {
            let magnitude = MATE_SCORE + i32::from(depth);
            match game_state.side_to_move {
                Color::Light => -magnitude,
                Color::Dark => magnitude,
            }
        }
        GameStatus::Stalemate | GameStatus::Draw(_) => 0,
        GameStatus::Playing | GameStatus::Check => scorer.score(game_state),
    }
}

#[inline]
fn is_capture(game_state: &GameState, mv: Move) -> bool {
    !game_state.board.is_empty_at(mv.to) || mv.special == SpecialMove::EnPassant
}

/// Legal moves of the side to move, captures first, promotions as queens.
pub fn ordered_moves(game_state: &GameState) -> Vec<Move> {
    let mut moves: Vec<Move> = get_all_legal_moves(game_state, game_state.side_to_move)
        .into_iter()
        .map(|mv| match mv.special {
            SpecialMove::Promotion(_) => mv.with_promotion(PieceKind::Queen),
            _ => mv,
        })
        .collect();
    moves.sort_by_key(|mv| !is_capture(game_state, *mv));
    moves
}

#[cfg(test)]
mod tests {
    use super::{
        get_best_move, ordered_moves, search_best_move, SearchConfig, MATE_SCORE,
        MAX_SEARCH_DEPTH,
    };
    use crate::game_state::chess_types::*;
    use crate::search::board_scoring::{MaterialScorer, PieceSquareScorer};
    use crate::utils::fen_parser::parse_fen;
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn best_lan(fen: &str) -> String {
        let game = parse_fen(fen).expect("FEN should parse");
        let mv = get_best_move(&game).expect("a legal move exists");
        move_to_long_algebraic(mv)
    }

    #[test]
    fn finds_back_rank_mate_for_white() {
        assert_eq!(best_lan("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1"), "a1a8");
    }

    #[test]
    fn finds_back_rank_mate_for_black() {
        assert_eq!(best_lan("r5k1/8/8/8/8/8/5PPP/6K1 b - - 0 1"), "a8a1");
    }

    #[test]
    fn mate_score_dominates_material() {
        let game = parse_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let result = search_best_move(&game, &PieceSquareScorer, SearchConfig::default());
        assert!(result.best_score > MATE_SCORE, "got {}", result.best_score);
        assert_eq!(result.reached_depth, 3);
        assert!(result.nodes > 0);
    }

    #[test]
    fn takes_a_hanging_queen() {
        let game = parse_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1").expect("FEN should parse");
        let result = search_best_move(&game, &MaterialScorer, SearchConfig::with_depth(2));
        let mv = result.best_move.expect("a legal move exists");
        assert_eq!(move_to_long_algebraic(mv), "d1d5");
    }

    #[test]
    fn no_move_when_game_is_over() {
        let mated = parse_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        assert_eq!(get_best_move(&mated), None);
        let stalemated = parse_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let result = search_best_move(&stalemated, &PieceSquareScorer, SearchConfig::default());
        assert_eq!(result.best_move, None);
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn depth_is_clamped() {
        assert_eq!(SearchConfig::with_depth(0).effective_depth(), 1);
        assert_eq!(SearchConfig::with_depth(40).effective_depth(), MAX_SEARCH_DEPTH);
        assert_eq!(SearchConfig::default().effective_depth(), 3);
    }

    #[test]
    fn oversized_depth_searches_at_the_cap() {
        let game = parse_fen("7k/8/8/8/8/8/P7/K7 w - - 0 1").expect("FEN should parse");
        let result = search_best_move(&game, &PieceSquareScorer, SearchConfig::with_depth(u8::MAX));
        assert_eq!(result.reached_depth, MAX_SEARCH_DEPTH);
        assert!(result.best_move.is_some());
    }

    #[test]
    fn captures_are_ordered_first_and_promotions_are_queens() {
        let game = parse_fen("3r3k/4P3/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let moves = ordered_moves(&game);
        assert_eq!(moves[0].to, Square::new(0, 3));
        assert_eq!(moves[0].promotion_piece(), Some(PieceKind::Queen));
        assert!(moves
            .iter()
            .filter_map(|mv| mv.promotion_piece())
            .all(|kind| kind == PieceKind::Queen));
    }

    #[test]
    fn search_is_deterministic() {
        let game = GameState::new_game();
        let first = get_best_move(&game);
        assert!(first.is_some());
        assert_eq!(get_best_move(&game), first);
    }
}
