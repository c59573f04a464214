//! Perft node counting for move generator validation.
//!
//! Every promotion is expanded to all four pieces so totals line up with the
//! published reference counts.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{expand_promotions, get_all_legal_moves};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

/// Every legal move of the side to move, with promotions expanded.
#[inline]
pub fn perft_moves(game_state: &GameState) -> Vec<Move> {
    expand_promotions(&get_all_legal_moves(game_state, game_state.side_to_move))
}

pub fn perft(game_state: &GameState, depth: u8) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in perft_moves(game_state) {
        perft_recurse(game_state, mv, depth, &mut total)?;
    }
    Ok(total)
}

/// Leaf totals per root move, in generation order.
pub fn perft_divide(game_state: &GameState, depth: u8) -> ChessResult<Vec<(Move, usize)>> {
    let mut out = Vec::new();
    if depth == 0 {
        return Ok(out);
    }
    for mv in perft_moves(game_state) {
        let mut counts = PerftCounts::default();
        perft_recurse(game_state, mv, depth, &mut counts)?;
        out.push((mv, counts.nodes));
    }
    Ok(out)
}

fn perft_recurse(
    game_state: &GameState,
    mv: Move,
    remaining: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    let next = game_state.make_move(mv)?;

    if remaining == 1 {
        counts.merge(leaf_counts(game_state, &next, mv));
        return Ok(());
    }

    for child in perft_moves(&next) {
        perft_recurse(&next, child, remaining - 1, counts)?;
    }
    Ok(())
}

fn leaf_counts(before: &GameState, after: &GameState, mv: Move) -> PerftCounts {
    let is_en_passant = mv.special == SpecialMove::EnPassant;
    let gives_check = is_king_in_check(&after.board, after.side_to_move);
    PerftCounts {
        nodes: 1,
        captures: usize::from(!before.board.is_empty_at(mv.to) || is_en_passant),
        en_passant: usize::from(is_en_passant),
        castles: usize::from(mv.is_castle()),
        promotions: usize::from(mv.promotion_piece().is_some()),
        checks: usize::from(gives_check),
        checkmates: usize::from(after.status() == GameStatus::Checkmate),
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, perft_divide, PerftCounts};
    use crate::game_state::chess_types::*;
    use crate::utils::fen_parser::parse_fen;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";
    const POSITION_4: &str = "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1";
    const POSITION_5: &str = "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8";

    fn nodes(fen: &str, depth: u8) -> usize {
        let game = parse_fen(fen).expect("FEN should parse");
        perft(&game, depth).expect("perft should run").nodes
    }

    #[test]
    fn perft_depth_zero_counts_single_node() {
        let counts = perft(&GameState::new_game(), 0).expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn start_position_counts() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 1).expect("perft should run").nodes, 20);
        assert_eq!(perft(&game, 2).expect("perft should run").nodes, 400);

        let depth_three = perft(&game, 3).expect("perft should run");
        assert_eq!(depth_three.nodes, 8902);
        assert_eq!(depth_three.captures, 34);
        assert_eq!(depth_three.checks, 12);
        assert_eq!(depth_three.checkmates, 0);
    }

    #[test]
    fn kiwipete_counts() {
        let game = parse_fen(KIWIPETE).expect("FEN should parse");
        let one = perft(&game, 1).expect("perft should run");
        assert_eq!(one.nodes, 48);
        assert_eq!(one.captures, 8);
        assert_eq!(one.castles, 2);

        let two = perft(&game, 2).expect("perft should run");
        assert_eq!(two.nodes, 2039);
        assert_eq!(two.captures, 351);
        assert_eq!(two.en_passant, 1);
        assert_eq!(two.castles, 91);
        assert_eq!(two.checks, 3);
    }

    #[test]
    fn endgame_position_counts() {
        assert_eq!(nodes(POSITION_3, 1), 14);
        assert_eq!(nodes(POSITION_3, 2), 191);
        assert_eq!(nodes(POSITION_3, 3), 2812);
    }

    #[test]
    fn promotion_heavy_positions() {
        assert_eq!(nodes(POSITION_4, 1), 6);
        assert_eq!(nodes(POSITION_4, 2), 264);
        assert_eq!(nodes(POSITION_5, 1), 44);
        assert_eq!(nodes(POSITION_5, 2), 1486);
    }

    #[test]
    fn divide_sums_to_total() {
        let game = GameState::new_game();
        let divide = perft_divide(&game, 2).expect("perft should run");
        assert_eq!(divide.len(), 20);
        assert!(divide.iter().all(|(_, count)| *count == 20));
        assert_eq!(divide.iter().map(|(_, count)| count).sum::<usize>(), 400);
    }
}
