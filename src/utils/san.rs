//! Standard algebraic notation (SAN).
//!
//! Formatting works from the legal-move list of the position so that
//! disambiguation only considers pieces that could actually reach the same
//! square. Parsing is the inverse: the text is compared against the SAN of every
//! legal move (with each promotion expanded to all four pieces), and falls back
//! to coordinate notation when nothing matches.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{expand_promotions, get_all_legal_moves};
use crate::utils::algebraic::{file_char, rank_char, square_to_algebraic};
use crate::utils::long_algebraic::long_algebraic_to_move;

/// SAN for `mv` in `game_state`, including the `+`/`#` suffix.
pub fn move_to_san(game_state: &GameState, mv: Move) -> ChessResult<String> {
    let piece = game_state
        .board
        .piece_at(mv.from)
        .ok_or(ChessError::NoPieceOnSquare(mv.from))?;

    let body = match mv.special {
        SpecialMove::CastleKingside => "O-O".to_owned(),
        SpecialMove::CastleQueenside => "O-O-O".to_owned(),
        _ => move_body(game_state, mv, piece),
    };

    let after = game_state.make_move(mv)?;
    let suffix = match after.status() {
        GameStatus::Checkmate => "#",
        GameStatus::Check => "+",
        _ => "",
    };
    Ok(body + suffix)
}

fn move_body(game_state: &GameState, mv: Move, piece: Piece) -> String {
    let destination = square_to_algebraic(mv.to);
    let is_capture =
        !game_state.board.is_empty_at(mv.to) || mv.special == SpecialMove::EnPassant;

    if piece.kind == PieceKind::Pawn {
        let mut san = String::with_capacity(6);
        if is_capture {
            san.push(file_char(mv.from.col));
            san.push('x');
        }
        san.push_str(&destination);
        if let Some(kind) = mv.promotion_piece() {
            san.push('=');
            san.push(kind.letter());
        }
        return san;
    }

    let mut san = String::with_capacity(7);
    san.push(piece.kind.letter());
    san.push_str(&disambiguation(game_state, mv, piece));
    if is_capture {
        san.push('x');
    }
    san.push_str(&destination);
    san
}

/// File, rank or full origin square needed to tell `mv` apart from rival moves.
fn disambiguation(game_state: &GameState, mv: Move, piece: Piece) -> String {
    let rivals: Vec<Square> = get_all_legal_moves(game_state, piece.color)
        .into_iter()
        .filter(|other| {
            other.to == mv.to
                && other.from != mv.from
                && game_state.board.piece_at(other.from).map(|p| p.kind) == Some(piece.kind)
        })
        .map(|other| other.from)
        .collect();

    if rivals.is_empty() {
        return String::new();
    }

    let shares_file = rivals.iter().any(|sq| sq.col == mv.from.col);
    let shares_rank = rivals.iter().any(|sq| sq.row == mv.from.row);
    if !shares_file {
        file_char(mv.from.col).to_string()
    } else if !shares_rank {
        rank_char(mv.from.row).to_string()
    } else {
        square_to_algebraic(mv.from)
    }
}

/// Resolve move text for the side to move.
///
/// Trailing `!`/`?` annotations are ignored; the check suffix is part of the
/// exact match. Returns `None` when neither SAN nor coordinate text matches a
/// legal move.
pub fn san_to_move(game_state: &GameState, text: &str) -> Option<Move> {
    let cleaned = text.trim().trim_end_matches(['!', '?']);
    if cleaned.is_empty() {
        return None;
    }

    let legal = expand_promotions(&get_all_legal_moves(game_state, game_state.side_to_move));
    let by_san = legal.iter().copied().find(|mv| {
        move_to_san(game_state, *mv)
            .map(|san| san == cleaned)
            .unwrap_or(false)
    });

    by_san.or_else(|| long_algebraic_to_move(cleaned, game_state).ok())
}

#[cfg(test)]
mod tests {
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::{move_to_san, san_to_move};
    use crate::game_state::chess_types::*;
    use crate::move_generation::legal_move_generator::{expand_promotions, get_all_legal_moves};
    use crate::utils::fen_parser::parse_fen;

    fn san_of(fen: &str, text: &str) -> String {
        let game = parse_fen(fen).expect("FEN should parse");
        let mv = san_to_move(&game, text).expect("move should resolve");
        move_to_san(&game, mv).expect("SAN should format")
    }

    #[test]
    fn opening_moves_format_plainly() {
        let game = GameState::new_game();
        let e4 = san_to_move(&game, "e4").expect("e4 is legal");
        assert_eq!(e4.from, Square::new(6, 4));
        assert_eq!(move_to_san(&game, e4).expect("SAN should format"), "e4");

        let nf3 = san_to_move(&game, "Nf3").expect("Nf3 is legal");
        assert_eq!(nf3.from, Square::new(7, 6));
    }

    #[test]
    fn castling_and_check_suffixes() {
        assert_eq!(san_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1g1"), "O-O");
        assert_eq!(san_of("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1c1"), "O-O-O");
        assert_eq!(san_of("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", "a1a8"), "Ra8+");
        assert_eq!(san_of("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1", "a1a8"), "Ra8#");
    }

    #[test]
    fn pawn_captures_promotions_and_en_passant() {
        assert_eq!(san_of("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1", "e5d6"), "exd6");
        assert_eq!(san_of("3rk3/4P3/8/8/8/8/8/4K3 w - - 0 1", "e7d8n"), "exd8=N");
        assert_eq!(san_of("k7/4P3/8/8/8/8/8/4K3 w - - 0 1", "e7e8"), "e8=Q+");
    }

    #[test]
    fn disambiguates_by_file_then_rank_then_square() {
        // Knights on b1 and f1 both reach d2.
        assert_eq!(san_of("4k3/8/8/8/8/8/8/1N2KN2 w - - 0 1", "b1d2"), "Nbd2");
        // Rooks on a1 and a5 share the a-file.
        assert_eq!(san_of("4k3/8/8/R7/8/8/8/R3K3 w - - 0 1", "a1a3"), "R1a3");
        // Queens on a1, a3 and c1 all reach b2.
        assert_eq!(san_of("4k3/8/8/8/8/Q7/8/Q1Q1K3 w - - 0 1", "a1b2"), "Qa1b2");
    }

    #[test]
    fn annotations_are_ignored_and_garbage_rejected() {
        let game = GameState::new_game();
        assert!(san_to_move(&game, "e4!?").is_some());
        assert!(san_to_move(&game, " Nc3 ").is_some());
        assert!(san_to_move(&game, "e5").is_none());
        assert!(san_to_move(&game, "Ke2").is_none());
        assert!(san_to_move(&game, "").is_none());
        assert!(san_to_move(&game, "hello").is_none());
    }

    #[test]
    fn san_round_trips_over_random_games() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        for _ in 0..3 {
            let mut game = GameState::new_game();
            for _ in 0..30 {
                if game.status().is_terminal() {
                    break;
                }
                let moves = expand_promotions(&get_all_legal_moves(&game, game.side_to_move));
                for mv in &moves {
                    let san = move_to_san(&game, *mv).expect("SAN should format");
                    assert_eq!(san_to_move(&game, &san), Some(*mv), "round trip of {san}");
                }
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                game = game.make_move(*mv).expect("legal move should apply");
            }
        }
    }
}
