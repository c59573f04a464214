//! GameState-to-FEN serializer.

use crate::game_state::chess_types::*;
use crate::utils::algebraic::square_to_algebraic;

pub fn generate_fen(game_state: &GameState) -> String {
    let mut out = String::with_capacity(90);

    for row in 0..8u8 {
        let mut empty_run = 0u8;
        for col in 0..8u8 {
            match game_state.board.piece_at(Square::new(row, col)) {
                Some(piece) => {
                    if empty_run > 0 {
                        out.push(char::from(b'0' + empty_run));
                        empty_run = 0;
                    }
                    out.push(piece.fen_char());
                }
                None => empty_run += 1,
            }
        }
        if empty_run > 0 {
            out.push(char::from(b'0' + empty_run));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out.push(' ');
    out.push(match game_state.side_to_move {
        Color::Light => 'w',
        Color::Dark => 'b',
    });

    out.push(' ');
    out.push_str(&castling_field(game_state.castling_rights));

    out.push(' ');
    match game_state.en_passant_target {
        Some(square) => out.push_str(&square_to_algebraic(square)),
        None => out.push('-'),
    }

    out.push_str(&format!(
        " {} {}",
        game_state.halfmove_clock, game_state.fullmove_number
    ));
    out
}

fn castling_field(rights: CastlingRights) -> String {
    let mut out = String::with_capacity(4);
    if rights.light_kingside {
        out.push('K');
    }
    if rights.light_queenside {
        out.push('Q');
    }
    if rights.dark_kingside {
        out.push('k');
    }
    if rights.dark_queenside {
        out.push('q');
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::generate_fen;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;
    use crate::utils::long_algebraic::long_algebraic_to_move;

    #[test]
    fn new_game_serializes_to_starting_fen() {
        assert_eq!(generate_fen(&GameState::new_game()), STARTING_POSITION_FEN);
    }

    #[test]
    fn fen_tracks_en_passant_rights_and_counters() {
        let game = GameState::new_game();
        let e4 = long_algebraic_to_move("e2e4", &game).expect("e2e4 is legal");
        let after = game.make_move(e4).expect("move should apply");
        assert_eq!(
            generate_fen(&after),
            "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
        );
    }

    #[test]
    fn parsed_fen_round_trips() {
        let fen = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w Kq - 4 12";
        let game = GameState::from_fen(fen).expect("FEN should parse");
        assert_eq!(game.get_fen(), fen);
    }
}
