//! Plain-text position and history serializers for external consumers.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{expand_promotions, get_all_legal_moves};
use crate::utils::san::move_to_san;

/// One line per rank, rank 8 first: `8: r n b q k b n r`.
///
/// White pieces are uppercase, black lowercase, empty squares `.`.
pub fn board_to_description(game_state: &GameState) -> String {
    let mut lines = Vec::with_capacity(8);
    for row in 0..8u8 {
        let cells: Vec<String> = (0..8u8)
            .map(|col| match game_state.board.piece_at(Square::new(row, col)) {
                Some(piece) => piece.fen_char().to_string(),
                None => ".".to_owned(),
            })
            .collect();
        lines.push(format!("{}: {}", 8 - row, cells.join(" ")));
    }
    lines.join("\n")
}

/// The state the game's history was played from.
pub fn initial_state_of(game_state: &GameState) -> ChessResult<GameState> {
    match &game_state.setup_fen {
        Some(fen) => GameState::from_fen(fen),
        None => Ok(GameState::new_game()),
    }
}

/// SAN of every ply paired with the position it was played in.
pub fn history_san(game_state: &GameState) -> ChessResult<Vec<String>> {
    let mut state = initial_state_of(game_state)?;
    let mut sans = Vec::with_capacity(game_state.move_history.len());
    for mv in &game_state.move_history {
        sans.push(move_to_san(&state, *mv)?);
        state = state.make_move(*mv)?;
    }
    Ok(sans)
}

/// Numbered SAN movetext, for example `1. e4 e5 2. Nf3`.
///
/// The history is replayed from the start position (or the setup FEN) so every
/// move is written with its own disambiguation and check suffix.
pub fn move_history_to_string(game_state: &GameState) -> ChessResult<String> {
    let initial = initial_state_of(game_state)?;
    let sans = history_san(game_state)?;
    Ok(number_movetext(
        &sans,
        initial.fullmove_number,
        initial.side_to_move,
    ))
}

/// Join SAN plies into numbered movetext, starting at `first_number`.
pub fn number_movetext(sans: &[String], first_number: u16, first_mover: Color) -> String {
    let mut parts = Vec::with_capacity(sans.len());
    let mut number = first_number;
    let mut mover = first_mover;

    for (ply, san) in sans.iter().enumerate() {
        match mover {
            Color::Light => parts.push(format!("{number}. {san}")),
            Color::Dark if ply == 0 => parts.push(format!("{number}... {san}")),
            Color::Dark => parts.push(san.clone()),
        }
        if mover == Color::Dark {
            number = number.saturating_add(1);
        }
        mover = mover.opposite();
    }

    parts.join(" ")
}

/// Sorted SAN of every legal move for the side to move, with each promotion
/// listed once per promotion piece.
pub fn legal_moves_san(game_state: &GameState) -> ChessResult<Vec<String>> {
    let moves = get_all_legal_moves(game_state, game_state.side_to_move);
    let mut sans = expand_promotions(&moves)
        .into_iter()
        .map(|mv| move_to_san(game_state, mv))
        .collect::<ChessResult<Vec<String>>>()?;
    sans.sort();
    Ok(sans)
}

#[cfg(test)]
mod tests {
    use super::{board_to_description, legal_moves_san, move_history_to_string};
    use crate::game_state::chess_types::*;
    use crate::utils::san::san_to_move;

    fn play_san(game: &GameState, moves: &[&str]) -> GameState {
        let mut state = game.clone();
        for text in moves {
            let mv = san_to_move(&state, text).expect("SAN should resolve");
            state = state.make_move(mv).expect("move should apply");
        }
        state
    }

    #[test]
    fn describes_start_position() {
        let text = board_to_description(&GameState::new_game());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "8: r n b q k b n r");
        assert_eq!(lines[4], "4: . . . . . . . .");
        assert_eq!(lines[7], "1: R N B Q K B N R");
    }

    #[test]
    fn history_is_numbered_in_pairs() {
        let game = play_san(&GameState::new_game(), &["e4", "e5", "Nf3"]);
        assert_eq!(
            move_history_to_string(&game).expect("history should replay"),
            "1. e4 e5 2. Nf3"
        );
        assert_eq!(
            move_history_to_string(&GameState::new_game()).expect("empty history"),
            ""
        );
    }

    #[test]
    fn history_from_setup_position_starts_with_black() {
        let start =
            GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 30").expect("FEN should parse");
        let game = play_san(&start, &["Kd7", "Ra7+"]);
        assert_eq!(
            move_history_to_string(&game).expect("history should replay"),
            "30... Kd7 31. Ra7+"
        );
    }

    #[test]
    fn legal_moves_are_listed_sorted() {
        let sans = legal_moves_san(&GameState::new_game()).expect("SAN should format");
        assert_eq!(sans.len(), 20);
        assert_eq!(sans.first().map(String::as_str), Some("Na3"));
        assert!(sans.contains(&"e4".to_owned()));
    }

    #[test]
    fn every_promotion_piece_is_listed() {
        let game = GameState::from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1").expect("FEN should parse");
        let sans = legal_moves_san(&game).expect("SAN should format");
        for promotion in ["a8=B", "a8=N", "a8=Q+", "a8=R+"] {
            assert!(sans.contains(&promotion.to_owned()), "missing {promotion}");
        }
        for san in &sans {
            assert!(san_to_move(&game, san).is_some(), "{san} should resolve");
        }
    }
}
