//! PGN read/write for game history interchange.
//!
//! Movetext is written in SAN, replayed from the start position or from the
//! `FEN` header of a set-up game. Reading replays every token through the SAN
//! parser, so a PGN only loads if every move is legal in sequence.

use std::collections::BTreeMap;

use chrono::Local;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::{expand_promotions, get_all_legal_moves};
use crate::utils::san::{move_to_san, san_to_move};
use crate::utils::text_export::{history_san, initial_state_of, number_movetext};

#[derive(Debug, Clone)]
pub struct PgnGame {
    pub headers: BTreeMap<String, String>,
    pub initial_state: GameState,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Result token for a game in its current state.
pub fn result_token(game_state: &GameState) -> &'static str {
    match game_state.status() {
        GameStatus::Checkmate => match game_state.side_to_move {
            Color::Light => "0-1",
            Color::Dark => "1-0",
        },
        GameStatus::Stalemate | GameStatus::Draw(_) => "1/2-1/2",
        GameStatus::Playing | GameStatus::Check => "*",
    }
}

/// PGN with the seven standard tags, dated today.
pub fn write_pgn(game_state: &GameState, white: &str, black: &str) -> ChessResult<String> {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Duel Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), white.to_owned());
    headers.insert("Black".to_owned(), black.to_owned());
    headers.insert("Result".to_owned(), result_token(game_state).to_owned());

    write_pgn_with_headers(game_state, &headers)
}

/// PGN with caller-supplied headers. `SetUp`/`FEN` are added for set-up games.
pub fn write_pgn_with_headers(
    game_state: &GameState,
    headers: &BTreeMap<String, String>,
) -> ChessResult<String> {
    let mut headers = headers.clone();
    if let Some(fen) = &game_state.setup_fen {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), fen.clone());
    }

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    let initial = initial_state_of(game_state)?;
    let sans = history_san(game_state)?;
    let movetext = number_movetext(&sans, initial.fullmove_number, initial.side_to_move);

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    if !movetext.is_empty() {
        out.push_str(&movetext);
        out.push(' ');
    }
    out.push_str(result);
    out.push('\n');

    Ok(out)
}

pub fn read_pgn(pgn: &str) -> ChessResult<PgnGame> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext_lines = Vec::<String>::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('[') {
            let (k, v) = parse_header_line(trimmed)?;
            headers.insert(k, v);
        } else {
            movetext_lines.push(trimmed.to_owned());
        }
    }

    let initial_state = if headers.get("SetUp").map(|x| x.as_str()) == Some("1") {
        let fen = headers
            .get("FEN")
            .ok_or_else(|| invalid("SetUp is 1 but the FEN header is missing"))?;
        GameState::from_fen(fen)?
    } else {
        GameState::new_game()
    };

    let mut state = initial_state.clone();
    let mut moves = Vec::<Move>::new();
    let mut result = "*".to_owned();

    let movetext = strip_pgn_comments_and_variations(&movetext_lines.join(" "));
    for token in movetext.split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }

        let mv = resolve_move_token(&state, token)
            .ok_or_else(|| ChessError::IllegalMove(token.to_owned()))?;
        state = state.make_move(mv)?;
        moves.push(mv);
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(PgnGame {
        headers,
        initial_state,
        moves,
        final_state: state,
        result,
    })
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidPgn(msg.to_owned())
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    if !line.starts_with('[') || !line.ends_with(']') {
        return Err(invalid(&format!("header line {line}")));
    }
    let inner = &line[1..line.len() - 1];
    let mut parts = inner.splitn(2, ' ');
    let key = parts
        .next()
        .ok_or_else(|| invalid(&format!("header key {line}")))?
        .trim();
    let value_raw = parts
        .next()
        .ok_or_else(|| invalid(&format!("header value {line}")))?
        .trim();

    if !value_raw.starts_with('"') || !value_raw.ends_with('"') || value_raw.len() < 2 {
        return Err(invalid(&format!("unquoted header value {line}")));
    }
    let value = value_raw[1..value_raw.len() - 1].replace("\\\"", "\"");
    Ok((key.to_owned(), value))
}

fn strip_pgn_comments_and_variations(text: &str) -> String {
    let mut out = String::new();
    let mut brace_depth = 0usize;
    let mut paren_depth = 0usize;

    for ch in text.chars() {
        match ch {
            '{' => brace_depth = brace_depth.saturating_add(1),
            '}' => brace_depth = brace_depth.saturating_sub(1),
            '(' => paren_depth = paren_depth.saturating_add(1),
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ if brace_depth == 0 && paren_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    out
}

fn is_move_number_token(token: &str) -> bool {
    if token.ends_with('.') {
        return token
            .trim_end_matches('.')
            .chars()
            .all(|c| c.is_ascii_digit());
    }
    if token.contains("...") {
        let head = token.split("...").next().unwrap_or_default();
        return !head.is_empty() && head.chars().all(|c| c.is_ascii_digit());
    }
    false
}

fn trim_annotation_suffix(token: &str) -> &str {
    token.trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

/// Match a movetext token, tolerating missing or extra check marks.
fn resolve_move_token(state: &GameState, token: &str) -> Option<Move> {
    san_to_move(state, token).or_else(|| {
        let wanted = trim_annotation_suffix(token);
        expand_promotions(&get_all_legal_moves(state, state.side_to_move))
            .into_iter()
            .find(|mv| {
                move_to_san(state, *mv)
                    .map(|san| trim_annotation_suffix(&san) == wanted)
                    .unwrap_or(false)
            })
    })
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::{read_pgn, result_token, write_pgn, write_pgn_with_headers};
    use std::collections::BTreeMap;

    use crate::chess_errors::ChessError;
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
    fn pgn_round_trip_start_position_history() {
        let game = play_san(&GameState::new_game(), &["e4", "e5", "Nf3", "Nc6"]);

        let pgn = write_pgn(&game, "Human", "Engine").expect("PGN should write");
        assert!(pgn.contains("1. e4 e5 2. Nf3 Nc6 *"));
        assert!(pgn.contains("[White \"Human\"]"));

        let parsed = read_pgn(&pgn).expect("PGN should parse");
        assert_eq!(parsed.moves, game.move_history);
        assert_eq!(parsed.final_state.get_fen(), game.get_fen());
        assert_eq!(parsed.result, "*");
    }

    #[test]
    fn finished_game_carries_result_token() {
        let game = play_san(
            &GameState::new_game(),
            &["e4", "e5", "Bc4", "Nc6", "Qh5", "Nf6", "Qxf7#"],
        );
        assert_eq!(result_token(&game), "1-0");
        let pgn = write_pgn(&game, "White", "Black").expect("PGN should write");
        assert!(pgn.contains("4. Qxf7# 1-0"));
        assert_eq!(read_pgn(&pgn).expect("PGN should parse").final_state.status(), GameStatus::Checkmate);
    }

    #[test]
    fn pgn_round_trip_custom_fen_setup() {
        let initial =
            GameState::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").expect("FEN should parse");
        let game = play_san(&initial, &["e4"]);

        let mut headers = BTreeMap::<String, String>::new();
        headers.insert("Event".to_owned(), "Custom".to_owned());
        headers.insert("Result".to_owned(), "1-0".to_owned());

        let pgn = write_pgn_with_headers(&game, &headers).expect("PGN should write");
        let parsed = read_pgn(&pgn).expect("PGN should parse");

        assert_eq!(parsed.initial_state.get_fen(), initial.get_fen());
        assert_eq!(parsed.moves, game.move_history);
        assert_eq!(parsed.result, "1-0");
    }

    #[test]
    fn comments_variations_and_missing_check_marks_are_tolerated() {
        let pgn = "1. e4 {best by test} e5 (1... c5) 2. Bc4 Nc6 3. Qh5 Nf6?? 4. Qxf7 1-0";
        let parsed = read_pgn(pgn).expect("PGN should parse");
        assert_eq!(parsed.moves.len(), 7);
        assert_eq!(parsed.final_state.status(), GameStatus::Checkmate);
        assert_eq!(parsed.result, "1-0");
    }

    #[test]
    fn illegal_movetext_is_an_error() {
        assert!(matches!(read_pgn("1. e4 e4"), Err(ChessError::IllegalMove(_))));
        assert!(matches!(read_pgn("[Event \"x\"\n1. e4"), Err(ChessError::InvalidPgn(_))));
    }
}
