//! FEN-to-GameState parser.
//!
//! FEN lists ranks from 8 down to 1, which matches row order directly. The
//! resulting state has empty history and remembers the FEN it came from.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    // Clocks are optional; many position sources omit them.
    let halfmove_part = parts.next().unwrap_or("0");
    let fullmove_part = parts.next().unwrap_or("1");

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    for color in [Color::Light, Color::Dark] {
        let kings = board
            .pieces_of(color)
            .filter(|(_, p)| p.kind == PieceKind::King)
            .count();
        if kings != 1 {
            return Err(invalid(&format!("{color:?} must have exactly one king, found {kings}")));
        }
    }

    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_target = parse_en_passant_square(en_passant_part, side_to_move)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("halfmove clock {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(&format!("fullmove number {fullmove_part}")))?;

    let mut game_state = GameState::from_position(
        board,
        side_to_move,
        castling_rights,
        en_passant_target,
        halfmove_clock,
        fullmove_number,
    );
    if fen.split_whitespace().collect::<Vec<_>>().join(" ") != STARTING_POSITION_FEN {
        game_state.setup_fen = Some(fen.trim().to_owned());
    }
    Ok(game_state)
}

fn invalid(msg: &str) -> ChessError {
    ChessError::InvalidFen(msg.to_owned())
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut col = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(&format!("empty-square count '{ch}'")));
                }
                col += empty_count as usize;
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| invalid(&format!("piece character '{ch}'")))?;
            if col >= 8 {
                return Err(invalid("rank has too many files"));
            }
            if piece.kind == PieceKind::Pawn && (row == 0 || row == 7) {
                return Err(invalid("pawn on a back rank"));
            }
            board.set(Square::new(row as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::Light),
        "b" => Ok(Color::Dark),
        _ => Err(invalid(&format!("side to move {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.light_kingside = true,
            'Q' => rights.light_queenside = true,
            'k' => rights.dark_kingside = true,
            'q' => rights.dark_queenside = true,
            _ => return Err(invalid(&format!("castling rights character {ch}"))),
        }
    }

    Ok(rights)
}

/// The target sits behind a pawn that just advanced two squares, so it lies on
/// rank 6 when light is to move and on rank 3 when dark is.
fn parse_en_passant_square(
    en_passant_part: &str,
    side_to_move: Color,
) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| invalid(&format!("en-passant square {en_passant_part}")))?;
    let expected_row = match side_to_move {
        Color::Light => 2,
        Color::Dark => 5,
    };
    if square.row != expected_row {
        return Err(invalid(&format!(
            "en-passant square {en_passant_part} on the wrong rank"
        )));
    }
    Ok(Some(square))
}
