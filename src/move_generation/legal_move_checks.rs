//! Square-attack queries used for check detection and castling safety.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, PieceKind, Square};
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::slider_moves::{first_blocker, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.find_king(color)
}

/// Whether `color`'s king is attacked. A board without that king is never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// True if any `attacker_color` piece could capture on `square` next move.
pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    let row = square.row as i8;
    let col = square.col as i8;
    let holds = |r: i8, c: i8, kind: PieceKind| {
        board
            .get(r, c)
            .is_some_and(|p| p.kind == kind && p.color == attacker_color)
    };

    // An attacking pawn sits one row behind the square from its own point of view.
    let pawn_row = row - attacker_color.pawn_direction();
    if holds(pawn_row, col - 1, PieceKind::Pawn) || holds(pawn_row, col + 1, PieceKind::Pawn) {
        return true;
    }

    if KNIGHT_OFFSETS
        .iter()
        .any(|(dr, dc)| holds(row + dr, col + dc, PieceKind::Knight))
    {
        return true;
    }

    if KING_OFFSETS
        .iter()
        .any(|(dr, dc)| holds(row + dr, col + dc, PieceKind::King))
    {
        return true;
    }

    let slider_hits = |directions: &[(i8, i8)], kind: PieceKind| {
        directions.iter().any(|dir| {
            first_blocker(board, square, *dir).is_some_and(|(_, p)| {
                p.color == attacker_color && (p.kind == kind || p.kind == PieceKind::Queen)
            })
        })
    };

    slider_hits(&BISHOP_DIRECTIONS, PieceKind::Bishop) || slider_hits(&ROOK_DIRECTIONS, PieceKind::Rook)
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};
    use crate::utils::fen_parser::parse_fen;

    #[test]
    fn initial_position_attacks() {
        let board = Board::initial();
        // e3 and f3 are covered by light pawns and the g1 knight.
        assert!(is_square_attacked(&board, Square::new(5, 4), Color::Light));
        assert!(is_square_attacked(&board, Square::new(5, 5), Color::Light));
        // Nothing reaches e4 yet.
        assert!(!is_square_attacked(&board, Square::new(4, 4), Color::Light));
        assert!(!is_king_in_check(&board, Color::Light));
    }

    #[test]
    fn sliders_are_blocked_by_first_piece() {
        let state = parse_fen("4k3/8/8/8/4p3/8/8/4R2K w - - 0 1").expect("FEN should parse");
        // Rook on e1 sees e4 but not e5 through the pawn.
        assert!(is_square_attacked(&state.board, Square::new(4, 4), Color::Light));
        assert!(!is_square_attacked(&state.board, Square::new(3, 4), Color::Light));
    }

    #[test]
    fn pawn_attacks_point_forward_only() {
        let state = parse_fen("4k3/8/8/3p4/8/8/8/4K3 w - - 0 1").expect("FEN should parse");
        // Dark pawn on d5 attacks c4 and e4, not c6.
        assert!(is_square_attacked(&state.board, Square::new(4, 2), Color::Dark));
        assert!(is_square_attacked(&state.board, Square::new(4, 4), Color::Dark));
        assert!(!is_square_attacked(&state.board, Square::new(2, 2), Color::Dark));
    }

    #[test]
    fn queen_on_diagonal_gives_check() {
        let state = parse_fen("4k3/8/8/8/7q/8/8/4K3 w - - 0 1").expect("FEN should parse");
        assert!(is_king_in_check(&state.board, Color::Light));
        assert!(!is_king_in_check(&state.board, Color::Dark));
    }
}
