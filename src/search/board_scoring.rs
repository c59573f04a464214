//! Pluggable board evaluation.
//!
//! Search delegates static scoring to `BoardScorer` so alternate heuristics can
//! be swapped without touching the search. Scores are always white-positive:
//! white material and placement add, black subtracts.

use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score with white ahead positive, independent of the side to move.
    fn score(&self, game_state: &GameState) -> i32;
}

#[inline]
pub const fn piece_value(piece: PieceKind) -> i32 {
    match piece {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 320,
        PieceKind::Bishop => 330,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 20000,
    }
}

/// Base piece values only.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .board
            .pieces()
            .map(|(_, piece)| signed(piece.color, piece_value(piece.kind)))
            .sum()
    }
}

/// Base value plus a per-square placement bonus for every piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct PieceSquareScorer;

impl BoardScorer for PieceSquareScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .board
            .pieces()
            .map(|(square, piece)| {
                signed(
                    piece.color,
                    piece_value(piece.kind) + piece_square_bonus(piece, square),
                )
            })
            .sum()
    }
}

/// Static evaluation used by the default search.
#[inline]
pub fn evaluate(game_state: &GameState) -> i32 {
    PieceSquareScorer.score(game_state)
}

#[inline]
fn signed(color: Color, value: i32) -> i32 {
    match color {
        Color::Light => value,
        Color::Dark => -value,
    }
}

/// Tables are laid out for white in board rows; black reads them mirrored.
pub fn piece_square_bonus(piece: Piece, square: Square) -> i32 {
    let row = match piece.color {
        Color::Light => square.row,
        Color::Dark => 7 - square.row,
    } as usize;
    let col = square.col as usize;

    let table = match piece.kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    };
    table[row][col]
}

type PieceSquareTable = [[i32; 8]; 8];

#[rustfmt::skip]
const PAWN_TABLE: PieceSquareTable = [
    [ 0,  0,   0,   0,   0,   0,  0,  0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: PieceSquareTable = [
    [ 0,  0,  0,  0,  0,  0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10,  5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [-5,  0,  0,  0,  0,  0,  0, -5],
    [ 0,  0,  0,  5,  5,  0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: PieceSquareTable = [
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [ 20,  20,   0,   0,   0,   0,  20,  20],
    [ 20,  30,  10,   0,   0,  10,  30,  20],
];
