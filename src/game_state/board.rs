//! 8x8 piece grid.
//!
//! Lookups by signed coordinates are bounds-checked and return `None` off the
//! board, so attack scans can probe neighbours of edge squares without
//! special-casing them.

use crate::game_state::chess_rules::BACK_RANK;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    /// Standard starting layout.
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(*kind, Color::Dark));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Dark));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::Light));
            board.squares[7][col] = Some(Piece::new(*kind, Color::Light));
        }
        board
    }

    /// Bounds-safe lookup; any out-of-range coordinate holds no piece.
    #[inline]
    pub fn get(&self, row: i8, col: i8) -> Option<Piece> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            self.squares[row as usize][col as usize]
        } else {
            None
        }
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty_at(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    /// Remove and return whatever occupies `square`.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize].take()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.kind == PieceKind::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Occupied squares in board-scan order (row 0 first, a-file first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (Square::new(row as u8, col as u8), piece))
            })
        })
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}
