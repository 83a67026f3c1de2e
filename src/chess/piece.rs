//! Piece representation and attack queries

use serde::{Deserialize, Serialize};

use super::board::Board;

/// Owning side of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    White,
}

/// The six chess piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    /// Letter used when rendering boards ('N' for knights)
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece with a fixed (row, col) position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub row: usize,
    pub col: usize,
    /// Facing direction, meaningful for pawns only
    pub moving_up: bool,
}

impl Piece {
    /// Create a piece at (row, col) with the default facing direction
    pub fn new(kind: PieceKind, color: Color, row: usize, col: usize) -> Self {
        Piece {
            kind,
            color,
            row,
            col,
            moving_up: false,
        }
    }

    /// Create a pawn facing up or down the board
    pub fn pawn(color: Color, row: usize, col: usize, moving_up: bool) -> Self {
        Piece {
            kind: PieceKind::Pawn,
            color,
            row,
            col,
            moving_up,
        }
    }

    /// True iff this piece attacks the cell at (row, col) on the given board.
    ///
    /// Sliding pieces (rook, bishop, queen) require every square strictly
    /// between the piece and the target to be empty. A piece never attacks
    /// its own square.
    pub fn attacks(&self, row: usize, col: usize, board: &Board) -> bool {
        let dr = row as i32 - self.row as i32;
        let dc = col as i32 - self.col as i32;

        if dr == 0 && dc == 0 {
            return false;
        }

        match self.kind {
            PieceKind::King => dr.abs() <= 1 && dc.abs() <= 1,
            PieceKind::Knight => {
                let (ar, ac) = (dr.abs(), dc.abs());
                (ar == 1 && ac == 2) || (ar == 2 && ac == 1)
            }
            PieceKind::Pawn => {
                let dir = if self.moving_up { 1 } else { -1 };
                dr == dir && dc.abs() == 1
            }
            PieceKind::Rook => (dr == 0 || dc == 0) && self.ray_clear(row, col, board),
            PieceKind::Bishop => dr.abs() == dc.abs() && self.ray_clear(row, col, board),
            PieceKind::Queen => {
                (dr == 0 || dc == 0 || dr.abs() == dc.abs()) && self.ray_clear(row, col, board)
            }
        }
    }

    /// Walk the squares strictly between this piece and (row, col), returning
    /// true when none is occupied. Assumes the target is aligned with the
    /// piece along a rank, file or diagonal.
    fn ray_clear(&self, row: usize, col: usize, board: &Board) -> bool {
        let step_r = (row as i32 - self.row as i32).signum();
        let step_c = (col as i32 - self.col as i32).signum();

        let mut r = self.row as i32 + step_r;
        let mut c = self.col as i32 + step_c;
        while (r, c) != (row as i32, col as i32) {
            if board.piece_at(r as usize, c as usize).is_some() {
                return false;
            }
            r += step_r;
            c += step_c;
        }
        true
    }
}
