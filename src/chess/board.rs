//! Board representation and starting-position bootstrap

use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};

/// Side length of the board
pub const BOARD_LENGTH: usize = 8;

/// An 8x8 grid of optional piece occupants.
///
/// Cells hold piece values directly; placing overwrites and clearing drops.
/// At most one occupant per cell by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_LENGTH]; BOARD_LENGTH],
}

impl Board {
    /// Create an empty board
    pub fn empty() -> Self {
        Board {
            cells: [[None; BOARD_LENGTH]; BOARD_LENGTH],
        }
    }

    /// Create a board in the starting position.
    ///
    /// Rows 0 and 1 hold the black pieces (pawns flagged as moving up),
    /// rows 6 and 7 the white pieces:
    ///
    /// ```text
    /// 7 | R N B K Q B N R
    /// 6 | P P P P P P P P
    /// 5 | * * * * * * * *
    /// 4 | * * * * * * * *
    /// 3 | * * * * * * * *
    /// 2 | * * * * * * * *
    /// 1 | P P P P P P P P
    /// 0 | R N B K Q B N R
    ///     +---------------
    ///     0 1 2 3 4 5 6 7
    /// ```
    pub fn standard() -> Self {
        use PieceKind::{Bishop, King, Knight, Queen, Rook};

        let back_rank = [Rook, Knight, Bishop, King, Queen, Bishop, Knight, Rook];

        let mut board = Self::empty();
        for (col, &kind) in back_rank.iter().enumerate() {
            board.place(Piece::new(kind, Color::Black, 0, col));
            board.place(Piece::pawn(Color::Black, 1, col, true));
            board.place(Piece::pawn(Color::White, 6, col, false));
            board.place(Piece::new(kind, Color::White, 7, col));
        }
        board
    }

    /// Get the piece (if any) at (row, col)
    pub fn piece_at(&self, row: usize, col: usize) -> Option<&Piece> {
        self.cells[row][col].as_ref()
    }

    /// True if the cell at (row, col) is unoccupied
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.cells[row][col].is_none()
    }

    /// Put a piece on the cell named by its own (row, col)
    pub fn place(&mut self, piece: Piece) {
        self.cells[piece.row][piece.col] = Some(piece);
    }

    /// Clear the cell at (row, col)
    pub fn clear(&mut self, row: usize, col: usize) {
        self.cells[row][col] = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..BOARD_LENGTH).rev() {
            write!(f, "{row} |")?;
            for col in 0..BOARD_LENGTH {
                let c = match self.piece_at(row, col) {
                    Some(piece) => piece.kind.to_char(),
                    None => '*',
                };
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "    +---------------")?;
        write!(f, "    0 1 2 3 4 5 6 7")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_has_no_occupants() {
        let board = Board::empty();
        for row in 0..BOARD_LENGTH {
            for col in 0..BOARD_LENGTH {
                assert!(board.is_empty(row, col));
            }
        }
    }

    #[test]
    fn test_place_and_clear_restore_the_cell() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::Black, 2, 5);

        board.place(queen);
        assert_eq!(board.piece_at(2, 5), Some(&queen));

        board.clear(2, 5);
        assert!(board.is_empty(2, 5));
    }

    #[test]
    fn test_standard_setup_layout() {
        let board = Board::standard();

        // Back ranks mirror each other, king on column 3 and queen on 4
        for &(row, color) in &[(0, Color::Black), (7, Color::White)] {
            assert_eq!(board.piece_at(row, 0).unwrap().kind, PieceKind::Rook);
            assert_eq!(board.piece_at(row, 1).unwrap().kind, PieceKind::Knight);
            assert_eq!(board.piece_at(row, 2).unwrap().kind, PieceKind::Bishop);
            assert_eq!(board.piece_at(row, 3).unwrap().kind, PieceKind::King);
            assert_eq!(board.piece_at(row, 4).unwrap().kind, PieceKind::Queen);
            assert_eq!(board.piece_at(row, 5).unwrap().kind, PieceKind::Bishop);
            assert_eq!(board.piece_at(row, 6).unwrap().kind, PieceKind::Knight);
            assert_eq!(board.piece_at(row, 7).unwrap().kind, PieceKind::Rook);
            assert_eq!(board.piece_at(row, 0).unwrap().color, color);
        }

        for col in 0..BOARD_LENGTH {
            let black_pawn = board.piece_at(1, col).unwrap();
            assert_eq!(black_pawn.kind, PieceKind::Pawn);
            assert!(black_pawn.moving_up);

            let white_pawn = board.piece_at(6, col).unwrap();
            assert_eq!(white_pawn.kind, PieceKind::Pawn);
            assert!(!white_pawn.moving_up);
        }

        for row in 2..6 {
            for col in 0..BOARD_LENGTH {
                assert!(board.is_empty(row, col));
            }
        }
    }

    #[test]
    fn test_pieces_know_their_position() {
        let board = Board::standard();
        for row in [0, 1, 6, 7] {
            for col in 0..BOARD_LENGTH {
                let piece = board.piece_at(row, col).unwrap();
                assert_eq!((piece.row, piece.col), (row, col));
            }
        }
    }
}
