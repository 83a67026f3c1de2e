//! Backtracking enumeration of eight-queens placements

use crate::chess::{BOARD_LENGTH, Board, Color, Piece, PieceKind};

use super::solution::Solution;

/// Find every placement of eight mutually non-attacking queens, one per
/// column, on an 8x8 board.
///
/// Columns are filled left to right and rows tried in ascending order, so
/// the output order is fixed: the first solution places its queens at rows
/// 0, 4, 7, 5, 2, 6, 1 and 3 for columns 0 through 7.
///
/// # Examples
///
/// ```
/// use queens::puzzle::find_all_queen_placements;
///
/// let solutions = find_all_queen_placements();
/// assert_eq!(solutions.len(), 92);
/// assert!(solutions.iter().all(|s| s.is_valid()));
/// ```
pub fn find_all_queen_placements() -> Vec<Solution> {
    let mut solutions = Vec::new();
    let mut board = Board::empty();
    let mut placed = Vec::with_capacity(BOARD_LENGTH);

    place_in_column(0, &mut board, &mut placed, &mut solutions);

    solutions
}

/// Try every row of `col`, committing safe placements and recursing into the
/// next column. The board and the queen list are restored before each trial
/// ends, so the caller sees them exactly as they were passed in.
fn place_in_column(
    col: usize,
    board: &mut Board,
    placed: &mut Vec<Piece>,
    solutions: &mut Vec<Solution>,
) {
    if col == BOARD_LENGTH {
        solutions.push(Solution::from_queens(placed));
        return;
    }

    for row in 0..BOARD_LENGTH {
        let is_safe = placed.iter().all(|queen| !queen.attacks(row, col, board));

        if is_safe {
            let queen = Piece::new(PieceKind::Queen, Color::Black, row, col);
            board.place(queen);
            placed.push(queen);

            place_in_column(col + 1, board, placed, solutions);

            placed.pop();
            board.clear(row, col);
        }
    }
}
