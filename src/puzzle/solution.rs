//! Solved placement grids

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chess::{BOARD_LENGTH, Piece};

use super::symmetry::Grid;

/// Marker for a cell occupied by a queen
pub const QUEEN: char = 'Q';

/// Marker for an empty cell
pub const EMPTY: char = '*';

/// One complete placement: an 8x8 grid of [`QUEEN`] and [`EMPTY`] cells.
///
/// Solutions are immutable once produced; the transforms and the grouping
/// pass always work on fresh copies of the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Solution {
    cells: Grid<char>,
}

impl Solution {
    /// Build a solution grid from placed queens
    pub fn from_queens(queens: &[Piece]) -> Self {
        let mut cells = vec![vec![EMPTY; BOARD_LENGTH]; BOARD_LENGTH];
        for queen in queens {
            cells[queen.row][queen.col] = QUEEN;
        }
        Solution { cells }
    }

    /// Build a solution from a full 8x8 grid of `'Q'`/`'*'` cells.
    ///
    /// # Errors
    ///
    /// Returns error if the grid is not 8x8 or contains any other character.
    pub fn from_cells(cells: Grid<char>) -> Result<Self, crate::Error> {
        if cells.len() != BOARD_LENGTH {
            return Err(crate::Error::InvalidRowCount {
                expected: BOARD_LENGTH,
                got: cells.len(),
            });
        }

        for (row, row_cells) in cells.iter().enumerate() {
            if row_cells.len() != BOARD_LENGTH {
                return Err(crate::Error::InvalidRowLength {
                    expected: BOARD_LENGTH,
                    row,
                    got: row_cells.len(),
                });
            }
            for (col, &c) in row_cells.iter().enumerate() {
                if c != QUEEN && c != EMPTY {
                    return Err(crate::Error::InvalidCellCharacter {
                        character: c,
                        position: row * BOARD_LENGTH + col,
                        context: "solution grid".to_string(),
                    });
                }
            }
        }

        Ok(Solution { cells })
    }

    /// Parse a solution from a string of 64 `'Q'`/`'*'` characters.
    /// Whitespace is filtered out, so grids may be written row by row.
    ///
    /// # Errors
    ///
    /// Returns error if the string does not hold exactly 64 non-whitespace
    /// characters or contains an invalid cell character.
    ///
    /// # Examples
    ///
    /// ```
    /// use queens::puzzle::Solution;
    ///
    /// let solution = Solution::from_string(
    ///     "Q*******
    ///      ******Q*
    ///      ****Q***
    ///      *******Q
    ///      *Q******
    ///      ***Q****
    ///      *****Q**
    ///      **Q*****",
    /// )
    /// .unwrap();
    /// assert!(solution.is_valid());
    /// ```
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let cleaned: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();

        let expected = BOARD_LENGTH * BOARD_LENGTH;
        if cleaned.len() != expected {
            return Err(crate::Error::InvalidBoardLength {
                expected,
                got: cleaned.len(),
                context: s.to_string(),
            });
        }

        for (position, &character) in cleaned.iter().enumerate() {
            if character != QUEEN && character != EMPTY {
                return Err(crate::Error::InvalidCellCharacter {
                    character,
                    position,
                    context: s.to_string(),
                });
            }
        }

        let cells = cleaned
            .chunks(BOARD_LENGTH)
            .map(|chunk| chunk.to_vec())
            .collect();
        Ok(Solution { cells })
    }

    /// The underlying character grid
    pub fn cells(&self) -> &Grid<char> {
        &self.cells
    }

    /// Positions of the queens as (row, col) pairs in row-major order
    pub fn queen_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();
        for (row, row_cells) in self.cells.iter().enumerate() {
            for (col, &c) in row_cells.iter().enumerate() {
                if c == QUEEN {
                    positions.push((row, col));
                }
            }
        }
        positions
    }

    /// Check that the grid is a legal eight-queens placement: exactly eight
    /// queens, no two sharing a row, a column or a diagonal.
    pub fn is_valid(&self) -> bool {
        let queens = self.queen_positions();
        if queens.len() != BOARD_LENGTH {
            return false;
        }

        for (i, &(r1, c1)) in queens.iter().enumerate() {
            for &(r2, c2) in &queens[i + 1..] {
                if r1 == r2 || c1 == c2 || r1.abs_diff(r2) == c1.abs_diff(c2) {
                    return false;
                }
            }
        }
        true
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (col, c) in row.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess::{Color, PieceKind};

    const FIRST_SOLUTION: &str = "Q*******\
                                  ******Q*\
                                  ****Q***\
                                  *******Q\
                                  *Q******\
                                  ***Q****\
                                  *****Q**\
                                  **Q*****";

    #[test]
    fn test_from_queens_marks_each_position() {
        let queens: Vec<Piece> = [(0usize, 0usize), (4, 1), (7, 2)]
            .iter()
            .map(|&(row, col)| Piece::new(PieceKind::Queen, Color::Black, row, col))
            .collect();

        let solution = Solution::from_queens(&queens);
        assert_eq!(solution.queen_positions(), vec![(0, 0), (4, 1), (7, 2)]);
        assert_eq!(solution.cells()[0][0], QUEEN);
        assert_eq!(solution.cells()[0][1], EMPTY);
    }

    #[test]
    fn test_from_string_parses_a_known_placement() {
        let solution = Solution::from_string(FIRST_SOLUTION).unwrap();
        assert_eq!(
            solution.queen_positions(),
            vec![
                (0, 0),
                (1, 6),
                (2, 4),
                (3, 7),
                (4, 1),
                (5, 3),
                (6, 5),
                (7, 2)
            ]
        );
    }

    #[test]
    fn test_from_string_rejects_short_input() {
        let result = Solution::from_string("Q*******");
        assert!(matches!(
            result,
            Err(crate::Error::InvalidBoardLength { got: 8, .. })
        ));
    }

    #[test]
    fn test_from_string_rejects_bad_character() {
        let input = FIRST_SOLUTION.replace('Q', "X");
        let result = Solution::from_string(&input);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidCellCharacter { character: 'X', .. })
        ));
    }

    #[test]
    fn test_from_cells_rejects_ragged_grid() {
        let mut cells = vec![vec![EMPTY; BOARD_LENGTH]; BOARD_LENGTH];
        cells[3].pop();
        let result = Solution::from_cells(cells);
        assert!(matches!(
            result,
            Err(crate::Error::InvalidRowLength { row: 3, got: 7, .. })
        ));
    }

    #[test]
    fn test_is_valid_accepts_a_real_solution() {
        let solution = Solution::from_string(FIRST_SOLUTION).unwrap();
        assert!(solution.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_shared_diagonal() {
        let queens: Vec<Piece> = (0..BOARD_LENGTH)
            .map(|i| Piece::new(PieceKind::Queen, Color::Black, i, i))
            .collect();
        let solution = Solution::from_queens(&queens);
        assert!(!solution.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_wrong_queen_count() {
        let solution = Solution::from_queens(&[]);
        assert!(!solution.is_valid());
    }

    #[test]
    fn test_display_renders_rows_with_spaces() {
        let solution = Solution::from_string(FIRST_SOLUTION).unwrap();
        let rendered = solution.to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "Q * * * * * * *");
        assert_eq!(rendered.lines().count(), BOARD_LENGTH);
    }
}
