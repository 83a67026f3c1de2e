//! Square-grid symmetry transforms
//!
//! Pure functions over square grids. Inputs are never mutated and every call
//! returns a new grid; the grouping pass relies on this when it repeatedly
//! rotates a representative to walk its orbit.

/// A row-major 2D grid
pub type Grid<T> = Vec<Vec<T>>;

/// Rotate a square grid 90 degrees clockwise.
///
/// Equivalent to transposing the grid and then reversing each row.
///
/// # Panics
///
/// Panics if the grid is not square.
///
/// # Examples
///
/// ```
/// use queens::puzzle::rotate_clockwise;
///
/// let grid = vec![vec!['a', 'b'], vec!['c', 'd']];
/// assert_eq!(rotate_clockwise(&grid), vec![vec!['c', 'a'], vec!['d', 'b']]);
/// ```
pub fn rotate_clockwise<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    assert_square(grid);

    let n = grid.len();
    let mut rotated = Vec::with_capacity(n);
    for col in 0..n {
        let mut row = Vec::with_capacity(n);
        for source_row in (0..n).rev() {
            row.push(grid[source_row][col].clone());
        }
        rotated.push(row);
    }
    rotated
}

/// Mirror a square grid across its vertical axis (left-right).
///
/// # Panics
///
/// Panics if the grid is not square.
///
/// # Examples
///
/// ```
/// use queens::puzzle::flip_vertical;
///
/// let grid = vec![vec!['a', 'b'], vec!['c', 'd']];
/// assert_eq!(flip_vertical(&grid), vec![vec!['b', 'a'], vec!['d', 'c']]);
/// ```
pub fn flip_vertical<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    assert_square(grid);

    grid.iter()
        .map(|row| row.iter().rev().cloned().collect())
        .collect()
}

/// Mirror a square grid across its horizontal axis (top-bottom).
///
/// # Panics
///
/// Panics if the grid is not square.
pub fn flip_horizontal<T: Clone>(grid: &Grid<T>) -> Grid<T> {
    assert_square(grid);

    grid.iter().rev().cloned().collect()
}

fn assert_square<T>(grid: &Grid<T>) {
    for (row, cells) in grid.iter().enumerate() {
        assert!(
            cells.len() == grid.len(),
            "grid is not square: row {} has {} cells, expected {}",
            row,
            cells.len(),
            grid.len()
        );
    }
}
