//! Eight-queens placement search and symmetry classification

pub mod grouping;
pub mod search;
pub mod solution;
pub mod symmetry;

pub use grouping::group_similar_boards;
pub use search::find_all_queen_placements;
pub use solution::{EMPTY, QUEEN, Solution};
pub use symmetry::{Grid, flip_horizontal, flip_vertical, rotate_clockwise};
