//! Eight-queens enumeration and symmetry analysis
//!
//! This crate provides:
//! - Exhaustive backtracking enumeration of all eight-queens placements
//! - Square-grid symmetry transforms (clockwise rotation and axis flips)
//! - Grouping of solutions into equivalence classes under those transforms
//! - A chess piece abstraction answering attack queries on a board

pub mod chess;
pub mod cli;
pub mod error;
pub mod puzzle;

pub use chess::{Board, Color, Piece, PieceKind};
pub use error::{Error, Result};
pub use puzzle::{Solution, find_all_queen_placements, group_similar_boards};
