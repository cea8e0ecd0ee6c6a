//! The board: cells, layout, and influence propagation.

pub mod cell;
pub mod grid;

pub use cell::{Cell, MAX_PAWNS};
pub use grid::Board;
