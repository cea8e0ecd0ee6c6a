//! Rectangular board of cells.
//!
//! Cells are stored row-major in a flat `Vec`. Cloning a `Board` clones
//! every cell (and the cards in them), so a clone shares nothing mutable
//! with its source.

use serde::Serialize;

use super::cell::Cell;
use crate::cards::{Card, InfluenceMask};
use crate::core::Player;

/// The game board.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create the starting layout: RED pawns down column 0, BLUE pawns down
    /// the last column, everything else empty.
    ///
    /// Dimensions are assumed valid (see `GameConfig::validate`).
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut board = Self::empty(rows, cols);
        for row in 0..rows {
            board.cells[row * cols] = Cell::Pawns {
                owner: Player::Red,
                count: 1,
            };
            board.cells[row * cols + cols - 1] = Cell::Pawns {
                owner: Player::Blue,
                count: 1,
            };
        }
        board
    }

    /// Create a board with every cell empty.
    #[must_use]
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.in_bounds(row, col) {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        if self.in_bounds(row, col) {
            self.cells.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    /// Replace a cell, returning the old one. `None` when out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Option<Cell> {
        self.get_mut(row, col)
            .map(|slot| std::mem::replace(slot, cell))
    }

    /// Cells of one row, empty when the row is off the board.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Cell] {
        if row < self.rows {
            &self.cells[row * self.cols..(row + 1) * self.cols]
        } else {
            &[]
        }
    }

    /// Resolve a relative offset from `(row, col)` into a board coordinate.
    ///
    /// The column offset is negated for BLUE so a mask reads forward from
    /// each player's own side. Off-board targets give `None`.
    #[must_use]
    pub fn target(
        &self,
        row: usize,
        col: usize,
        offset: (i32, i32),
        player: Player,
    ) -> Option<(usize, usize)> {
        let (dr, dc) = offset;
        let r = row as i64 + i64::from(dr);
        let c = col as i64 + i64::from(dc * player.column_sign());
        if r < 0 || c < 0 {
            return None;
        }
        let (r, c) = (r as usize, c as usize);
        self.in_bounds(r, c).then_some((r, c))
    }

    /// Turn a pawn cell into `owner`'s card. Pawns on the cell are spent.
    pub fn place(&mut self, row: usize, col: usize, owner: Player, card: Card) {
        if let Some(slot) = self.get_mut(row, col) {
            *slot = Cell::Card { owner, card };
        }
    }

    /// Project `player`'s influence from a card at `(row, col)`.
    ///
    /// Returns the number of on-board cells that received influence.
    pub fn apply_influence(
        &mut self,
        player: Player,
        mask: &InfluenceMask,
        row: usize,
        col: usize,
    ) -> usize {
        let mut touched = 0;
        for offset in mask.offsets() {
            if let Some((r, c)) = self.target(row, col, offset, player) {
                if let Some(cell) = self.get_mut(r, c) {
                    cell.receive_influence(player);
                    touched += 1;
                }
            }
        }
        touched
    }

    /// Sum of card values `player` owns in `row`, saturating at `u32::MAX`.
    #[must_use]
    pub fn row_score(&self, player: Player, row: usize) -> u32 {
        self.row(row)
            .iter()
            .filter_map(|cell| match cell {
                Cell::Card { owner, card } if *owner == player => Some(card.value_score()),
                _ => None,
            })
            .fold(0, u32::saturating_add)
    }
}
