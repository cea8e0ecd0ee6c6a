//! Game configuration: board dimensions, hand size and dealing seed.
//!
//! Deck-dependent checks (hand size versus deck size, board coverage,
//! duplicate limits) happen in `GameEngine::init_game`, since only it
//! sees the decks.

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Setup parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of board rows (must be positive).
    pub rows: usize,

    /// Number of board columns (must be odd and greater than 1).
    pub cols: usize,

    /// Cards dealt to each player at start.
    pub hand_size: usize,

    /// Seed for the dealing RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 7,
            hand_size: 3,
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Set the board dimensions.
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the starting hand size.
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    /// Set the dealing seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Number of cells on the board, `None` if it does not fit in a `usize`.
    #[must_use]
    pub fn cell_count(&self) -> Option<usize> {
        self.rows.checked_mul(self.cols)
    }

    /// Check the deck-independent constraints.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 {
            return Err(GameError::configuration("number of rows must be positive"));
        }
        if self.cols <= 1 || self.cols % 2 == 0 {
            return Err(GameError::configuration(format!(
                "number of columns must be greater than 1 and odd, got {}",
                self.cols
            )));
        }
        if self.cell_count().is_none() {
            return Err(GameError::configuration(format!(
                "a {}x{} board is too large",
                self.rows, self.cols
            )));
        }
        if self.hand_size == 0 {
            return Err(GameError::configuration("hand size must be positive"));
        }
        Ok(())
    }
}
