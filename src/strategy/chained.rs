//! Strategy chains with first-success fallback.

use super::{ControlBoard, FillFirst, MaximizeRowScore, Move, Strategy};
use crate::core::Player;
use crate::error::{GameError, Result};
use crate::rules::ReadonlyGame;

/// Tries each strategy in order and returns the first proposed move.
pub struct ChainedStrategy {
    strategies: Vec<Box<dyn Strategy>>,
}

impl ChainedStrategy {
    /// Build a chain; at least one strategy is required.
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Result<Self> {
        if strategies.is_empty() {
            return Err(GameError::configuration("strategy chain cannot be empty"));
        }
        Ok(Self { strategies })
    }

    /// Number of strategies in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Always false; an empty chain cannot be built.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

impl Default for ChainedStrategy {
    /// Take a row if possible, else grow territory, else fill.
    fn default() -> Self {
        Self {
            strategies: vec![
                Box::new(MaximizeRowScore),
                Box::new(ControlBoard),
                Box::new(FillFirst),
            ],
        }
    }
}

impl std::fmt::Debug for ChainedStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.strategies.iter().map(|s| s.name()))
            .finish()
    }
}

impl Strategy for ChainedStrategy {
    fn name(&self) -> &'static str {
        "chained"
    }

    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>> {
        for strategy in &self.strategies {
            if let Some(mv) = strategy.choose_move(game, player)? {
                tracing::trace!(strategy = strategy.name(), %mv, "chain link chose move");
                return Ok(Some(mv));
            }
        }
        Ok(None)
    }
}
