//! Fill-first: the first legal placement in board order.

use super::{ensure_turn, legal_moves, Move, Strategy};
use crate::core::Player;
use crate::error::Result;
use crate::rules::ReadonlyGame;

/// Scans rows, then columns, then hand cards, and takes the first legal
/// placement. Deterministic; a natural head for strategy chains.
#[derive(Clone, Copy, Debug, Default)]
pub struct FillFirst;

impl Strategy for FillFirst {
    fn name(&self) -> &'static str {
        "fill-first"
    }

    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>> {
        ensure_turn(game, player)?;
        Ok(legal_moves(game).next())
    }
}
