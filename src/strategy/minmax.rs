//! Single-ply min-max over row scores.
//!
//! This is not a game-tree search. Each candidate is scored by projecting
//! only its card value into the current row scores, then taking the
//! opponent's best row in that projection.

use super::{ensure_turn, legal_moves, Move, Strategy};
use crate::core::{Player, PlayerMap};
use crate::error::Result;
use crate::rules::ReadonlyGame;

/// Chooses the legal placement that minimises the opponent's best projected
/// row score; the first such placement wins ties.
#[derive(Clone, Copy, Debug, Default)]
pub struct MinMax;

impl MinMax {
    /// Opponent's highest row score once `value` is added to `player` in `row`.
    fn opponent_best_after(
        scores: &[PlayerMap<u32>],
        player: Player,
        row: usize,
        value: u32,
    ) -> u32 {
        let mut projected = scores.to_vec();
        if let Some(slot) = projected.get_mut(row) {
            slot[player] = slot[player].saturating_add(value);
        }
        projected
            .iter()
            .map(|r| r[player.opponent()])
            .max()
            .unwrap_or(0)
    }
}

impl Strategy for MinMax {
    fn name(&self) -> &'static str {
        "minmax"
    }

    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>> {
        ensure_turn(game, player)?;
        let hand = game.hand(player);
        let scores: Vec<PlayerMap<u32>> = (0..game.rows())
            .map(|row| PlayerMap::new(|p| game.row_score(p, row)))
            .collect();

        let mut best: Option<(Move, u32)> = None;
        for mv in legal_moves(game) {
            let Some(card) = hand.get(mv.card_index) else {
                continue;
            };
            let opponent_best =
                Self::opponent_best_after(&scores, player, mv.row, card.value_score());
            if best.map_or(true, |(_, lowest)| opponent_best < lowest) {
                best = Some((mv, opponent_best));
            }
        }

        if let Some((mv, opponent_best)) = best {
            tracing::trace!(%mv, opponent_best, "min-max choice");
        }
        Ok(best.map(|(mv, _)| mv))
    }
}
