//! Maximize row score: try to take the topmost row not already won.

use super::{ensure_turn, Move, Strategy};
use crate::core::Player;
use crate::error::Result;
use crate::rules::ReadonlyGame;

/// Walks rows top to bottom. In the first row where the mover is tied or
/// behind and some legal placement would put them strictly ahead, plays the
/// placement with the largest gain (first found on ties, card-major then
/// column). With no such row, falls back to the first legal placement
/// anywhere, scanning row, card, then column.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaximizeRowScore;

impl MaximizeRowScore {
    fn winning_move_in_row(game: &dyn ReadonlyGame, player: Player, row: usize) -> Option<Move> {
        let mine = game.row_score(player, row);
        let theirs = game.row_score(player.opponent(), row);
        if mine > theirs {
            return None;
        }

        let mut best: Option<(Move, u32)> = None;
        for (card_index, card) in game.hand(player).iter().enumerate() {
            let gain = card.value_score();
            if mine.saturating_add(gain) <= theirs {
                continue;
            }
            for col in 0..game.cols() {
                if !game.is_legal_move(card_index, row, col) {
                    continue;
                }
                if best.map_or(true, |(_, best_gain)| gain > best_gain) {
                    best = Some((Move::new(card_index, row, col), gain));
                }
            }
        }
        best.map(|(mv, _)| mv)
    }

    fn first_legal_move(game: &dyn ReadonlyGame, player: Player) -> Option<Move> {
        let hand_len = game.hand(player).len();
        (0..game.rows())
            .flat_map(|row| {
                (0..hand_len).flat_map(move |card_index| {
                    (0..game.cols()).map(move |col| Move::new(card_index, row, col))
                })
            })
            .find(|m| game.is_legal_move(m.card_index, m.row, m.col))
    }
}

impl Strategy for MaximizeRowScore {
    fn name(&self) -> &'static str {
        "maximize-row"
    }

    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>> {
        ensure_turn(game, player)?;

        for row in 0..game.rows() {
            if let Some(mv) = Self::winning_move_in_row(game, player, row) {
                tracing::trace!(row, %mv, "row can be taken");
                return Ok(Some(mv));
            }
        }
        Ok(Self::first_legal_move(game, player))
    }
}
