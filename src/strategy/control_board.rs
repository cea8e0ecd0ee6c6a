//! Control the board: favour placements whose influence lands on cells the
//! mover already owns.
//!
//! The overlap count reads the board as it is before the placement, so
//! cells the move would capture from the opponent earn nothing, and the
//! mask is read unmirrored for both players.

use super::{ensure_turn, legal_moves, Move, Strategy};
use crate::cards::Card;
use crate::core::Player;
use crate::error::Result;
use crate::rules::ReadonlyGame;

/// Picks the legal placement whose mask covers the most mover-owned cells;
/// ties go to the smallest `(row, col)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ControlBoard;

impl ControlBoard {
    /// Active mask cells (center included) on the board and owned by `player`.
    #[must_use]
    pub fn owned_overlap(
        game: &dyn ReadonlyGame,
        player: Player,
        card: &Card,
        row: usize,
        col: usize,
    ) -> usize {
        card.mask()
            .offsets()
            .into_iter()
            .filter_map(|(dr, dc)| {
                let r = row.checked_add_signed(dr as isize)?;
                let c = col.checked_add_signed(dc as isize)?;
                game.cell(r, c)
            })
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }
}

impl Strategy for ControlBoard {
    fn name(&self) -> &'static str {
        "control-board"
    }

    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>> {
        ensure_turn(game, player)?;
        let hand = game.hand(player);

        let mut best: Option<(Move, usize)> = None;
        for mv in legal_moves(game) {
            let Some(card) = hand.get(mv.card_index) else {
                continue;
            };
            let owned = Self::owned_overlap(game, player, card, mv.row, mv.col);
            // Scan order is row-major, so keeping the first maximum is the
            // smallest (row, col).
            if best.map_or(true, |(_, best_owned)| owned > best_owned) {
                best = Some((mv, owned));
            }
        }

        if let Some((mv, owned)) = best {
            tracing::trace!(%mv, owned, "best board control");
        }
        Ok(best.map(|(mv, _)| mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceMask;
    use crate::error::GameError;
    use crate::rules::Position;

    fn card(name: &str, offsets: &[(i32, i32)]) -> Card {
        Card::new(name, 1, 1, InfluenceMask::from_offsets(offsets).unwrap()).unwrap()
    }

    fn cross() -> Card {
        card("cross", &[(-1, 0), (1, 0), (0, -1), (0, 1)])
    }

    #[test]
    fn test_prefers_most_owned_overlap() {
        let position = Position::new(3, 5)
            .with_pawns(0, 1, Player::Red, 1)
            .with_pawns(1, 0, Player::Red, 1)
            .with_pawns(1, 1, Player::Red, 1)
            .with_pawns(2, 1, Player::Red, 1)
            .with_hand(Player::Red, [cross()]);

        let mv = ControlBoard.choose_move(&position, Player::Red).unwrap();
        assert_eq!(mv, Some(Move::new(0, 1, 1)));
    }

    #[test]
    fn test_overlap_counts_center_and_skips_off_board() {
        let position = Position::new(3, 5)
            .with_pawns(1, 0, Player::Red, 1)
            .with_pawns(1, 1, Player::Red, 1)
            .with_pawns(0, 0, Player::Blue, 1);

        let card = cross();
        assert_eq!(ControlBoard::owned_overlap(&position, Player::Red, &card, 1, 0), 2);
        assert_eq!(ControlBoard::owned_overlap(&position, Player::Blue, &card, 1, 0), 1);
    }

    #[test]
    fn test_overlap_reads_mask_unmirrored() {
        let position = Position::new(1, 5)
            .with_pawns(0, 1, Player::Blue, 1)
            .with_pawns(0, 2, Player::Blue, 1)
            .with_pawns(0, 3, Player::Blue, 1);

        // Blue's real influence would go left; the count still looks right.
        let right = card("right", &[(0, 1)]);
        assert_eq!(ControlBoard::owned_overlap(&position, Player::Blue, &right, 0, 3), 1);
        assert_eq!(ControlBoard::owned_overlap(&position, Player::Blue, &right, 0, 2), 2);
    }

    #[test]
    fn test_ties_go_to_smallest_cell() {
        let position = Position::new(2, 3)
            .with_pawns(1, 2, Player::Red, 1)
            .with_pawns(0, 2, Player::Red, 1)
            .with_hand(Player::Red, [card("solo", &[])]);

        let mv = ControlBoard.choose_move(&position, Player::Red).unwrap();
        assert_eq!(mv, Some(Move::new(0, 0, 2)));
    }

    #[test]
    fn test_no_moves_is_a_pass() {
        let position = Position::new(2, 3).with_pawns(0, 0, Player::Red, 1);
        assert_eq!(ControlBoard.choose_move(&position, Player::Red).unwrap(), None);
    }

    #[test]
    fn test_wrong_player_is_rejected() {
        let position = Position::new(1, 3);
        let err = ControlBoard.choose_move(&position, Player::Blue).unwrap_err();
        assert!(matches!(err, GameError::IllegalArgument(_)));
    }
}
