//! Board cells.
//!
//! A cell is exactly one of: empty, a stack of one player's pawns, or a
//! placed card. The enum makes combinations like "pawns with a card"
//! unrepresentable.

use serde::Serialize;

use crate::cards::Card;
use crate::core::Player;

/// Largest pawn stack a cell can hold.
pub const MAX_PAWNS: u8 = 3;

/// Contents of one board cell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum Cell {
    Empty,
    /// 1 to `MAX_PAWNS` pawns owned by one player.
    Pawns { owner: Player, count: u8 },
    /// A placed card; its pawns were spent.
    Card { owner: Player, card: Card },
}

impl Cell {
    /// Owner of the pawns or card, `None` when empty.
    #[must_use]
    pub fn owner(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Pawns { owner, .. } | Cell::Card { owner, .. } => Some(*owner),
        }
    }

    /// Pawns on the cell; 0 unless it holds a pawn stack.
    #[must_use]
    pub fn pawn_count(&self) -> u8 {
        match self {
            Cell::Pawns { count, .. } => *count,
            _ => 0,
        }
    }

    /// The placed card, if any.
    #[must_use]
    pub fn card(&self) -> Option<&Card> {
        match self {
            Cell::Card { card, .. } => Some(card),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Apply one unit of `player`'s influence.
    ///
    /// Cards are untouched, empty cells gain a pawn, own stacks grow up to
    /// `MAX_PAWNS`, and opponent stacks change owner keeping their count.
    pub fn receive_influence(&mut self, player: Player) {
        match self {
            Cell::Card { .. } => {}
            Cell::Empty => {
                *self = Cell::Pawns {
                    owner: player,
                    count: 1,
                };
            }
            Cell::Pawns { owner, count } => {
                if *owner == player {
                    *count = (*count + 1).min(MAX_PAWNS);
                } else {
                    *owner = player;
                }
            }
        }
    }
}
