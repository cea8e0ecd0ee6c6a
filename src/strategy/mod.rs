//! Move-selection strategies.
//!
//! Every strategy is a pure function of a read-only game view and the
//! player to move. `Ok(None)` means "no legal placement, pass"; errors are
//! reserved for misuse, such as asking for a move for the side not on turn.
//!
//! ## Implementations
//!
//! - `FillFirst`: first legal placement in board order
//! - `MaximizeRowScore`: win the topmost losing/tied row it can
//! - `ControlBoard`: maximise overlap with cells already owned
//! - `MinMax`: keep the opponent's best row score lowest (single ply)
//! - `ChainedStrategy`: try strategies in order until one proposes a move

pub mod chained;
pub mod control_board;
pub mod fill_first;
pub mod maximize_row;
pub mod minmax;
pub mod registry;

pub use chained::ChainedStrategy;
pub use control_board::ControlBoard;
pub use fill_first::FillFirst;
pub use maximize_row::MaximizeRowScore;
pub use minmax::MinMax;
pub use registry::StrategyKind;

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::error::{GameError, Result};
use crate::rules::ReadonlyGame;

/// A placement: card `card_index` of the mover's hand onto `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub card_index: usize,
    pub row: usize,
    pub col: usize,
}

impl Move {
    #[must_use]
    pub const fn new(card_index: usize, row: usize, col: usize) -> Self {
        Self {
            card_index,
            row,
            col,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {} at ({}, {})", self.card_index, self.row, self.col)
    }
}

/// Chooses a move for the side to move.
pub trait Strategy: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Propose a placement for `player`, or `None` to pass.
    ///
    /// Fails with `GameError::IllegalArgument` if `player` is not on turn.
    fn choose_move(&self, game: &dyn ReadonlyGame, player: Player) -> Result<Option<Move>>;
}

/// Reject requests for a player who is not on turn.
pub(crate) fn ensure_turn(game: &dyn ReadonlyGame, player: Player) -> Result<()> {
    let current = game.current_player();
    if current != player {
        return Err(GameError::illegal_argument(format!(
            "it is {current}'s turn, not {player}'s"
        )));
    }
    Ok(())
}

/// Every legal placement for the side to move, row-major then card index.
pub(crate) fn legal_moves(game: &dyn ReadonlyGame) -> impl Iterator<Item = Move> + '_ {
    let hand_len = game.hand(game.current_player()).len();
    (0..game.rows()).flat_map(move |row| {
        (0..game.cols()).flat_map(move |col| {
            (0..hand_len)
                .map(move |card_index| Move::new(card_index, row, col))
                .filter(move |m| game.is_legal_move(m.card_index, m.row, m.col))
        })
    })
}
