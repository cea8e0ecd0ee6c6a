//! Read-only query contract.
//!
//! Strategies, controllers and views see the game only through
//! `ReadonlyGame`. Scores, termination, the winner and legality are derived
//! from a handful of required accessors, so any implementation (the engine,
//! or a hand-built position in tests) scores and validates the same way.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Cell};
use crate::cards::Card;
use crate::core::Player;
use crate::error::{GameError, Result};

/// Outcome of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Strictly higher total score.
    Winner(Player),
    /// Equal totals.
    Tie,
}

impl GameResult {
    /// The winning player, `None` on a tie.
    #[must_use]
    pub fn winner(self) -> Option<Player> {
        match self {
            GameResult::Winner(p) => Some(p),
            GameResult::Tie => None,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(self, player: Player) -> bool {
        self.winner() == Some(player)
    }
}

/// Read-only view of a game in progress.
pub trait ReadonlyGame {
    /// Side to move.
    fn current_player(&self) -> Player;

    /// A player's hand, in index order.
    fn hand(&self, player: Player) -> &Vector<Card>;

    fn board(&self) -> &Board;

    /// Whether the player's last action was a pass not since undone by a placement.
    fn has_passed(&self, player: Player) -> bool;

    // === Derived queries ===

    fn rows(&self) -> usize {
        self.board().rows()
    }

    fn cols(&self) -> usize {
        self.board().cols()
    }

    /// Cell at `(row, col)`, `None` off the board.
    fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.board().get(row, col)
    }

    /// Sum of `player`'s card values in `row`.
    fn row_score(&self, player: Player, row: usize) -> u32 {
        self.board().row_score(player, row)
    }

    /// Sum of `player`'s row scores over the rows they strictly win,
    /// saturating at `u32::MAX`.
    fn total_score(&self, player: Player) -> u32 {
        (0..self.rows())
            .map(|row| (self.row_score(player, row), self.row_score(player.opponent(), row)))
            .filter(|(mine, theirs)| mine > theirs)
            .map(|(mine, _)| mine)
            .fold(0, u32::saturating_add)
    }

    /// Both players have passed with no placement in between.
    fn is_game_over(&self) -> bool {
        Player::ALL.into_iter().all(|p| self.has_passed(p))
    }

    /// Result of a finished game.
    fn winner(&self) -> Result<GameResult> {
        if !self.is_game_over() {
            return Err(GameError::state("game is not over yet"));
        }
        let red = self.total_score(Player::Red);
        let blue = self.total_score(Player::Blue);
        Ok(match red.cmp(&blue) {
            std::cmp::Ordering::Greater => GameResult::Winner(Player::Red),
            std::cmp::Ordering::Less => GameResult::Winner(Player::Blue),
            std::cmp::Ordering::Equal => GameResult::Tie,
        })
    }

    /// Whether the side to move could place `card_index` at `(row, col)`.
    fn is_legal_move(&self, card_index: usize, row: usize, col: usize) -> bool {
        !self.is_game_over() && check_placement(self, card_index, row, col).is_ok()
    }
}

/// Validate a placement for the side to move, returning the card it would play.
///
/// Checks coordinates, hand index, cell ownership and pawn count, in that
/// order. Lifecycle checks are left to the caller.
pub fn check_placement<G: ReadonlyGame + ?Sized>(
    game: &G,
    card_index: usize,
    row: usize,
    col: usize,
) -> Result<&Card> {
    let player = game.current_player();
    let cell = game.cell(row, col).ok_or_else(|| {
        GameError::illegal_move(format!(
            "({row}, {col}) is outside the {}x{} board",
            game.rows(),
            game.cols()
        ))
    })?;

    let hand = game.hand(player);
    let card = hand.get(card_index).ok_or_else(|| {
        GameError::illegal_move(format!(
            "card index {card_index} out of range for a hand of {}",
            hand.len()
        ))
    })?;

    match cell {
        Cell::Pawns { owner, count } if *owner == player => {
            if *count < card.cost() {
                return Err(GameError::illegal_move(format!(
                    "({row}, {col}) has {count} pawns, '{}' costs {}",
                    card.name(),
                    card.cost()
                )));
            }
            Ok(card)
        }
        _ => Err(GameError::illegal_move(format!(
            "({row}, {col}) holds no pawns owned by {player}"
        ))),
    }
}
