//! Hand-built positions.
//!
//! A `Position` is a board, two hands and a side to move, with no decks,
//! lifecycle or history. It implements `ReadonlyGame`, so strategies can be
//! asked about arbitrary situations (puzzles, regression cases) without
//! playing a game up to them.
//!
//! Every `is_legal_move` query is recorded, which lets callers check the
//! order in which a strategy examines placements.

use std::cell::RefCell;

use im::Vector;

use super::view::{check_placement, ReadonlyGame};
use crate::board::{Board, Cell, MAX_PAWNS};
use crate::cards::Card;
use crate::core::{Player, PlayerMap};

/// A static game situation.
#[derive(Clone, Debug)]
pub struct Position {
    board: Board,
    hands: PlayerMap<Vector<Card>>,
    current: Player,
    passed: PlayerMap<bool>,
    probes: RefCell<Vec<(usize, usize, usize)>>,
}

impl Position {
    /// An all-empty `rows` x `cols` board, empty hands, RED to move.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::from_board(Board::empty(rows, cols))
    }

    /// Wrap an existing board.
    #[must_use]
    pub fn from_board(board: Board) -> Self {
        Self {
            board,
            hands: PlayerMap::default(),
            current: Player::Red,
            passed: PlayerMap::with_value(false),
            probes: RefCell::new(Vec::new()),
        }
    }

    /// Capture any game's visible state.
    #[must_use]
    pub fn snapshot(game: &dyn ReadonlyGame) -> Self {
        Self {
            board: game.board().clone(),
            hands: PlayerMap::new(|p| game.hand(p).clone()),
            current: game.current_player(),
            passed: PlayerMap::new(|p| game.has_passed(p)),
            probes: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn with_current(mut self, player: Player) -> Self {
        self.current = player;
        self
    }

    #[must_use]
    pub fn with_hand(mut self, player: Player, cards: impl IntoIterator<Item = Card>) -> Self {
        self.hands[player] = cards.into_iter().collect();
        self
    }

    /// Put `count` pawns of `owner` on a cell, clamped to `1..=MAX_PAWNS`.
    /// Off-board coordinates are ignored.
    #[must_use]
    pub fn with_pawns(mut self, row: usize, col: usize, owner: Player, count: u8) -> Self {
        let count = count.clamp(1, MAX_PAWNS);
        self.board.set(row, col, Cell::Pawns { owner, count });
        self
    }

    /// Put a placed card on a cell. Off-board coordinates are ignored.
    #[must_use]
    pub fn with_card(mut self, row: usize, col: usize, owner: Player, card: Card) -> Self {
        self.board.set(row, col, Cell::Card { owner, card });
        self
    }

    #[must_use]
    pub fn with_passed(mut self, player: Player, passed: bool) -> Self {
        self.passed[player] = passed;
        self
    }

    /// `(card_index, row, col)` of every legality query so far, in order.
    #[must_use]
    pub fn probes(&self) -> Vec<(usize, usize, usize)> {
        self.probes.borrow().clone()
    }

    pub fn clear_probes(&self) {
        self.probes.borrow_mut().clear();
    }
}

impl ReadonlyGame for Position {
    fn current_player(&self) -> Player {
        self.current
    }

    fn hand(&self, player: Player) -> &Vector<Card> {
        &self.hands[player]
    }

    fn board(&self) -> &Board {
        &self.board
    }

    fn has_passed(&self, player: Player) -> bool {
        self.passed[player]
    }

    fn is_legal_move(&self, card_index: usize, row: usize, col: usize) -> bool {
        self.probes.borrow_mut().push((card_index, row, col));
        !self.is_game_over() && check_placement(self, card_index, row, col).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::InfluenceMask;
    use crate::rules::{GameEngine, GameResult};

    fn card(name: &str, cost: u8, value: u32) -> Card {
        Card::new(name, cost, value, InfluenceMask::from_offsets(&[]).unwrap()).unwrap()
    }

    #[test]
    fn test_builder_places_cells() {
        let position = Position::new(2, 3)
            .with_pawns(0, 0, Player::Red, 2)
            .with_card(1, 2, Player::Blue, card("b", 1, 4))
            .with_pawns(9, 9, Player::Red, 1);

        assert_eq!(position.cell(0, 0).unwrap().pawn_count(), 2);
        assert_eq!(position.cell(1, 2).unwrap().owner(), Some(Player::Blue));
        assert_eq!(position.row_score(Player::Blue, 1), 4);
        assert!(position.cell(0, 1).unwrap().is_empty());
    }

    #[test]
    fn test_pawn_counts_are_clamped() {
        let position = Position::new(1, 3)
            .with_pawns(0, 0, Player::Red, 0)
            .with_pawns(0, 2, Player::Blue, 9);

        assert_eq!(position.cell(0, 0).unwrap().pawn_count(), 1);
        assert_eq!(position.cell(0, 2).unwrap().pawn_count(), MAX_PAWNS);
    }

    #[test]
    fn test_legality_follows_the_rules() {
        let position = Position::new(1, 3)
            .with_pawns(0, 0, Player::Red, 1)
            .with_pawns(0, 2, Player::Blue, 3)
            .with_hand(Player::Red, [card("cheap", 1, 1), card("dear", 2, 1)]);

        assert!(position.is_legal_move(0, 0, 0));
        assert!(!position.is_legal_move(1, 0, 0));
        assert!(!position.is_legal_move(0, 0, 2));
        assert!(!position.is_legal_move(2, 0, 0));
        assert!(!position.is_legal_move(0, 5, 0));
    }

    #[test]
    fn test_probes_are_recorded_in_order() {
        let position = Position::new(1, 3);
        position.is_legal_move(0, 0, 1);
        position.is_legal_move(2, 0, 0);
        assert_eq!(position.probes(), vec![(0, 0, 1), (2, 0, 0)]);

        position.clear_probes();
        assert!(position.probes().is_empty());
    }

    #[test]
    fn test_game_over_and_winner() {
        let position = Position::new(1, 3)
            .with_card(0, 1, Player::Red, card("r", 1, 2))
            .with_passed(Player::Red, true);
        assert!(!position.is_game_over());
        assert!(position.winner().is_err());

        let position = position.with_passed(Player::Blue, true);
        assert!(position.is_game_over());
        assert_eq!(position.winner().unwrap(), GameResult::Winner(Player::Red));
    }

    #[test]
    fn test_scores_saturate_with_huge_values() {
        let position = Position::new(2, 5)
            .with_card(0, 1, Player::Red, card("a", 1, u32::MAX))
            .with_card(0, 2, Player::Red, card("b", 1, u32::MAX))
            .with_card(1, 1, Player::Red, card("c", 1, u32::MAX))
            .with_passed(Player::Red, true)
            .with_passed(Player::Blue, true);

        assert_eq!(position.row_score(Player::Red, 0), u32::MAX);
        assert_eq!(position.total_score(Player::Red), u32::MAX);
        assert_eq!(position.winner().unwrap(), GameResult::Winner(Player::Red));
    }

    #[test]
    fn test_snapshot_of_engine() {
        let deck: Vec<Card> = (0..9).map(|i| card(&format!("c{i}"), 1, 1)).collect();
        let mut engine = GameEngine::seeded(3);
        engine.init_game(1, 3, &deck, &deck, 3).unwrap();
        engine.start_game().unwrap();

        let position = Position::snapshot(&engine);
        assert_eq!(position.board(), engine.board());
        assert_eq!(position.hand(Player::Red), engine.hand(Player::Red));
        assert_eq!(position.current_player(), Player::Red);
        assert_eq!(position.total_score(Player::Blue), 0);
    }
}
