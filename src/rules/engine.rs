//! The authoritative game state machine.
//!
//! Lifecycle:
//!
//! 1. `GameEngine::new(rng)` - nothing set up, every mutation fails
//! 2. `init_game` - board built, decks stored, hands empty
//! 3. `start_game` - hands dealt, RED to move
//! 4. `place_card` / `pass_turn` until both players pass back to back
//!
//! Every mutating call validates all of its preconditions first, so a
//! failed call leaves the engine exactly as it was.
//!
//! ## Snapshots
//!
//! `copy()` returns an independent engine for what-if evaluation. Decks and
//! hands are `im::Vector`s, so the copy is cheap and copy-on-write: writes to
//! either side never show through to the other.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use super::view::{check_placement, ReadonlyGame};
use crate::board::Board;
use crate::cards::Card;
use crate::core::{GameConfig, GameRng, Player, PlayerMap};
use crate::error::{GameError, Result};

/// Maximum structurally-equal copies of one card per deck.
pub const MAX_COPIES_PER_CARD: usize = 2;

/// Lifecycle phase of an engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Phase {
    Uninitialized,
    Initialized,
    Started,
}

/// Game engine: board, decks, hands, turn order and the dealing RNG.
#[derive(Debug)]
pub struct GameEngine {
    phase: Phase,
    hand_size: usize,
    board: Board,
    decks: PlayerMap<Vector<Card>>,
    hands: PlayerMap<Vector<Card>>,
    current: Player,
    passed: PlayerMap<bool>,
    rng: GameRng,
}

impl GameEngine {
    /// Create an uninitialized engine that deals with `rng`.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            phase: Phase::Uninitialized,
            hand_size: 0,
            board: Board::default(),
            decks: PlayerMap::default(),
            hands: PlayerMap::default(),
            current: Player::Red,
            passed: PlayerMap::with_value(false),
            rng,
        }
    }

    /// Create an uninitialized engine with a seeded RNG.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Create and initialize an engine from a config (seed included).
    pub fn with_config(config: &GameConfig, red_deck: &[Card], blue_deck: &[Card]) -> Result<Self> {
        let mut engine = Self::seeded(config.seed);
        engine.init_game(config.rows, config.cols, red_deck, blue_deck, config.hand_size)?;
        Ok(engine)
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Validate the setup and build a fresh board. The game is not started.
    ///
    /// Calling this again discards the previous game.
    pub fn init_game(
        &mut self,
        rows: usize,
        cols: usize,
        red_deck: &[Card],
        blue_deck: &[Card],
        hand_size: usize,
    ) -> Result<()> {
        let config = GameConfig {
            rows,
            cols,
            hand_size,
            seed: self.rng.seed(),
        };
        config.validate()?;

        if red_deck.is_empty() || blue_deck.is_empty() {
            return Err(GameError::configuration("decks cannot be empty"));
        }
        for (player, deck) in [(Player::Red, red_deck), (Player::Blue, blue_deck)] {
            if hand_size > deck.len() / 3 {
                return Err(GameError::configuration(format!(
                    "hand size {hand_size} exceeds a third of {player}'s {}-card deck",
                    deck.len()
                )));
            }
        }
        // validate() has rejected boards whose cell count overflows
        let cells = config.cell_count().unwrap_or(usize::MAX);
        let cards = red_deck.len() + blue_deck.len();
        if cards < cells {
            return Err(GameError::configuration(format!(
                "decks hold {cards} cards, fewer than the {cells} board cells"
            )));
        }
        check_duplicates(Player::Red, red_deck)?;
        check_duplicates(Player::Blue, blue_deck)?;

        self.board = Board::new(rows, cols);
        self.decks = PlayerMap::new(|p| match p {
            Player::Red => red_deck.iter().cloned().collect(),
            Player::Blue => blue_deck.iter().cloned().collect(),
        });
        self.hands = PlayerMap::default();
        self.hand_size = hand_size;
        self.current = Player::Red;
        self.passed = PlayerMap::with_value(false);
        self.phase = Phase::Initialized;

        tracing::debug!(
            rows,
            cols,
            hand_size,
            red_deck = red_deck.len(),
            blue_deck = blue_deck.len(),
            "game initialized"
        );
        Ok(())
    }

    /// Deal opening hands and hand the first turn to RED.
    pub fn start_game(&mut self) -> Result<()> {
        match self.phase {
            Phase::Uninitialized => return Err(GameError::state("game has not been initialized")),
            Phase::Started => return Err(GameError::state("game has already started")),
            Phase::Initialized => {}
        }

        for _ in 0..self.hand_size {
            for player in Player::ALL {
                self.draw(player);
            }
        }

        self.current = Player::Red;
        self.passed = PlayerMap::with_value(false);
        self.phase = Phase::Started;

        tracing::debug!(
            red_hand = self.hands[Player::Red].len(),
            blue_hand = self.hands[Player::Blue].len(),
            "game started"
        );
        Ok(())
    }

    /// Place a card from the current player's hand on one of their pawn cells.
    pub fn place_card(&mut self, card_index: usize, row: usize, col: usize) -> Result<()> {
        self.ensure_in_play()?;
        let card = check_placement(&*self, card_index, row, col)?.clone();

        let player = self.current;
        self.hands[player].remove(card_index);
        self.board.place(row, col, player, card.clone());
        let touched = self.board.apply_influence(player, card.mask(), row, col);
        self.draw(player);
        self.passed[player] = false;
        self.current = player.opponent();

        tracing::debug!(
            %player,
            card = card.name(),
            row,
            col,
            touched,
            "card placed"
        );
        Ok(())
    }

    /// End the current player's turn without placing.
    pub fn pass_turn(&mut self) -> Result<()> {
        self.ensure_in_play()?;

        let player = self.current;
        self.passed[player] = true;
        self.current = player.opponent();

        tracing::debug!(%player, "turn passed");
        if self.is_game_over() {
            tracing::debug!(
                red = self.total_score(Player::Red),
                blue = self.total_score(Player::Blue),
                "game over"
            );
        }
        Ok(())
    }

    /// Independent snapshot for simulation.
    ///
    /// The copy deals from a stream derived from this engine's RNG, so
    /// simulated draws are reproducible without consuming real randomness.
    #[must_use]
    pub fn copy(&self) -> Self {
        Self {
            phase: self.phase,
            hand_size: self.hand_size,
            board: self.board.clone(),
            decks: self.decks.clone(),
            hands: self.hands.clone(),
            current: self.current,
            passed: self.passed.clone(),
            rng: self.rng.for_context("snapshot"),
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.phase != Phase::Uninitialized
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase == Phase::Started
    }

    /// Configured opening hand size (0 before `init_game`).
    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    /// A player's remaining draw pile, in storage order.
    #[must_use]
    pub fn deck(&self, player: Player) -> &Vector<Card> {
        &self.decks[player]
    }

    /// Cards left in a player's draw pile.
    #[must_use]
    pub fn deck_len(&self, player: Player) -> usize {
        self.decks[player].len()
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn ensure_in_play(&self) -> Result<()> {
        if self.phase != Phase::Started {
            return Err(GameError::state("game has not started"));
        }
        if self.is_game_over() {
            return Err(GameError::state("game is over"));
        }
        Ok(())
    }

    /// Move a uniformly random card from `player`'s deck to their hand.
    fn draw(&mut self, player: Player) {
        let deck = &mut self.decks[player];
        if deck.is_empty() {
            return;
        }
        let index = self.rng.gen_range_usize(0..deck.len());
        let card = deck.remove(index);
        self.hands[player].push_back(card);
    }
}

impl ReadonlyGame for GameEngine {
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
        self.ensure_in_play().is_ok() && check_placement(self, card_index, row, col).is_ok()
    }
}

fn check_duplicates(player: Player, deck: &[Card]) -> Result<()> {
    let mut counts: FxHashMap<&Card, usize> = FxHashMap::default();
    for card in deck {
        let count = counts.entry(card).or_insert(0);
        *count += 1;
        if *count > MAX_COPIES_PER_CARD {
            return Err(GameError::configuration(format!(
                "{player}'s deck has more than {MAX_COPIES_PER_CARD} copies of '{}'",
                card.name()
            )));
        }
    }
    Ok(())
}
