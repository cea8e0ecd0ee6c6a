//! # pawns-board
//!
//! Engine and computer players for Pawns Board, a two-player card
//! placement game on a rectangular grid.
//!
//! ## Rules in brief
//!
//! - RED owns a pawn on every cell of the left column, BLUE on the right
//! - On their turn a player places a card from hand onto a cell where they
//!   own at least as many pawns as the card costs, or passes
//! - The card's influence mask then adds or converts pawns around it
//!   (mirrored left-to-right for BLUE)
//! - The game ends after two consecutive passes; each row is won by the
//!   player with the higher sum of card values there, and a player's score
//!   is the sum of the rows they win
//!
//! ## Design Principles
//!
//! 1. **One mutator**: only `GameEngine` changes a game. Everything else
//!    (strategies, the match runner, tests) observes it through
//!    `ReadonlyGame`.
//!
//! 2. **Validate, then mutate**: a rejected call leaves the engine exactly
//!    as it was.
//!
//! 3. **Cheap snapshots**: decks and hands are persistent `im::Vector`s, so
//!    `GameEngine::copy` is O(board) for what-if evaluation.
//!
//! ## Modules
//!
//! - `core`: players, per-player storage, RNG, configuration
//! - `cards`: influence masks, cards, deck file loader
//! - `board`: cells, layout and influence propagation
//! - `rules`: the engine state machine and read-only query contract
//! - `strategy`: computer players
//! - `play`: automated matches between two strategies

pub mod board;
pub mod cards;
pub mod core;
pub mod error;
pub mod play;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, Player, PlayerMap};

pub use crate::cards::{
    parse_deck, read_deck, Card, DeckFormatError, Influence, InfluenceMask, MaskError,
};

pub use crate::board::{Board, Cell, MAX_PAWNS};

pub use crate::rules::{GameEngine, GameResult, Phase, Position, ReadonlyGame};

pub use crate::strategy::{
    ChainedStrategy, ControlBoard, FillFirst, MaximizeRowScore, MinMax, Move, Strategy,
    StrategyKind,
};

pub use crate::play::{run_match, MatchSummary};

pub use crate::error::{GameError, Result};
