//! Game rules: the engine state machine and the read-only query contract.
//!
//! - `GameEngine`: owns the board, decks, hands and turn order; the only
//!   thing that mutates a game
//! - `ReadonlyGame`: what strategies and presentation code may observe
//! - `Position`: a hand-built, static situation implementing `ReadonlyGame`

pub mod engine;
pub mod position;
pub mod view;

pub use engine::{GameEngine, Phase, MAX_COPIES_PER_CARD};
pub use position::Position;
pub use view::{check_placement, GameResult, ReadonlyGame};
