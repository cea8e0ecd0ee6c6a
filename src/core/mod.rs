//! Core types: players, per-player storage, RNG, configuration.

pub mod config;
pub mod player;
pub mod rng;

pub use config::GameConfig;
pub use player::{Player, PlayerMap};
pub use rng::GameRng;
