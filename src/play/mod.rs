//! Automated matches between two strategies.
//!
//! `run_match` drives a started engine to the end, asking whichever
//! strategy owns the side to move for a placement and passing when it has
//! none. The outcome is returned as a serializable `MatchSummary`.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pawns_board::play::run_match;
//! use pawns_board::strategy::{ControlBoard, MinMax};
//!
//! engine.start_game()?;
//! let summary = run_match(&mut engine, &ControlBoard, &MinMax)?;
//! println!("{}", serde_json::to_string_pretty(&summary)?);
//! ```

pub mod runner;

pub use runner::{run_match, MatchSummary};
