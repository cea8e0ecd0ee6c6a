//! Card system: influence masks, card values, and deck files.
//!
//! ## Key Types
//!
//! - `InfluenceMask`: 5x5 relative pattern with a fixed center
//! - `Card`: immutable name/cost/value/mask value
//! - `DeckFormatError`: failures from the deck file loader

pub mod card;
pub mod loader;
pub mod mask;

pub use card::{Card, MAX_COST, MIN_COST};
pub use loader::{parse_deck, read_deck, DeckFormatError};
pub use mask::{Influence, InfluenceMask, MaskError, MASK_CENTER, MASK_SIZE};
