//! Card values.
//!
//! A `Card` is immutable once built and compares structurally, so two
//! cards with the same name, cost, value and mask are the same card for
//! deck duplicate limits.

use serde::Serialize;

use super::mask::InfluenceMask;
use crate::error::{GameError, Result};

/// Smallest legal card cost.
pub const MIN_COST: u8 = 1;

/// Largest legal card cost, also the pawn stack cap.
pub const MAX_COST: u8 = 3;

/// A playable card.
///
/// ## Example
///
/// ```
/// use pawns_board::cards::{Card, InfluenceMask};
///
/// let mask = InfluenceMask::from_offsets(&[(0, 1)]).unwrap();
/// let card = Card::new("Scout", 1, 2, mask).unwrap();
///
/// assert_eq!(card.cost(), 1);
/// assert_eq!(card.value_score(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Card {
    name: String,
    cost: u8,
    value_score: u32,
    mask: InfluenceMask,
}

impl Card {
    /// Create a card, checking name, cost and value.
    pub fn new(
        name: impl Into<String>,
        cost: u8,
        value_score: u32,
        mask: InfluenceMask,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GameError::configuration("card name cannot be empty"));
        }
        if !(MIN_COST..=MAX_COST).contains(&cost) {
            return Err(GameError::configuration(format!(
                "card '{name}' has cost {cost}, expected {MIN_COST}..={MAX_COST}"
            )));
        }
        if value_score == 0 {
            return Err(GameError::configuration(format!(
                "card '{name}' must have a positive value score"
            )));
        }

        Ok(Self {
            name,
            cost,
            value_score,
            mask,
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pawns needed on the target cell.
    #[must_use]
    pub fn cost(&self) -> u8 {
        self.cost
    }

    /// Points the card adds to its owner's row score.
    #[must_use]
    pub fn value_score(&self) -> u32 {
        self.value_score
    }

    #[must_use]
    pub fn mask(&self) -> &InfluenceMask {
        &self.mask
    }
}

/// Renders the card in deck-file form: a metadata line then five mask rows.
impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.name, self.cost, self.value_score)?;
        for row in self.mask.text_rows() {
            write!(f, "\n{row}")?;
        }
        Ok(())
    }
}
