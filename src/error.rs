//! Error taxonomy for the engine and strategy layer.
//!
//! Deck file problems have their own type, [`DeckFormatError`](crate::cards::DeckFormatError),
//! since only the loader produces them.

/// Errors raised by the engine and by strategies.
///
/// Every mutating engine operation validates before mutating, so any of
/// these leaves the game exactly as it was before the call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Invalid setup parameters, malformed card data, or an empty strategy chain.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Operation not allowed in the current lifecycle phase.
    #[error("state error: {0}")]
    State(String),

    /// A placement that violates the board rules.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    /// A strategy was asked to move for the side not on turn.
    #[error("illegal argument: {0}")]
    IllegalArgument(String),
}

impl GameError {
    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        GameError::Configuration(msg.into())
    }

    pub(crate) fn state(msg: impl Into<String>) -> Self {
        GameError::State(msg.into())
    }

    pub(crate) fn illegal_move(msg: impl Into<String>) -> Self {
        GameError::IllegalMove(msg.into())
    }

    pub(crate) fn illegal_argument(msg: impl Into<String>) -> Self {
        GameError::IllegalArgument(msg.into())
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            GameError::configuration("rows must be positive").to_string(),
            "configuration error: rows must be positive"
        );
        assert_eq!(GameError::state("game is over").to_string(), "state error: game is over");
        assert_eq!(
            GameError::illegal_move("cell (0, 1) is empty").to_string(),
            "illegal move: cell (0, 1) is empty"
        );
        assert_eq!(
            GameError::illegal_argument("not RED's turn").to_string(),
            "illegal argument: not RED's turn"
        );
    }
}
