//! Deck configuration files.
//!
//! A deck file is a sequence of card blocks:
//!
//! ```text
//! Security 1 2
//! XXXXX
//! XXIXX
//! XICIX
//! XXIXX
//! XXXXX
//! ```
//!
//! The first line is `name cost value`, followed by exactly five mask rows.
//! Blank lines between blocks are ignored. The engine never reads files;
//! callers load decks here and hand the resulting cards to `init_game`.

use std::path::{Path, PathBuf};

use super::card::{Card, MAX_COST, MIN_COST};
use super::mask::{InfluenceMask, MaskError, MASK_SIZE};
use crate::error::GameError;

/// Errors produced while loading a deck. Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum DeckFormatError {
    #[error("failed to read deck file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: expected 'name cost value', got '{text}'")]
    MalformedMetadata { line: usize, text: String },

    #[error("line {line}: {field} '{text}' is not a number")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        text: String,
    },

    #[error("line {line}: {field} {value} is out of range")]
    OutOfRange {
        line: usize,
        field: &'static str,
        value: i64,
    },

    #[error("line {line}: card '{name}' ends after {found} of 5 mask rows")]
    Truncated {
        line: usize,
        name: String,
        found: usize,
    },

    #[error("line {line}: bad mask for card '{name}': {source}")]
    Mask {
        line: usize,
        name: String,
        #[source]
        source: MaskError,
    },

    #[error("line {line}: {source}")]
    InvalidCard {
        line: usize,
        #[source]
        source: GameError,
    },
}

/// Read and parse a deck file.
pub fn read_deck(path: impl AsRef<Path>) -> Result<Vec<Card>, DeckFormatError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| DeckFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let deck = parse_deck(&text)?;
    tracing::debug!(path = %path.display(), cards = deck.len(), "loaded deck");
    Ok(deck)
}

/// Parse deck text into cards, in file order.
pub fn parse_deck(text: &str) -> Result<Vec<Card>, DeckFormatError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim_end()));
    let mut deck = Vec::new();

    while let Some((line, metadata)) = lines.next() {
        if metadata.is_empty() {
            continue;
        }

        let (name, cost, value) = parse_metadata(line, metadata)?;

        let mut rows = Vec::with_capacity(MASK_SIZE);
        while rows.len() < MASK_SIZE {
            match lines.next() {
                Some((_, row)) => rows.push(row),
                None => {
                    return Err(DeckFormatError::Truncated {
                        line,
                        name: name.to_string(),
                        found: rows.len(),
                    })
                }
            }
        }

        let mask = InfluenceMask::parse(rows.as_slice()).map_err(|source| DeckFormatError::Mask {
            line,
            name: name.to_string(),
            source,
        })?;
        let card = Card::new(name, cost, value, mask)
            .map_err(|source| DeckFormatError::InvalidCard { line, source })?;
        deck.push(card);
    }

    Ok(deck)
}

fn parse_metadata(line: usize, text: &str) -> Result<(&str, u8, u32), DeckFormatError> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let [name, cost, value] = parts[..] else {
        return Err(DeckFormatError::MalformedMetadata {
            line,
            text: text.to_string(),
        });
    };

    let cost = parse_number(line, "cost", cost)?;
    if cost < i64::from(MIN_COST) || cost > i64::from(MAX_COST) {
        return Err(DeckFormatError::OutOfRange {
            line,
            field: "cost",
            value: cost,
        });
    }

    let value = parse_number(line, "value", value)?;
    if value <= 0 || value > i64::from(u32::MAX) {
        return Err(DeckFormatError::OutOfRange {
            line,
            field: "value",
            value,
        });
    }

    Ok((name, cost as u8, value as u32))
}

fn parse_number(line: usize, field: &'static str, text: &str) -> Result<i64, DeckFormatError> {
    text.parse().map_err(|_| DeckFormatError::InvalidNumber {
        line,
        field,
        text: text.to_string(),
    })
}
