//! 5x5 influence masks.
//!
//! A mask is read relative to the card's own cell, which sits at the
//! middle of the grid. Text form uses `X` (no influence), `I` (influence)
//! and `C` (center, exactly once, at the middle).

use serde::Serialize;
use smallvec::SmallVec;

/// Side length of every mask.
pub const MASK_SIZE: usize = 5;

/// Grid index of the center marker along both axes.
pub const MASK_CENTER: usize = MASK_SIZE / 2;

/// Offsets produced by a mask; masks rarely mark more than a handful of cells.
pub type Offsets = SmallVec<[(i32, i32); 8]>;

/// Marker stored in one mask cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Influence {
    None,
    Influence,
    Center,
}

impl Influence {
    /// Parse a mask character.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'X' => Some(Influence::None),
            'I' => Some(Influence::Influence),
            'C' => Some(Influence::Center),
            _ => None,
        }
    }

    /// Text form of this marker.
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Influence::None => 'X',
            Influence::Influence => 'I',
            Influence::Center => 'C',
        }
    }

    /// True for markers that project onto the board.
    #[must_use]
    pub fn is_active(self) -> bool {
        !matches!(self, Influence::None)
    }
}

/// Reasons a mask grid is rejected. Rows and columns are 0-based grid indices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MaskError {
    #[error("expected 5 rows, got {0}")]
    WrongRowCount(usize),

    #[error("row {row} has {len} characters, expected 5")]
    WrongRowLength { row: usize, len: usize },

    #[error("illegal character '{ch}' at ({row}, {col})")]
    IllegalChar { row: usize, col: usize, ch: char },

    #[error("second center marker at ({row}, {col})")]
    DuplicateCenter { row: usize, col: usize },

    #[error("center marker at ({row}, {col}), expected (2, 2)")]
    MisplacedCenter { row: usize, col: usize },

    #[error("missing center marker")]
    MissingCenter,

    #[error("offset ({row}, {col}) is outside the mask or on its center")]
    BadOffset { row: i32, col: i32 },
}

/// Immutable 5x5 influence pattern with its center fixed at the middle.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct InfluenceMask {
    cells: [[Influence; MASK_SIZE]; MASK_SIZE],
}

impl InfluenceMask {
    /// Parse a mask from its five text rows.
    ///
    /// ```
    /// use pawns_board::cards::InfluenceMask;
    ///
    /// let mask = InfluenceMask::parse(&["XXXXX", "XXIXX", "XICIX", "XXIXX", "XXXXX"]).unwrap();
    /// assert_eq!(mask.offsets().len(), 5);
    /// ```
    pub fn parse<S: AsRef<str>>(rows: &[S]) -> Result<Self, MaskError> {
        if rows.len() != MASK_SIZE {
            return Err(MaskError::WrongRowCount(rows.len()));
        }

        let mut cells = [[Influence::None; MASK_SIZE]; MASK_SIZE];
        let mut found_center = false;

        for (r, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != MASK_SIZE {
                return Err(MaskError::WrongRowLength { row: r, len });
            }

            for (c, ch) in line.chars().enumerate() {
                let marker =
                    Influence::from_char(ch).ok_or(MaskError::IllegalChar { row: r, col: c, ch })?;
                if marker == Influence::Center {
                    if found_center {
                        return Err(MaskError::DuplicateCenter { row: r, col: c });
                    }
                    if r != MASK_CENTER || c != MASK_CENTER {
                        return Err(MaskError::MisplacedCenter { row: r, col: c });
                    }
                    found_center = true;
                }
                cells[r][c] = marker;
            }
        }

        if !found_center {
            return Err(MaskError::MissingCenter);
        }
        Ok(Self { cells })
    }

    /// Build a mask from relative `(row, col)` offsets, each in `-2..=2`
    /// and not `(0, 0)`. The center is added automatically.
    pub fn from_offsets(offsets: &[(i32, i32)]) -> Result<Self, MaskError> {
        let reach = MASK_CENTER as i32;
        let mut cells = [[Influence::None; MASK_SIZE]; MASK_SIZE];
        cells[MASK_CENTER][MASK_CENTER] = Influence::Center;

        for &(row, col) in offsets {
            if row.abs() > reach || col.abs() > reach || (row == 0 && col == 0) {
                return Err(MaskError::BadOffset { row, col });
            }
            cells[(row + reach) as usize][(col + reach) as usize] = Influence::Influence;
        }
        Ok(Self { cells })
    }

    /// Relative offsets of every active cell (influence and center), row-major.
    #[must_use]
    pub fn offsets(&self) -> Offsets {
        let reach = MASK_CENTER as i32;
        let mut out = Offsets::new();
        for (r, row) in self.cells.iter().enumerate() {
            for (c, marker) in row.iter().enumerate() {
                if marker.is_active() {
                    out.push((r as i32 - reach, c as i32 - reach));
                }
            }
        }
        out
    }

    /// Text rows of the mask.
    pub fn text_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells
            .iter()
            .map(|row| row.iter().map(|m| m.as_char()).collect())
    }
}
