//! Strategy lookup by name.
//!
//! Keeps the names stable so command lines and logs can refer to
//! strategies without knowing their types.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{ChainedStrategy, ControlBoard, FillFirst, MaximizeRowScore, MinMax, Strategy};
use crate::error::GameError;

/// Every strategy that can be built by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    FillFirst,
    MaximizeRow,
    ControlBoard,
    Minmax,
    /// Maximize row, then control board, then fill first.
    Chained,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::FillFirst,
        StrategyKind::MaximizeRow,
        StrategyKind::ControlBoard,
        StrategyKind::Minmax,
        StrategyKind::Chained,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            StrategyKind::FillFirst => "fill-first",
            StrategyKind::MaximizeRow => "maximize-row",
            StrategyKind::ControlBoard => "control-board",
            StrategyKind::Minmax => "minmax",
            StrategyKind::Chained => "chained",
        }
    }

    /// Construct the strategy.
    #[must_use]
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::FillFirst => Box::new(FillFirst),
            StrategyKind::MaximizeRow => Box::new(MaximizeRowScore),
            StrategyKind::ControlBoard => Box::new(ControlBoard),
            StrategyKind::Minmax => Box::new(MinMax),
            StrategyKind::Chained => Box::new(ChainedStrategy::default()),
        }
    }
}

impl std::fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| {
                let known: Vec<_> = Self::ALL.iter().map(|k| k.name()).collect();
                GameError::configuration(format!(
                    "unknown strategy '{s}', expected one of: {}",
                    known.join(", ")
                ))
            })
    }
}
