//! Match loop and summary.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::{Player, PlayerMap};
use crate::error::{GameError, Result};
use crate::rules::{GameEngine, GameResult, ReadonlyGame};
use crate::strategy::Strategy;

/// Outcome of a finished match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Strategy name playing each side.
    pub strategies: PlayerMap<String>,

    pub result: GameResult,

    /// Total score (rows strictly won) per player.
    pub totals: PlayerMap<u32>,

    /// Raw row scores, top row first.
    pub row_scores: Vec<PlayerMap<u32>>,

    /// Cards placed per player.
    pub placements: PlayerMap<u32>,

    /// Passes per player, the two closing passes included.
    pub passes: PlayerMap<u32>,

    /// Total actions taken (placements plus passes).
    pub turns: u32,
}

impl MatchSummary {
    /// Snapshot the scores of a finished game.
    fn from_game(
        game: &dyn ReadonlyGame,
        strategies: PlayerMap<String>,
        placements: PlayerMap<u32>,
        passes: PlayerMap<u32>,
    ) -> Result<Self> {
        let result = game.winner()?;
        let row_scores = (0..game.rows())
            .map(|row| PlayerMap::new(|p| game.row_score(p, row)))
            .collect();
        let turns = placements.iter().map(|(_, n)| n).sum::<u32>()
            + passes.iter().map(|(_, n)| n).sum::<u32>();

        Ok(Self {
            strategies,
            result,
            totals: PlayerMap::new(|p| game.total_score(p)),
            row_scores,
            placements,
            passes,
            turns,
        })
    }

    /// The winning player, `None` on a tie.
    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.result.winner()
    }
}

/// Play a started game to completion.
///
/// Each turn the strategy for the side to move proposes a placement, which
/// is applied; `None` becomes a pass. The game ends after two consecutive
/// passes. Every placement turns a pawn cell into a card cell, so the loop
/// always terminates.
///
/// Fails with a state error if the engine is not started, and propagates any
/// strategy error or rejected placement unchanged.
pub fn run_match(
    engine: &mut GameEngine,
    red: &dyn Strategy,
    blue: &dyn Strategy,
) -> Result<MatchSummary> {
    if !engine.is_started() {
        return Err(GameError::state("match requires a started game"));
    }

    let strategies: PlayerMap<&dyn Strategy> = PlayerMap::new(|p| match p {
        Player::Red => red,
        Player::Blue => blue,
    });
    let mut placements = PlayerMap::with_value(0u32);
    let mut passes = PlayerMap::with_value(0u32);

    info!(red = red.name(), blue = blue.name(), "match started");

    while !engine.is_game_over() {
        let player = engine.current_player();
        let strategy = strategies[player];

        match strategy.choose_move(&*engine, player)? {
            Some(mv) => {
                debug!(%player, strategy = strategy.name(), %mv, "placing");
                engine.place_card(mv.card_index, mv.row, mv.col)?;
                placements[player] += 1;
            }
            None => {
                debug!(%player, strategy = strategy.name(), "passing");
                engine.pass_turn()?;
                passes[player] += 1;
            }
        }
    }

    let summary = MatchSummary::from_game(
        &*engine,
        PlayerMap::new(|p| strategies[p].name().to_string()),
        placements,
        passes,
    )?;
    info!(
        result = ?summary.result,
        red = summary.totals[Player::Red],
        blue = summary.totals[Player::Blue],
        turns = summary.turns,
        "match finished"
    );
    Ok(summary)
}
