//! Self-play CLI: pit two strategies against each other.
//!
//! Loads a deck file per side, plays one seeded game to the end and prints
//! the match summary as JSON on stdout.

use std::path::PathBuf;

use clap::Parser;
use pawns_board::{read_deck, run_match, GameConfig, GameEngine, StrategyKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pawns-selfplay")]
#[command(about = "Play one Pawns Board game between two computer strategies")]
struct Args {
    /// Deck file for RED
    #[arg(long, default_value = "decks/red_deck.txt")]
    red_deck: PathBuf,

    /// Deck file for BLUE
    #[arg(long, default_value = "decks/blue_deck.txt")]
    blue_deck: PathBuf,

    /// Strategy for RED
    #[arg(long, default_value = "chained")]
    red: StrategyKind,

    /// Strategy for BLUE
    #[arg(long, default_value = "minmax")]
    blue: StrategyKind,

    /// Board rows
    #[arg(long, default_value = "5")]
    rows: usize,

    /// Board columns (odd, greater than 1)
    #[arg(long, default_value = "7")]
    cols: usize,

    /// Opening hand size
    #[arg(long, default_value = "3")]
    hand_size: usize,

    /// Dealing seed
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Pretty-print the summary
    #[arg(long)]
    pretty: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// `RUST_LOG` when set, otherwise `debug` with `--verbose` and `warn` without.
fn log_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose { "debug" } else { "warn" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(args.verbose))
        .with_writer(std::io::stderr)
        .init();

    let config = GameConfig::default()
        .with_board(args.rows, args.cols)
        .with_hand_size(args.hand_size)
        .with_seed(args.seed);

    let red_deck = read_deck(&args.red_deck)?;
    let blue_deck = read_deck(&args.blue_deck)?;
    info!(
        red = red_deck.len(),
        blue = blue_deck.len(),
        "decks loaded"
    );

    let mut engine = GameEngine::with_config(&config, &red_deck, &blue_deck)?;
    engine.start_game()?;

    let red = args.red.build();
    let blue = args.blue.build();
    let summary = run_match(&mut engine, red.as_ref(), blue.as_ref())?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&summary)?
    } else {
        serde_json::to_string(&summary)?
    };
    println!("{json}");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the RUST_LOG changes never race.
    #[test]
    fn test_log_filter_prefers_rust_log() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(log_filter(false).to_string(), "warn");
        assert_eq!(log_filter(true).to_string(), "debug");

        std::env::set_var("RUST_LOG", "pawns_board=trace");
        assert_eq!(log_filter(false).to_string(), "pawns_board=trace");
        assert_eq!(log_filter(true).to_string(), "pawns_board=trace");
        std::env::remove_var("RUST_LOG");
    }
}
