//! Play a series of games between two strategies and report the score.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use reversi_core::{Board, Color};
use reversi_player::{
    play_match, MatchOutcome, MonteCarloStrategy, RandomStrategy, StdRandom, Strategy,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StrategyKind {
    /// Uniformly random legal moves
    Random,
    /// Flat Monte Carlo ranking over random playouts
    MonteCarlo,
}

/// Pit Reversi strategies against each other
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Monte Carlo playouts per decision
    #[arg(short, long, default_value_t = 500)]
    trials: u32,

    /// Base seed; omit to seed from the operating system
    #[arg(short, long)]
    seed: Option<u32>,

    /// Strategy playing black
    #[arg(long, value_enum, default_value_t = StrategyKind::MonteCarlo)]
    black: StrategyKind,

    /// Strategy playing white
    #[arg(long, value_enum, default_value_t = StrategyKind::Random)]
    white: StrategyKind,

    /// Print the final board of every game
    #[arg(long)]
    show_board: bool,
}

fn make_rng(seed: Option<u32>, stream: u32) -> StdRandom {
    match seed {
        Some(seed) => StdRandom::new(seed.wrapping_add(stream)),
        None => StdRandom::from_entropy(),
    }
}

fn make_strategy(kind: StrategyKind, rng: StdRandom, trials: u32) -> Box<dyn Strategy> {
    match kind {
        StrategyKind::Random => Box::new(RandomStrategy::new(rng)),
        StrategyKind::MonteCarlo => Box::new(MonteCarloStrategy::new(rng, trials)),
    }
}

#[derive(Default)]
struct Tally {
    black: u32,
    white: u32,
    draws: u32,
}

impl Tally {
    fn record(&mut self, outcome: &MatchOutcome) {
        match outcome.winner {
            Some(Color::Black) => self.black += 1,
            Some(Color::White) => self.white += 1,
            None => self.draws += 1,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(
        games = args.games,
        trials = args.trials,
        black = ?args.black,
        white = ?args.white,
        "starting arena"
    );

    let progress = ProgressBar::new(args.games as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")
            .context("invalid progress bar template")?,
    );

    let mut tally = Tally::default();
    for game in 0..args.games {
        // Separate streams per side and per game.
        let stream = game.wrapping_mul(2);
        let black_rng = make_rng(args.seed, stream);
        let white_rng = make_rng(args.seed, stream.wrapping_add(1));
        let mut black = make_strategy(args.black, black_rng, args.trials);
        let mut white = make_strategy(args.white, white_rng, args.trials);

        let outcome = play_match(Board::new(), black.as_mut(), white.as_mut())
            .with_context(|| format!("game {} failed", game + 1))?;
        tally.record(&outcome);

        debug!(
            game = game + 1,
            winner = ?outcome.winner,
            black = outcome.black_disks,
            white = outcome.white_disks,
            moves = outcome.moves,
            passes = outcome.passes,
            "game finished"
        );
        if args.show_board {
            progress.println(format!(
                "Game {}: {} - {}\n{}",
                game + 1,
                outcome.black_disks,
                outcome.white_disks,
                outcome.final_board
            ));
        }

        progress.set_message(format!("B{} W{} D{}", tally.black, tally.white, tally.draws));
        progress.inc(1);
    }
    progress.finish();

    info!(
        black_wins = tally.black,
        white_wins = tally.white,
        draws = tally.draws,
        "arena finished"
    );
    println!(
        "{:?} (black) vs {:?} (white): W{} L{} D{}",
        args.black, args.white, tally.black, tally.white, tally.draws
    );

    Ok(())
}
