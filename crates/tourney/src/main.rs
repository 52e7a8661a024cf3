//! Tourney CLI entry point
//!
//! Wires parsed options, RNGs, and the console narrator into the core
//! tournament loop, then declares the champion.

use clap::{CommandFactory, Parser};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process;
use tourney::{Cli, ConsoleNarrator};
use tourney_core::{run_tournament, CoinFlipKicker, MatchConfig};

fn main() {
    let cli = Cli::parse();

    // The tournament loop requires at least one player; an empty invocation
    // gets usage help and a failing status instead.
    if cli.players.is_empty() {
        Cli::command().print_help().ok();
        process::exit(1);
    }

    // One seed drives both the bracket draw and the kicks, so a seeded run
    // replays the exact same tournament.
    let (mut draw_rng, kick_rng) = match cli.seed {
        Some(seed) => (
            StdRng::seed_from_u64(seed),
            StdRng::seed_from_u64(seed.wrapping_add(1)),
        ),
        None => (StdRng::from_entropy(), StdRng::from_entropy()),
    };

    let config = MatchConfig {
        penalty_count: cli.penalty_count,
    };
    let mut kicker = CoinFlipKicker::new(kick_rng);
    let mut narrator = ConsoleNarrator::new(cli.speed);

    let champion = run_tournament(cli.players, config, &mut draw_rng, &mut kicker, &mut narrator);
    println!("{} is the champion!", champion);
}
