//! Command-line options

use clap::Parser;
use tourney_core::DEFAULT_PENALTY_COUNT;

/// Simulate a penalty-shootout knockout tournament.
#[derive(Parser, Debug)]
#[command(name = "tourney", version, about)]
pub struct Cli {
    /// A space-separated list of participants for the tourney
    pub players: Vec<String>,

    /// Total amount of shots to be made by players; defaults to 6
    /// (3 penalties each player)
    #[arg(
        short = 'p',
        long = "penalty-count",
        visible_alias = "pc",
        default_value_t = DEFAULT_PENALTY_COUNT
    )]
    pub penalty_count: u32,

    /// Modifier for simulation run speed; 0 or below disables all pacing
    #[arg(short = 's', long, default_value_t = 1.0, allow_negative_numbers = true)]
    pub speed: f64,

    /// Seed for the random draw and kicks; omit for a fresh tournament
    #[arg(long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
