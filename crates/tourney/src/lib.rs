//! Tourney CLI
//!
//! Command-line front end for the knockout tournament simulator:
//! - Parses participants and match options
//! - Narrates the play-by-play to stdout with dramatic pacing
//! - Declares the champion
//!
//! # Usage
//!
//! ```bash
//! # Six-shot shootouts among four players, full dramatic pacing
//! cargo run -p tourney -- Ada Grace Edsger Barbara
//!
//! # Faster pacing, shorter shootouts, reproducible bracket
//! cargo run -p tourney -- -p 2 -s 0.2 --seed 7 Ada Grace Edsger
//! ```

mod cli;
mod narrator;

pub use cli::*;
pub use narrator::*;
