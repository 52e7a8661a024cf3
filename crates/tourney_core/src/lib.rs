//! Knockout Tournament Core
//!
//! This crate provides the simulation logic for a penalty-shootout knockout
//! tournament:
//! - Random bracket pairing for each round
//! - Match resolution via alternating penalty kicks with sudden-death tie-break
//! - Round advancement until a single champion remains
//!
//! The crate is pure: it performs no I/O and never sleeps. Randomness comes in
//! through the [`Kicker`] trait and an injected [`rand::Rng`], and everything
//! observable about a running tournament flows out through the
//! [`TourneyObserver`] seam, so callers decide how (or whether) to narrate it.

mod kicker;
mod match_runner;
mod observer;
mod pairing;
mod tournament;
mod types;

pub use kicker::*;
pub use match_runner::*;
pub use observer::*;
pub use pairing::*;
pub use tournament::*;
pub use types::*;
