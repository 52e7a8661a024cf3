//! Observation seam between simulation and presentation
//!
//! The simulation never prints. Everything a narrator (or a test) wants to
//! know about a running tournament arrives through [`TourneyObserver`]
//! callbacks, in the order it happens.

use crate::types::Fixture;

/// Receives play-by-play events from the simulation.
///
/// All methods default to no-ops so implementors only handle what they
/// care about.
pub trait TourneyObserver {
    /// A new round's bracket has been drawn. Rounds are numbered from 1.
    fn round_started(&mut self, _number: u32, _fixtures: &[Fixture]) {}

    /// A two-player match is about to begin.
    fn match_started(&mut self, _home: &str, _away: &str) {}

    /// A penalty was taken.
    fn penalty_taken(&mut self, _player: &str, _scored: bool) {}

    /// Running score after a regulation kick. Not emitted during
    /// sudden death.
    fn score_updated(&mut self, _home: &str, _home_score: u32, _away_score: u32, _away: &str) {}

    /// All regulation kicks have been taken.
    fn regulation_finished(&mut self) {}

    /// Regulation ended level; sudden death begins.
    fn sudden_death_started(&mut self) {}

    /// A match has a winner.
    fn match_won(&mut self, _winner: &str) {}

    /// An unpaired player advances without playing.
    fn bye(&mut self, _player: &str) {}

    /// The round is over; `winners` advance to the next one.
    fn round_finished(&mut self, _winners: &[String]) {}
}

/// An observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl TourneyObserver for SilentObserver {}
