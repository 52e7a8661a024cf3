//! Tournament loop: re-pair and replay rounds until one player is left

use rand::Rng;

use crate::kicker::Kicker;
use crate::match_runner::{MatchConfig, MatchRunner};
use crate::observer::TourneyObserver;
use crate::pairing::draw_fixtures;

/// Run a knockout tournament to completion and return the champion.
///
/// Each iteration draws a fresh random bracket from the surviving field,
/// plays it out, and keeps the winners. The loop stops the moment a single
/// name is left, so a one-player field is crowned immediately without a
/// single kick.
///
/// The field must not be empty; callers are expected to reject that before
/// invoking the loop.
///
/// # Panics
///
/// Panics if `players` is empty.
pub fn run_tournament<R, K, O>(
    players: Vec<String>,
    config: MatchConfig,
    rng: &mut R,
    kicker: &mut K,
    observer: &mut O,
) -> String
where
    R: Rng,
    K: Kicker,
    O: TourneyObserver,
{
    assert!(!players.is_empty(), "a tournament needs at least one player");

    let runner = MatchRunner::new(config);
    let mut field = players;
    let mut round = 0;

    while field.len() > 1 {
        round += 1;
        let fixtures = draw_fixtures(field, rng);
        observer.round_started(round, &fixtures);
        field = runner.run_round(&fixtures, kicker, observer);
        observer.round_finished(&field);
    }

    field.pop().expect("non-empty field always leaves a champion")
}

#[cfg(test)]
#[path = "tournament_tests.rs"]
mod tournament_tests;
