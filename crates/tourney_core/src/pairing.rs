//! Random bracket pairing

use rand::seq::SliceRandom;
use rand::Rng;

use crate::types::Fixture;

/// Draw a round's bracket from the current field.
///
/// Shuffles the field uniformly, then partitions it in order into pairs.
/// An odd field leaves one trailing [`Fixture::Bye`]. Every player lands in
/// exactly one fixture; an empty field yields an empty bracket.
pub fn draw_fixtures<R: Rng>(mut players: Vec<String>, rng: &mut R) -> Vec<Fixture> {
    players.shuffle(rng);

    let mut fixtures = Vec::with_capacity((players.len() + 1) / 2);
    let mut remaining = players.into_iter();
    while let Some(home) = remaining.next() {
        match remaining.next() {
            Some(away) => fixtures.push(Fixture::Pair(home, away)),
            None => fixtures.push(Fixture::Bye(home)),
        }
    }
    fixtures
}

#[cfg(test)]
#[path = "pairing_tests.rs"]
mod pairing_tests;
