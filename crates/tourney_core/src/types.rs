//! Bracket building blocks

/// One slot in a round's bracket.
///
/// A round partitions the current field into fixtures: two-player pairs plus,
/// when the field size is odd, a single trailing bye.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Fixture {
    /// Two players meet in a shootout. Order matters: the first player
    /// kicks first.
    Pair(String, String),
    /// An unpaired player who advances without playing.
    Bye(String),
}

impl Fixture {
    /// Number of players occupying this fixture.
    pub fn player_count(&self) -> usize {
        match self {
            Fixture::Pair(_, _) => 2,
            Fixture::Bye(_) => 1,
        }
    }

    /// Players in this fixture, in kicking order.
    pub fn players(&self) -> Vec<&str> {
        match self {
            Fixture::Pair(home, away) => vec![home, away],
            Fixture::Bye(player) => vec![player],
        }
    }
}
