//! Penalty takers

use rand::Rng;

/// Takes penalty kicks.
///
/// This is the only place chance enters a match, so swapping the
/// implementation makes the whole resolver deterministic.
pub trait Kicker {
    /// Take one penalty. Returns `true` if it was scored.
    ///
    /// The player name is informational; a fair kicker ignores it.
    fn kick(&mut self, player: &str) -> bool;
}

/// A fair kicker: every attempt is an independent 50/50 draw.
#[derive(Debug)]
pub struct CoinFlipKicker<R: Rng> {
    rng: R,
}

impl<R: Rng> CoinFlipKicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Kicker for CoinFlipKicker<R> {
    fn kick(&mut self, _player: &str) -> bool {
        self.rng.gen()
    }
}

/// A kicker that replays a fixed outcome sequence.
///
/// Useful for deterministic tests and replays. Panics if asked for more
/// kicks than the script contains.
#[derive(Debug, Clone)]
pub struct ScriptedKicker {
    outcomes: Vec<bool>,
    next: usize,
}

impl ScriptedKicker {
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes, next: 0 }
    }

    /// Number of kicks taken so far.
    pub fn kicks_taken(&self) -> usize {
        self.next
    }
}

impl Kicker for ScriptedKicker {
    fn kick(&mut self, player: &str) -> bool {
        let scored = *self
            .outcomes
            .get(self.next)
            .unwrap_or_else(|| panic!("scripted kicker exhausted at kick {} by {}", self.next, player));
        self.next += 1;
        scored
    }
}
