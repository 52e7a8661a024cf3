//! Match runner: penalty shootouts and round advancement

use crate::kicker::Kicker;
use crate::observer::TourneyObserver;
use crate::types::Fixture;

/// Default regulation kicks per match (three each).
pub const DEFAULT_PENALTY_COUNT: u32 = 6;

/// Configuration for a match
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Total regulation kicks, shared between both players. An even count
    /// gives balanced turns; an odd count simply hands the first kicker
    /// one extra attempt.
    pub penalty_count: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            penalty_count: DEFAULT_PENALTY_COUNT,
        }
    }
}

/// Resolves fixtures by penalty shootout.
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run one shootout between `home` and `away`.
    ///
    /// Kicks alternate strictly, home first, for the configured regulation
    /// count. A level score after regulation goes to sudden death: one kick
    /// each per round until exactly one of the pair scores. Always returns
    /// one of the two players; a draw is impossible.
    pub fn run_match<K: Kicker, O: TourneyObserver>(
        &self,
        home: &str,
        away: &str,
        kicker: &mut K,
        observer: &mut O,
    ) -> String {
        observer.match_started(home, away);

        let mut home_score: u32 = 0;
        let mut away_score: u32 = 0;

        for attempt in 0..self.config.penalty_count {
            let (player, score) = if attempt % 2 == 0 {
                (home, &mut home_score)
            } else {
                (away, &mut away_score)
            };
            let scored = kicker.kick(player);
            if scored {
                *score += 1;
            }
            observer.penalty_taken(player, scored);
            observer.score_updated(home, home_score, away_score, away);
        }
        observer.regulation_finished();

        if home_score == away_score {
            observer.sudden_death_started();
            // One kick each per round until the scores split. A single round
            // can only separate them by one, so the loop exits exactly when
            // one player scored and the other missed.
            while home_score == away_score {
                let home_scored = kicker.kick(home);
                if home_scored {
                    home_score += 1;
                }
                observer.penalty_taken(home, home_scored);
                let away_scored = kicker.kick(away);
                if away_scored {
                    away_score += 1;
                }
                observer.penalty_taken(away, away_scored);
            }
        }

        let winner = if home_score > away_score { home } else { away };
        observer.match_won(winner);
        winner.to_string()
    }

    /// Run every fixture in a round's bracket, in order.
    ///
    /// Pairs are resolved by [`run_match`](Self::run_match); a bye advances
    /// its player untouched, without consuming a single kick. The returned
    /// winner list preserves fixture order.
    pub fn run_round<K: Kicker, O: TourneyObserver>(
        &self,
        fixtures: &[Fixture],
        kicker: &mut K,
        observer: &mut O,
    ) -> Vec<String> {
        let mut winners = Vec::with_capacity(fixtures.len());
        for fixture in fixtures {
            match fixture {
                Fixture::Pair(home, away) => {
                    winners.push(self.run_match(home, away, kicker, observer));
                }
                Fixture::Bye(player) => {
                    observer.bye(player);
                    winners.push(player.clone());
                }
            }
        }
        winners
    }
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
