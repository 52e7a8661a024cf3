//! Console narration with dramatic pacing

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use tourney_core::{Fixture, TourneyObserver};

const ROUND_BANNER_WIDTH: usize = 41;

/// Narrates tournament events to stdout, paced by a speed multiplier.
///
/// Base delays are fixed per event; the multiplier scales all of them, and a
/// multiplier of zero (or below) silences the pacing entirely so the whole
/// tournament prints at once.
pub struct ConsoleNarrator {
    speed: f64,
    in_sudden_death: bool,
}

impl ConsoleNarrator {
    pub fn new(speed: f64) -> Self {
        Self {
            speed,
            in_sudden_death: false,
        }
    }

    fn pause(&self, base_secs: f64) {
        if let Some(delay) = scaled_delay(self.speed, base_secs) {
            thread::sleep(delay);
        }
    }
}

/// Effective pacing delay, or `None` when pacing is disabled.
pub fn scaled_delay(speed: f64, base_secs: f64) -> Option<Duration> {
    let secs = speed * base_secs;
    if secs > 0.0 {
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    }
}

impl TourneyObserver for ConsoleNarrator {
    fn round_started(&mut self, _number: u32, _fixtures: &[Fixture]) {
        println!("{}", "*".repeat(ROUND_BANNER_WIDTH));
    }

    fn match_started(&mut self, home: &str, away: &str) {
        println!("Next up: {} vs {}", home, away);
        println!("{}", "-".repeat(ROUND_BANNER_WIDTH));
        self.pause(1.0);
    }

    fn penalty_taken(&mut self, player: &str, scored: bool) {
        print!("{} steps up... ", player);
        io::stdout().flush().ok();
        self.pause(0.6);
        print!("{} kicks... ", player);
        io::stdout().flush().ok();
        self.pause(1.0);
        if scored {
            println!("Scored \\O/");
        } else {
            println!("Missed <O>");
        }
    }

    fn score_updated(&mut self, home: &str, home_score: u32, away_score: u32, away: &str) {
        println!("\t{} {} - {} {}", home, home_score, away_score, away);
        println!();
    }

    fn regulation_finished(&mut self) {
        self.pause(0.5);
        println!("{}", "-".repeat(ROUND_BANNER_WIDTH));
    }

    fn sudden_death_started(&mut self) {
        println!("Draw! Sudden death...");
        self.pause(0.3);
        self.in_sudden_death = true;
    }

    fn match_won(&mut self, winner: &str) {
        if self.in_sudden_death {
            self.pause(1.5);
            self.in_sudden_death = false;
        }
        println!("{} is the winner!", winner);
    }

    fn bye(&mut self, player: &str) {
        println!("No contendants for {}, advances to next round", player);
    }

    fn round_finished(&mut self, _winners: &[String]) {
        println!("{}", "*".repeat(ROUND_BANNER_WIDTH));
    }
}

#[cfg(test)]
#[path = "narrator_tests.rs"]
mod narrator_tests;
