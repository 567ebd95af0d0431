use super::*;
use crate::Score;
use crate::gesture::*;
use std::time::Duration;
use std::time::Instant;

/// All mutable game state for one run of the program.
///
/// Starts at 0-0 in [`Phase::Waiting`]. Scores only move on the
/// Playing to Result transition, and by at most one point per round.
#[derive(Debug)]
pub struct Session<O = Random> {
    player: Score,
    computer: Score,
    rounds: u32,
    gesture: Gesture,
    phase: Phase,
    opponent: O,
}

impl Default for Session<Random> {
    fn default() -> Self {
        Self::new(Random::default())
    }
}

impl<O> Session<O>
where
    O: Opponent,
{
    pub fn new(opponent: O) -> Self {
        Self {
            player: 0,
            computer: 0,
            rounds: 0,
            gesture: Gesture::None,
            phase: Phase::Waiting,
            opponent,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }
    /// The gesture classified on the latest frame.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }
    pub fn player_score(&self) -> Score {
        self.player
    }
    pub fn computer_score(&self) -> Score {
        self.computer
    }
    /// Rounds that reached a result.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
    pub fn computer_choice(&self) -> Option<Gesture> {
        self.phase.computer()
    }
    pub fn result(&self) -> Option<Outcome> {
        self.phase.outcome()
    }
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.phase.remaining(now)
    }

    /// Begin a round. Only honored while waiting.
    pub fn start(&mut self, now: Instant) -> Option<Transition> {
        match self.phase {
            Phase::Waiting => {
                self.phase = Phase::Countdown { since: now };
                self.announce(Transition::Started);
                Some(Transition::Started)
            }
            _ => None,
        }
    }

    /// Advance on one polled frame.
    ///
    /// Records `gesture` as the current gesture in every phase, then applies
    /// at most one timed transition. Polling again before a phase expires
    /// changes nothing but the current gesture.
    pub fn tick(&mut self, now: Instant, gesture: Gesture) -> Option<Transition> {
        self.gesture = gesture;
        if !self.phase.is_expired(now) {
            return None;
        }
        let phase = self.phase;
        let transition = match phase {
            Phase::Waiting => return None,
            Phase::Countdown { .. } => self.throw(now),
            Phase::Playing { computer, .. } => self.score(now, computer),
            Phase::Result { .. } => self.reset(),
        };
        self.announce(transition);
        Some(transition)
    }

    fn throw(&mut self, now: Instant) -> Transition {
        let computer = self.opponent.choose();
        debug_assert!(computer.is_throw());
        self.phase = Phase::Playing {
            since: now,
            computer,
        };
        Transition::Thrown(computer)
    }

    fn score(&mut self, now: Instant, computer: Gesture) -> Transition {
        let player = self.gesture;
        let outcome = Outcome::from((player, computer));
        match outcome {
            Outcome::Win => self.player += 1,
            Outcome::Loss => self.computer += 1,
            Outcome::Tie | Outcome::Undetected => {}
        }
        self.rounds += 1;
        self.phase = Phase::Result {
            since: now,
            player,
            computer,
            outcome,
        };
        log::debug!("[session] {} vs {}", player, computer);
        Transition::Scored(outcome)
    }

    /// The round in progress, or the one just scored.
    pub fn round(&self) -> u32 {
        match self.phase {
            Phase::Countdown { .. } | Phase::Playing { .. } => self.rounds + 1,
            Phase::Waiting | Phase::Result { .. } => self.rounds,
        }
    }

    fn announce(&self, transition: Transition) {
        log::info!("[session] round {}: {} ({})", self.round(), transition, self);
    }

    fn reset(&mut self) -> Transition {
        self.phase = Phase::Waiting;
        Transition::Reset
    }
}

impl<O> std::fmt::Display for Session<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Player: {} | Computer: {}", self.player, self.computer)
    }
}
