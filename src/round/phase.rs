use crate::gesture::*;
use std::time::Duration;
use std::time::Instant;

/// Exactly one phase is active at a time. Each timed phase carries the
/// instant it was entered; the computer's throw only exists once Playing
/// has begun.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Waiting,
    Countdown {
        since: Instant,
    },
    Playing {
        since: Instant,
        computer: Gesture,
    },
    Result {
        since: Instant,
        player: Gesture,
        computer: Gesture,
        outcome: Outcome,
    },
}

impl Phase {
    /// When the phase was entered. Waiting has no clock.
    pub fn since(&self) -> Option<Instant> {
        match self {
            Self::Waiting => None,
            Self::Countdown { since }
            | Self::Playing { since, .. }
            | Self::Result { since, .. } => Some(*since),
        }
    }
    /// How long the phase lasts before it moves on by itself.
    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Waiting => None,
            Self::Countdown { .. } => Some(crate::COUNTDOWN),
            Self::Playing { .. } => Some(crate::PLAYING),
            Self::Result { .. } => Some(crate::RESULT),
        }
    }
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.since().map(|since| now.saturating_duration_since(since))
    }
    /// Time left before the timed exit, saturating at zero.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.elapsed(now)
            .zip(self.duration())
            .map(|(elapsed, duration)| duration.saturating_sub(elapsed))
    }
    /// True once a timed phase has run its course.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_some_and(|r| r.is_zero())
    }
    pub fn computer(&self) -> Option<Gesture> {
        match self {
            Self::Playing { computer, .. } | Self::Result { computer, .. } => Some(*computer),
            _ => None,
        }
    }
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            Self::Result { outcome, .. } => Some(*outcome),
            _ => None,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "waiting",
            Self::Countdown { .. } => "countdown",
            Self::Playing { .. } => "playing",
            Self::Result { .. } => "result",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
