use crate::gesture::*;

/// A phase change reported by [`super::Session::tick`] or
/// [`super::Session::start`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Waiting to Countdown.
    Started,
    /// Countdown to Playing, with the computer's throw.
    Thrown(Gesture),
    /// Playing to Result.
    Scored(Outcome),
    /// Result back to Waiting.
    Reset,
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Started => write!(f, "countdown started"),
            Self::Thrown(computer) => write!(f, "computer throws {}", computer),
            Self::Scored(outcome) => write!(f, "{}", outcome),
            Self::Reset => write!(f, "back to waiting"),
        }
    }
}
