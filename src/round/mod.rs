//! The timed round cycle: Waiting, Countdown, Playing, Result, and back.
mod opponent;
mod phase;
mod session;
mod transition;

pub use opponent::*;
pub use phase::*;
pub use session::*;
pub use transition::*;
