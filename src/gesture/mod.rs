//! From landmarks to throws, and from throws to a round result.
mod gesture;
mod outcome;
mod winner;

pub use gesture::*;
pub use outcome::*;
pub use winner::*;
