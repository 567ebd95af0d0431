//! The per-frame polling loop.
mod clock;
mod engine;
mod summary;

pub use clock::*;
pub use engine::*;
pub use summary::*;
