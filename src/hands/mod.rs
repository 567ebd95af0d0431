//! Hand landmarks as reported by the external detector.
//!
//! Indexing follows the MediaPipe hand model: 0 is the wrist, then four
//! landmarks per finger from the knuckle out to the tip.
mod finger;
mod fingers;
mod hand;
mod landmark;
mod skeleton;

pub use finger::*;
pub use fingers::*;
pub use hand::*;
pub use landmark::*;
pub use skeleton::*;
