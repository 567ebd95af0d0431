//! What to draw on top of the camera frame, independent of any display.
mod anchor;
mod caption;
mod color;
mod overlay;

pub use anchor::*;
pub use caption::*;
pub use color::*;
pub use overlay::*;
