//! Seams to the outside world: camera, hand detector, and window.
//!
//! The game only sees the traits in this module. The MediaPipe detector
//! runs as a subprocess; camera and window are OpenCV backed and only
//! built with the `camera` feature.
mod camera;
mod detector;
mod key;
mod link;
mod pixels;
mod screen;
mod sidecar;
#[cfg(feature = "camera")]
mod webcam;
#[cfg(feature = "camera")]
mod window;

pub use camera::*;
pub use detector::*;
pub use key::*;
pub use link::*;
pub use pixels::*;
pub use screen::*;
pub use sidecar::*;
#[cfg(feature = "camera")]
pub use webcam::*;
#[cfg(feature = "camera")]
pub use window::*;
