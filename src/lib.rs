//! Webcam Rock-Paper-Scissors.
//!
//! A hand landmark detector hands us 21 points per frame, [`gesture`] turns
//! them into a throw, and [`round`] runs the timed countdown / play / result
//! cycle against a random opponent. [`engine`] glues both to the devices.
#![allow(dead_code)]

#[cfg(feature = "cli")]
pub mod args;
pub mod device;
pub mod engine;
pub mod gesture;
pub mod hands;
pub mod overlay;
pub mod round;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rounds won by either side.
pub type Score = u32;
/// Normalized frame coordinate, nominally in [0, 1].
pub type Coordinate = f32;
/// Detector confidence, in [0, 1].
pub type Confidence = f32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and opponent sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ROUND TIMING
// ============================================================================
/// Time between pressing start and the throw window opening.
pub const COUNTDOWN: std::time::Duration = std::time::Duration::from_secs(3);
/// Length of the throw window.
pub const PLAYING: std::time::Duration = std::time::Duration::from_secs(2);
/// How long the result stays on screen before returning to the prompt.
pub const RESULT: std::time::Duration = std::time::Duration::from_secs(3);

// ============================================================================
// HAND DETECTION
// ============================================================================
/// Landmarks per detected hand.
pub const N_LANDMARKS: usize = 21;
/// At most one tracked hand.
pub const MAX_HANDS: usize = 1;
/// Minimum palm detection score for a hand to be reported.
pub const DETECTION_CONFIDENCE: Confidence = 0.7;
/// Minimum landmark tracking score before the detector re-runs palm detection.
pub const TRACKING_CONFIDENCE: Confidence = 0.5;

// ============================================================================
// DISPLAY
// ============================================================================
/// Title of the game window.
pub const WINDOW_TITLE: &str = "Rock Paper Scissors";
/// Left margin of every caption, in pixels.
pub const CAPTION_MARGIN: i32 = 50;
/// Padding of the black box behind each caption, in pixels.
pub const CAPTION_PADDING: i32 = 10;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. Debug level when `verbose`, Info otherwise.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    let _ = simplelog::CombinedLogger::init(vec![term]);
}
