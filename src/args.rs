use crate::Confidence;
use crate::device::SidecarConfig;
use clap::Parser;
use std::path::PathBuf;

/// Play Rock-Paper-Scissors against the computer with your webcam.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Camera device index.
    #[arg(long, default_value_t = 0)]
    pub camera: i32,
    /// Python interpreter with mediapipe installed.
    #[arg(long, default_value = "python3")]
    pub python: PathBuf,
    /// Hand detector script.
    #[arg(long, default_value = crate::device::SCRIPT)]
    pub script: PathBuf,
    /// Minimum hand detection confidence.
    #[arg(long, default_value_t = crate::DETECTION_CONFIDENCE, value_parser = confidence)]
    pub detection_confidence: Confidence,
    /// Minimum landmark tracking confidence.
    #[arg(long, default_value_t = crate::TRACKING_CONFIDENCE, value_parser = confidence)]
    pub tracking_confidence: Confidence,
    /// Seed for the computer's throws. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Log at debug level.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn sidecar(&self) -> SidecarConfig {
        SidecarConfig {
            python: self.python.clone(),
            script: self.script.clone(),
            detection: self.detection_confidence,
            tracking: self.tracking_confidence,
            hands: crate::MAX_HANDS,
        }
    }
}

fn confidence(s: &str) -> Result<Confidence, String> {
    let value = s
        .parse::<Confidence>()
        .map_err(|_| String::from("Enter a number between 0 and 1"))?;
    match (0.0..=1.0).contains(&value) {
        true => Ok(value),
        false => Err(format!("{} is outside [0, 1]", value)),
    }
}
