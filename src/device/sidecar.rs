use super::*;
use crate::Confidence;
use crate::hands::Hand;
use anyhow::Context;
use std::io::BufReader;
use std::path::PathBuf;
use std::process::Child;
use std::process::ChildStdin;
use std::process::ChildStdout;
use std::process::Command;
use std::process::Stdio;

/// The bundled detector script, independent of the working directory.
pub const SCRIPT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/scripts/hand_detect.py");

/// How to launch the MediaPipe hand detector.
#[derive(Debug, Clone)]
pub struct SidecarConfig {
    pub python: PathBuf,
    pub script: PathBuf,
    pub detection: Confidence,
    pub tracking: Confidence,
    pub hands: usize,
}

impl Default for SidecarConfig {
    fn default() -> Self {
        Self {
            python: PathBuf::from("python3"),
            script: PathBuf::from(SCRIPT),
            detection: crate::DETECTION_CONFIDENCE,
            tracking: crate::TRACKING_CONFIDENCE,
            hands: crate::MAX_HANDS,
        }
    }
}

/// MediaPipe Hands running in a Python subprocess. Killed on drop.
pub struct Sidecar {
    child: Child,
    link: Link<ChildStdin, BufReader<ChildStdout>>,
}

impl Sidecar {
    pub fn spawn(config: &SidecarConfig) -> anyhow::Result<Self> {
        if !config.script.exists() {
            anyhow::bail!("hand detector script not found at {}", config.script.display());
        }
        log::info!("[detector] starting {}", config.script.display());
        let mut child = Command::new(&config.python)
            .arg(&config.script)
            .arg("--detection")
            .arg(config.detection.to_string())
            .arg("--tracking")
            .arg(config.tracking.to_string())
            .arg("--hands")
            .arg(config.hands.to_string())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .with_context(|| format!("launching {}", config.python.display()))?;
        let tx = child.stdin.take().context("detector stdin")?;
        let rx = child.stdout.take().context("detector stdout")?;
        let mut sidecar = Self {
            child,
            link: Link::new(tx, BufReader::new(rx)),
        };
        sidecar.link.handshake()?;
        log::info!("[detector] ready");
        Ok(sidecar)
    }
}

impl<F> Detector<F> for Sidecar
where
    F: Pixels,
{
    fn detect(&mut self, frame: &F) -> anyhow::Result<Option<Hand>> {
        self.link.exchange(frame)
    }
}

impl Drop for Sidecar {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
        log::debug!("[detector] stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_script_is_bundled() {
        let config = SidecarConfig::default();
        assert!(config.script.is_absolute());
        assert!(config.script.exists());
    }

    #[test]
    fn missing_script_fails_before_launch() {
        let config = SidecarConfig {
            script: PathBuf::from("/nonexistent/hand_detect.py"),
            ..SidecarConfig::default()
        };
        assert!(Sidecar::spawn(&config).is_err());
    }
}
