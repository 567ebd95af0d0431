use super::*;
use crate::Confidence;
use crate::hands::*;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Line the detector prints once its model is loaded.
pub const READY: &str = "READY";

/// Framed request / reply exchange with a hand detector process.
///
/// Request: width, height, channels as little-endian `u32`, then the raw
/// pixel bytes. Reply: one line of JSON, see [`Reply`].
pub struct Link<W, R> {
    tx: W,
    rx: R,
}

impl<W, R> Link<W, R>
where
    W: Write,
    R: BufRead,
{
    pub fn new(tx: W, rx: R) -> Self {
        Self { tx, rx }
    }

    /// Block until the detector announces it is ready.
    pub fn handshake(&mut self) -> anyhow::Result<()> {
        let line = self.line().context("reading detector handshake")?;
        match line.trim() == READY {
            true => Ok(()),
            false => Err(anyhow::anyhow!("detector did not signal ready, got {:?}", line.trim())),
        }
    }

    pub fn exchange<P>(&mut self, frame: &P) -> anyhow::Result<Option<Hand>>
    where
        P: Pixels,
    {
        let bytes = frame.bytes()?;
        if bytes.is_empty() {
            return Ok(None);
        }
        self.tx.write_all(&header(frame))?;
        self.tx.write_all(bytes)?;
        self.tx.flush()?;
        let line = self.line().context("reading detector reply")?;
        let reply = serde_json::from_str::<Reply>(&line)
            .with_context(|| format!("parsing detector reply {:?}", line.trim()))?;
        Ok(reply.select())
    }

    fn line(&mut self) -> anyhow::Result<String> {
        let mut line = String::new();
        match self.rx.read_line(&mut line)? {
            0 => Err(anyhow::anyhow!("detector closed its output")),
            _ => Ok(line),
        }
    }
}

pub fn header<P>(frame: &P) -> [u8; 12]
where
    P: Pixels,
{
    let mut header = [0u8; 12];
    header[0..4].copy_from_slice(&frame.width().to_le_bytes());
    header[4..8].copy_from_slice(&frame.height().to_le_bytes());
    header[8..12].copy_from_slice(&frame.channels().to_le_bytes());
    header
}

/// One detected hand as sent by the detector.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Detection {
    #[serde(default)]
    pub handedness: String,
    /// Handedness classification score, not the detection confidence.
    pub score: Confidence,
    pub landmarks: Vec<Landmark>,
}

/// A full detector reply.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub hands: Vec<Detection>,
    #[serde(default)]
    pub error: Option<String>,
}

impl Reply {
    /// The first hand with a full landmark set. Confidence gating already
    /// happened inside the detector; `score` is only logged.
    pub fn select(self) -> Option<Hand> {
        if let Some(error) = self.error {
            log::warn!("[detector] {}", error);
            return None;
        }
        for detection in self.hands {
            match Hand::try_from(detection.landmarks.as_slice()) {
                Ok(hand) => {
                    log::debug!(
                        "[detector] {} hand at {:.2}: {}",
                        detection.handedness,
                        detection.score,
                        hand
                    );
                    return Some(hand);
                }
                Err(e) => log::warn!("[detector] {}", e),
            }
        }
        None
    }
}
