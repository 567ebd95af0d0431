use super::*;
use anyhow::Context;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio;

/// A camera device through OpenCV. Frames are mirrored horizontally so the
/// player sees themselves as in a mirror. Released on drop.
pub struct Webcam {
    capture: videoio::VideoCapture,
    index: i32,
}

impl Webcam {
    pub fn open(index: i32) -> anyhow::Result<Self> {
        let capture = videoio::VideoCapture::new(index, videoio::CAP_ANY)
            .with_context(|| format!("opening camera {}", index))?;
        if !capture.is_opened()? {
            anyhow::bail!("camera {} is not available", index);
        }
        log::info!("[camera] opened device {}", index);
        Ok(Self { capture, index })
    }
}

impl Camera for Webcam {
    type Frame = Mat;
    fn capture(&mut self) -> anyhow::Result<Option<Mat>> {
        let mut raw = Mat::default();
        if !self.capture.read(&mut raw)? || raw.empty() {
            log::info!("[camera] stream from device {} ended", self.index);
            return Ok(None);
        }
        let mut mirrored = Mat::default();
        opencv::core::flip(&raw, &mut mirrored, 1)?;
        Ok(Some(mirrored))
    }
}

impl Pixels for Mat {
    fn width(&self) -> u32 {
        self.cols() as u32
    }
    fn height(&self) -> u32 {
        self.rows() as u32
    }
    fn channels(&self) -> u32 {
        MatTraitConst::channels(self) as u32
    }
    fn bytes(&self) -> anyhow::Result<&[u8]> {
        Ok(self.data_bytes()?)
    }
}

impl Drop for Webcam {
    fn drop(&mut self) {
        let _ = self.capture.release();
        log::debug!("[camera] released device {}", self.index);
    }
}
