use super::*;
use crate::hands::*;
use crate::overlay::*;
use opencv::core::Mat;
use opencv::core::Point;
use opencv::core::Rect;
use opencv::core::Scalar;
use opencv::highgui;
use opencv::imgproc;
use opencv::prelude::*;

const FONT: i32 = imgproc::FONT_HERSHEY_SIMPLEX;
const BONE: Color = Color::bgr(255, 255, 255);
const JOINT: Color = Color::bgr(0, 0, 255);

/// An OpenCV highgui window. Destroyed on drop.
pub struct Window {
    title: String,
}

impl Window {
    pub fn open(title: &str) -> anyhow::Result<Self> {
        highgui::named_window(title, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self {
            title: title.to_string(),
        })
    }

    fn skeleton(frame: &mut Mat, hand: &Hand) -> anyhow::Result<()> {
        let (w, h) = (frame.cols(), frame.rows());
        let point = |i: usize| {
            let (x, y) = hand.landmarks()[i].pixel(w, h);
            Point::new(x, y)
        };
        for (a, b) in CONNECTIONS {
            imgproc::line(frame, point(a), point(b), scalar(BONE), 2, imgproc::LINE_AA, 0)?;
        }
        for i in 0..crate::N_LANDMARKS {
            imgproc::circle(frame, point(i), 4, scalar(JOINT), -1, imgproc::LINE_AA, 0)?;
        }
        Ok(())
    }

    fn caption(frame: &mut Mat, caption: &Caption) -> anyhow::Result<()> {
        let mut baseline = 0;
        let size = imgproc::get_text_size(
            &caption.text,
            FONT,
            caption.scale,
            caption.thickness,
            &mut baseline,
        )?;
        let (x, y, w, h) = caption.backdrop(frame.rows(), size.width, size.height);
        imgproc::rectangle(
            frame,
            Rect::new(x, y, w, h),
            scalar(Color::BLACK),
            -1,
            imgproc::LINE_8,
            0,
        )?;
        let (x, y) = caption.origin(frame.rows());
        imgproc::put_text(
            frame,
            &caption.text,
            Point::new(x, y),
            FONT,
            caption.scale,
            scalar(caption.color),
            caption.thickness,
            imgproc::LINE_8,
            false,
        )?;
        Ok(())
    }
}

fn scalar(color: Color) -> Scalar {
    let [b, g, r, a] = <[f64; 4]>::from(color);
    Scalar::new(b, g, r, a)
}

impl Screen<Mat> for Window {
    fn present(&mut self, frame: &mut Mat, hand: Option<&Hand>, overlay: &Overlay) -> anyhow::Result<()> {
        if let Some(hand) = hand {
            Self::skeleton(frame, hand)?;
        }
        for caption in overlay.captions() {
            Self::caption(frame, caption)?;
        }
        highgui::imshow(&self.title, &*frame)?;
        Ok(())
    }
    fn poll(&mut self) -> anyhow::Result<Option<Key>> {
        Ok(Key::parse(highgui::wait_key(1)?))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        let _ = highgui::destroy_all_windows();
    }
}
