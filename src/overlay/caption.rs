use super::*;

/// One line of text over a filled black box.
#[derive(Debug, Clone, PartialEq)]
pub struct Caption {
    pub text: String,
    pub anchor: Anchor,
    pub color: Color,
    pub scale: f64,
    pub thickness: i32,
}

impl Caption {
    pub fn new(text: impl Into<String>, anchor: Anchor) -> Self {
        Self {
            text: text.into(),
            anchor,
            color: Color::WHITE,
            scale: 1.,
            thickness: 2,
        }
    }
    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }
    pub fn thickness(mut self, thickness: i32) -> Self {
        self.thickness = thickness;
        self
    }
    /// Text origin (bottom left of the baseline) in a frame of `height`.
    pub fn origin(&self, height: i32) -> (i32, i32) {
        (crate::CAPTION_MARGIN, self.anchor.resolve(height))
    }
    /// Background rectangle `(x, y, width, height)` for text measuring
    /// `text_width` by `text_height`, padded on every side.
    pub fn backdrop(&self, height: i32, text_width: i32, text_height: i32) -> (i32, i32, i32, i32) {
        let (x, y) = self.origin(height);
        let pad = crate::CAPTION_PADDING;
        (
            x - pad,
            y - text_height - pad,
            text_width + 2 * pad,
            text_height + 2 * pad,
        )
    }
}

impl std::fmt::Display for Caption {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
