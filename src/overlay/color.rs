/// A color in the blue, green, red channel order the camera frames use.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Color {
    pub b: u8,
    pub g: u8,
    pub r: u8,
}

impl Color {
    pub const WHITE: Self = Self::bgr(255, 255, 255);
    pub const BLACK: Self = Self::bgr(0, 0, 0);
    pub const GREEN: Self = Self::bgr(0, 255, 0);
    pub const RED: Self = Self::bgr(0, 0, 255);
    pub const BLUE: Self = Self::bgr(255, 0, 0);
    pub const YELLOW: Self = Self::bgr(0, 255, 255);
    pub const CYAN: Self = Self::bgr(255, 255, 0);
    pub const GREY: Self = Self::bgr(200, 200, 200);

    pub const fn bgr(b: u8, g: u8, r: u8) -> Self {
        Self { b, g, r }
    }
}

impl From<Color> for [f64; 4] {
    fn from(color: Color) -> Self {
        [color.b as f64, color.g as f64, color.r as f64, 0.]
    }
}
