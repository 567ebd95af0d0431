/// Vertical placement of a caption's text baseline.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Anchor {
    /// Pixels below the top edge.
    Top(i32),
    /// Pixels above the bottom edge.
    Bottom(i32),
}

impl Anchor {
    /// Baseline y for a frame of `height` pixels.
    pub fn resolve(&self, height: i32) -> i32 {
        match self {
            Self::Top(y) => *y,
            Self::Bottom(offset) => height - offset,
        }
    }
}
