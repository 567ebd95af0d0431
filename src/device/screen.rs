use super::*;
use crate::hands::Hand;
use crate::overlay::Overlay;

/// Where frames end up, and where key presses come from.
pub trait Screen<F> {
    /// Draw the hand skeleton and the overlay onto `frame` and show it.
    fn present(&mut self, frame: &mut F, hand: Option<&Hand>, overlay: &Overlay) -> anyhow::Result<()>;
    /// The key pressed since the last poll, if any.
    fn poll(&mut self) -> anyhow::Result<Option<Key>>;
}
