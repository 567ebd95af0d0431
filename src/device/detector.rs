use crate::hands::Hand;

/// Finds at most one hand in a frame.
pub trait Detector<F> {
    fn detect(&mut self, frame: &F) -> anyhow::Result<Option<Hand>>;
}
