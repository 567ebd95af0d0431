/// A live video source, read one frame at a time.
pub trait Camera {
    type Frame;
    /// Block until the next frame arrives. `None` once the stream has closed.
    fn capture(&mut self) -> anyhow::Result<Option<Self::Frame>>;
}
