/// Raw, tightly packed 8-bit image data.
pub trait Pixels {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn channels(&self) -> u32;
    fn bytes(&self) -> anyhow::Result<&[u8]>;
}
