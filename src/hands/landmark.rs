use crate::Coordinate;

/// One anatomical point in normalized frame space.
///
/// `x` grows to the right and `y` grows downward, both relative to the frame
/// size. `z` is depth relative to the wrist and is unused by classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    pub x: Coordinate,
    pub y: Coordinate,
    pub z: Coordinate,
}

impl Landmark {
    pub fn new(x: Coordinate, y: Coordinate, z: Coordinate) -> Self {
        Self { x, y, z }
    }
    /// Position in pixels for a frame of the given size.
    pub fn pixel(&self, width: i32, height: i32) -> (i32, i32) {
        (
            (self.x * width as Coordinate) as i32,
            (self.y * height as Coordinate) as i32,
        )
    }
}

impl From<(Coordinate, Coordinate)> for Landmark {
    fn from((x, y): (Coordinate, Coordinate)) -> Self {
        Self::new(x, y, 0.)
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "({:.3},{:.3},{:.3})", self.x, self.y, self.z)
    }
}
