use super::*;
use crate::N_LANDMARKS;

/// The 21 landmarks of one detected hand.
///
/// Produced fresh by the detector every frame and dropped right after
/// classification and drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hand([Landmark; N_LANDMARKS]);

impl Hand {
    pub fn landmarks(&self) -> &[Landmark; N_LANDMARKS] {
        &self.0
    }
    pub fn wrist(&self) -> Landmark {
        self.0[0]
    }
    pub fn tip(&self, finger: Finger) -> Landmark {
        self.0[finger.tip()]
    }
    pub fn pip(&self, finger: Finger) -> Landmark {
        self.0[finger.pip()]
    }
    pub fn extended(&self) -> Fingers {
        Fingers::from(self)
    }

    /// A synthetic upright hand with exactly `fingers` extended.
    ///
    /// Joints sit on a line at mid height, one column per finger. Extended
    /// tips are lifted above their joint, curled tips hang below it, and the
    /// thumb tip is pushed right or left instead.
    pub fn posed(fingers: Fingers) -> Self {
        let mut landmarks = [Landmark::from((0.5, 0.9)); N_LANDMARKS];
        for finger in Finger::all() {
            let column = 0.3 + 0.1 * finger as u8 as crate::Coordinate;
            let extended = fingers.contains(finger);
            let (pip, tip) = match (finger, extended) {
                (Finger::Thumb, true) => ((column, 0.6), (column + 0.05, 0.6)),
                (Finger::Thumb, false) => ((column, 0.6), (column - 0.05, 0.6)),
                (_, true) => ((column, 0.5), (column, 0.3)),
                (_, false) => ((column, 0.5), (column, 0.6)),
            };
            landmarks[finger.pip()] = Landmark::from(pip);
            landmarks[finger.tip()] = Landmark::from(tip);
        }
        Self(landmarks)
    }
}

impl From<[Landmark; N_LANDMARKS]> for Hand {
    fn from(landmarks: [Landmark; N_LANDMARKS]) -> Self {
        Self(landmarks)
    }
}

impl TryFrom<&[Landmark]> for Hand {
    type Error = anyhow::Error;
    fn try_from(landmarks: &[Landmark]) -> Result<Self, Self::Error> {
        let landmarks = <[Landmark; N_LANDMARKS]>::try_from(landmarks).map_err(|_| {
            anyhow::anyhow!(
                "expected {} landmarks, got {}",
                N_LANDMARKS,
                landmarks.len()
            )
        })?;
        Ok(Self(landmarks))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "wrist {} index {} extended {}",
            self.wrist(),
            self.tip(Finger::Index),
            self.extended()
        )
    }
}
