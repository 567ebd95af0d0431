use super::*;

/// The set of extended fingers, one bit per [`Finger`].
///
/// Bit `i` is set when finger `i` (0 = thumb .. 4 = pinky) is extended.
/// Only the low 5 bits are ever used, so all 32 hand shapes fit in a byte.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Fingers(u8);

impl Fingers {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, finger: Finger) -> bool {
        self.0 & Self::bit(finger) != 0
    }
    pub fn insert(&mut self, finger: Finger) {
        self.0 |= Self::bit(finger);
    }
    /// True when exactly these fingers, and no others, are extended.
    pub fn is(&self, fingers: &[Finger]) -> bool {
        *self == Self::from(fingers)
    }
    /// Every possible extension set.
    pub fn exhaust() -> impl Iterator<Item = Self> {
        (0..Self::mask() + 1).map(Self)
    }

    const fn bit(finger: Finger) -> u8 {
        1 << finger as u8
    }
    const fn mask() -> u8 {
        0b11111
    }
}

/// Extension test on canonical, mirrored camera input.
///
/// The thumb bends sideways, so it counts as extended when its tip sits to
/// the right of its joint. The other four count when the tip is above the
/// joint (smaller `y`). This does not distinguish left from right hands.
impl From<&Hand> for Fingers {
    fn from(hand: &Hand) -> Self {
        let mut fingers = Self::empty();
        for finger in Finger::all() {
            let tip = hand.tip(finger);
            let pip = hand.pip(finger);
            let extended = match finger {
                Finger::Thumb => tip.x > pip.x,
                _ => tip.y < pip.y,
            };
            if extended {
                fingers.insert(finger);
            }
        }
        fingers
    }
}

impl From<&[Finger]> for Fingers {
    fn from(fingers: &[Finger]) -> Self {
        let mut set = Self::empty();
        for finger in fingers {
            set.insert(*finger);
        }
        set
    }
}

impl From<u8> for Fingers {
    fn from(bits: u8) -> Self {
        Self(bits & Self::mask())
    }
}

impl From<Fingers> for u8 {
    fn from(fingers: Fingers) -> Self {
        fingers.0
    }
}

/// drain from thumb to pinky
impl Iterator for Fingers {
    type Item = Finger;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let finger = Finger::from(self.0.trailing_zeros() as u8);
            self.0 &= !Self::bit(finger);
            Some(finger)
        }
    }
}

impl std::fmt::Display for Fingers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = (*self).map(|finger| finger.to_string()).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(","))
    }
}
