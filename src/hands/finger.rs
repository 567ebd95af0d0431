/// The five digits, in landmark order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Finger {
    Thumb = 0,
    Index = 1,
    Middle = 2,
    Ring = 3,
    Pinky = 4,
}

impl Finger {
    pub const fn all() -> [Self; 5] {
        [
            Self::Thumb,
            Self::Index,
            Self::Middle,
            Self::Ring,
            Self::Pinky,
        ]
    }
    /// Landmark index of the fingertip.
    pub const fn tip(&self) -> usize {
        4 * (*self as usize) + 4
    }
    /// Landmark index of the joint right below the tip we compare against.
    /// For the thumb that is the interphalangeal joint, for the others the
    /// proximal interphalangeal joint.
    pub const fn pip(&self) -> usize {
        match self {
            Self::Thumb => 3,
            finger => 4 * (*finger as usize) + 2,
        }
    }
}

impl From<u8> for Finger {
    fn from(n: u8) -> Self {
        match n {
            0 => Self::Thumb,
            1 => Self::Index,
            2 => Self::Middle,
            3 => Self::Ring,
            4 => Self::Pinky,
            _ => panic!("no finger at index {}", n),
        }
    }
}

impl From<Finger> for u8 {
    fn from(finger: Finger) -> Self {
        finger as u8
    }
}

impl std::fmt::Display for Finger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Thumb => write!(f, "thumb"),
            Self::Index => write!(f, "index"),
            Self::Middle => write!(f, "middle"),
            Self::Ring => write!(f, "ring"),
            Self::Pinky => write!(f, "pinky"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips() {
        let tips = Finger::all().map(|f| f.tip());
        assert_eq!(tips, [4, 8, 12, 16, 20]);
    }

    #[test]
    fn pips() {
        let pips = Finger::all().map(|f| f.pip());
        assert_eq!(pips, [3, 6, 10, 14, 18]);
    }

    #[test]
    fn bijective_u8() {
        for finger in Finger::all() {
            assert!(finger == Finger::from(u8::from(finger)));
        }
    }
}
