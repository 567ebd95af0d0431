use crate::Arbitrary;
use crate::hands::*;

/// The classified hand shape.
///
/// `None` is a regular value, not an error: no hand in view, or a hand
/// shape that matches none of the three throws.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Gesture {
    Rock,
    Paper,
    Scissors,
    #[default]
    None,
}

impl Gesture {
    /// The three shapes a computer may throw.
    pub const THROWS: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    pub fn is_throw(&self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify a detected hand. Pure and deterministic.
pub fn classify(hand: &Hand) -> Gesture {
    Gesture::from(hand.extended())
}

impl From<&Hand> for Gesture {
    fn from(hand: &Hand) -> Self {
        classify(hand)
    }
}

/// Rules are checked in order; the first match wins.
///
/// - nothing, or only the thumb: Rock
/// - four or five fingers: Paper (four tolerates one finger the detector
///   reads as curled)
/// - exactly index and middle: Scissors
/// - anything else: None
impl From<Fingers> for Gesture {
    fn from(fingers: Fingers) -> Self {
        match fingers.size() {
            0 => Self::Rock,
            1 if fingers.contains(Finger::Thumb) => Self::Rock,
            4 | 5 => Self::Paper,
            2 if fingers.is(&[Finger::Index, Finger::Middle]) => Self::Scissors,
            _ => Self::None,
        }
    }
}

impl Arbitrary for Gesture {
    fn random() -> Self {
        use rand::seq::IndexedRandom;
        let ref mut rng = rand::rng();
        *Self::THROWS.choose(rng).expect("three throws")
    }
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
            Self::None => write!(f, "None"),
        }
    }
}

impl TryFrom<&str> for Gesture {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "rock" | "r" => Ok(Self::Rock),
            "paper" | "p" => Ok(Self::Paper),
            "scissors" | "s" => Ok(Self::Scissors),
            "none" => Ok(Self::None),
            _ => Err(anyhow::anyhow!("invalid gesture string")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn of(fingers: &[Finger]) -> Gesture {
        classify(&Hand::posed(Fingers::from(fingers)))
    }

    #[test]
    fn fist_is_rock() {
        assert_eq!(of(&[]), Gesture::Rock);
    }

    #[test]
    fn thumb_only_is_rock() {
        assert_eq!(of(&[Finger::Thumb]), Gesture::Rock);
    }

    #[test]
    fn open_palm_is_paper() {
        assert_eq!(of(&Finger::all()), Gesture::Paper);
    }

    #[test]
    fn any_four_is_paper() {
        for missing in Finger::all() {
            let four = Finger::all()
                .into_iter()
                .filter(|f| *f != missing)
                .collect::<Vec<_>>();
            assert_eq!(of(&four), Gesture::Paper, "missing {}", missing);
        }
    }

    #[test]
    fn peace_sign_is_scissors() {
        assert_eq!(of(&[Finger::Index, Finger::Middle]), Gesture::Scissors);
    }

    #[test]
    fn thumb_and_index_is_none() {
        assert_eq!(of(&[Finger::Thumb, Finger::Index]), Gesture::None);
    }

    #[test]
    fn single_non_thumb_is_none() {
        assert_eq!(of(&[Finger::Index]), Gesture::None);
        assert_eq!(of(&[Finger::Pinky]), Gesture::None);
    }

    #[test]
    fn three_fingers_is_none() {
        assert_eq!(
            of(&[Finger::Index, Finger::Middle, Finger::Ring]),
            Gesture::None
        );
    }

    #[test]
    fn decision_table_is_exhaustive() {
        for fingers in Fingers::exhaust() {
            let expected = match (fingers.size(), u8::from(fingers)) {
                (0, _) => Gesture::Rock,
                (1, 0b00001) => Gesture::Rock,
                (4 | 5, _) => Gesture::Paper,
                (2, 0b00110) => Gesture::Scissors,
                _ => Gesture::None,
            };
            assert_eq!(Gesture::from(fingers), expected, "{}", fingers);
        }
    }

    #[test]
    fn random_is_a_throw() {
        for _ in 0..64 {
            assert!(Gesture::random().is_throw());
        }
    }

    #[test]
    fn parses_labels() {
        assert_eq!(Gesture::try_from("Scissors").unwrap(), Gesture::Scissors);
        assert_eq!(Gesture::try_from("r").unwrap(), Gesture::Rock);
        assert!(Gesture::try_from("lizard").is_err());
    }
}
