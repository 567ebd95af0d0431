use super::*;

/// Who takes the round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Winner {
    Player,
    Computer,
    Tie,
}

/// Rock beats Scissors, Scissors beats Paper, Paper beats Rock.
/// Equal gestures tie; every other pairing goes to the computer.
pub fn determine_winner(player: Gesture, computer: Gesture) -> Winner {
    match (player, computer) {
        (p, c) if p == c => Winner::Tie,
        (Gesture::Rock, Gesture::Scissors) => Winner::Player,
        (Gesture::Scissors, Gesture::Paper) => Winner::Player,
        (Gesture::Paper, Gesture::Rock) => Winner::Player,
        _ => Winner::Computer,
    }
}

impl std::fmt::Display for Winner {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Player => write!(f, "Player"),
            Self::Computer => write!(f, "Computer"),
            Self::Tie => write!(f, "Tie"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_gestures_tie() {
        for gesture in [
            Gesture::Rock,
            Gesture::Paper,
            Gesture::Scissors,
            Gesture::None,
        ] {
            assert_eq!(determine_winner(gesture, gesture), Winner::Tie);
        }
    }

    #[test]
    fn rock_beats_scissors() {
        assert_eq!(determine_winner(Gesture::Rock, Gesture::Scissors), Winner::Player);
        assert_eq!(determine_winner(Gesture::Scissors, Gesture::Rock), Winner::Computer);
    }

    #[test]
    fn scissors_beats_paper() {
        assert_eq!(determine_winner(Gesture::Scissors, Gesture::Paper), Winner::Player);
        assert_eq!(determine_winner(Gesture::Paper, Gesture::Scissors), Winner::Computer);
    }

    #[test]
    fn paper_beats_rock() {
        assert_eq!(determine_winner(Gesture::Paper, Gesture::Rock), Winner::Player);
        assert_eq!(determine_winner(Gesture::Rock, Gesture::Paper), Winner::Computer);
    }

    #[test]
    fn dominance_is_antisymmetric() {
        for a in Gesture::THROWS {
            for b in Gesture::THROWS {
                let forward = determine_winner(a, b);
                let reverse = determine_winner(b, a);
                match forward {
                    Winner::Tie => assert_eq!(reverse, Winner::Tie),
                    Winner::Player => assert_eq!(reverse, Winner::Computer),
                    Winner::Computer => assert_eq!(reverse, Winner::Player),
                }
            }
        }
    }
}
