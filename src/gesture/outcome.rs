use super::*;

/// The label shown for a finished round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Loss,
    Tie,
    /// No usable gesture at the end of the throw window. Scores stay put.
    Undetected,
}

impl Outcome {
    pub fn is_win(&self) -> bool {
        matches!(self, Self::Win)
    }
    /// Who gets the point, if anyone.
    pub fn winner(&self) -> Option<Winner> {
        match self {
            Self::Win => Some(Winner::Player),
            Self::Loss => Some(Winner::Computer),
            Self::Tie => Some(Winner::Tie),
            Self::Undetected => None,
        }
    }
}

impl From<Winner> for Outcome {
    fn from(winner: Winner) -> Self {
        match winner {
            Winner::Player => Self::Win,
            Winner::Computer => Self::Loss,
            Winner::Tie => Self::Tie,
        }
    }
}

impl From<(Gesture, Gesture)> for Outcome {
    fn from((player, computer): (Gesture, Gesture)) -> Self {
        match player {
            Gesture::None => Self::Undetected,
            player => Self::from(determine_winner(player, computer)),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "You Win!"),
            Self::Loss => write!(f, "Computer Wins!"),
            Self::Tie => write!(f, "It's a Tie!"),
            Self::Undetected => write!(f, "No gesture detected!"),
        }
    }
}
