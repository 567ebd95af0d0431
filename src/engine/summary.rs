use crate::Score;

/// Final tally when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub player: Score,
    pub computer: Score,
    pub rounds: u32,
    pub frames: u64,
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Player: {} | Computer: {} after {} rounds ({} frames)",
            self.player, self.computer, self.rounds, self.frames
        )
    }
}
