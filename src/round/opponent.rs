use crate::gesture::Gesture;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Source of the computer's throw, asked once per round.
pub trait Opponent {
    /// Must return one of [`Gesture::THROWS`].
    fn choose(&mut self) -> Gesture;
}

/// Uniform over Rock, Paper, Scissors.
#[derive(Debug, Clone)]
pub struct Random(SmallRng);

impl Random {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for Random {
    fn default() -> Self {
        Self(SmallRng::from_os_rng())
    }
}

impl From<Option<u64>> for Random {
    fn from(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::default(),
        }
    }
}

impl Opponent for Random {
    fn choose(&mut self) -> Gesture {
        *Gesture::THROWS
            .choose(&mut self.0)
            .expect("non empty throws")
    }
}

/// Always throws the same shape.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(Gesture);

impl Fixed {
    pub fn new(gesture: Gesture) -> anyhow::Result<Self> {
        match gesture.is_throw() {
            true => Ok(Self(gesture)),
            false => Err(anyhow::anyhow!("computer cannot throw {}", gesture)),
        }
    }
}

impl Opponent for Fixed {
    fn choose(&mut self) -> Gesture {
        self.0
    }
}
