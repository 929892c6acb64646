use crate::Probability;
use crate::cards::Hand;

/// Named branch points that consume a roll.
///
/// Each decision rolls at most once per branch point, so two branches of
/// the same decision never share a draw.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Roll {
    ThreeBet,
    Bluff,
    Steal,
    Value,
    ContinuationBet,
    SemiBluff,
    Stab,
    Raise,
    Mistake,
}

/// Reproducible coin flips for one decision.
///
/// Seeded from the cards, street, pot and actor, so replaying a snapshot
/// replays every branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dice(u64);

impl Dice {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }
    /// Uniform in [0, 1).
    pub fn roll(&self, roll: Roll) -> Probability {
        let bits = crate::scramble(self.0 ^ crate::scramble(roll as u64 + 1));
        (bits >> 40) as f32 / (1u64 << 24) as f32
    }
    pub fn chance(&self, roll: Roll, p: Probability) -> bool {
        self.roll(roll) < p
    }
}

/// Hash-seeded choice between two actions at a fixed ratio.
///
/// Depends only on which cards are out, so the same holding on the same
/// board always mixes the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mix(u64);

impl From<Hand> for Mix {
    fn from(cards: Hand) -> Self {
        Self(crate::scramble(u64::from(cards)) % 100)
    }
}

impl Mix {
    /// True for `pct` percent of holdings.
    pub fn take(&self, pct: u64) -> bool {
        self.0 < pct
    }
    pub fn bucket(&self) -> u64 {
        self.0
    }
}
