use crate::NEUTRAL_EQUITY;
use crate::Probability;

/// Showdown outcomes from the hero's side.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub splits: u32,
    pub losses: u32,
}

impl Tally {
    pub fn win() -> Self {
        Self {
            wins: 1,
            ..Self::default()
        }
    }
    pub fn split() -> Self {
        Self {
            splits: 1,
            ..Self::default()
        }
    }
    pub fn loss() -> Self {
        Self {
            losses: 1,
            ..Self::default()
        }
    }
    pub fn n(&self) -> u32 {
        self.wins + self.splits + self.losses
    }
    /// Wins plus half of splits, over all showdowns.
    pub fn equity(&self) -> Probability {
        match self.n() {
            0 => NEUTRAL_EQUITY,
            n => (self.wins as f32 + self.splits as f32 / 2.0) / n as f32,
        }
    }
    /// The same showdowns from the other side.
    pub fn flip(&self) -> Self {
        Self {
            wins: self.losses,
            splits: self.splits,
            losses: self.wins,
        }
    }
}

impl From<std::cmp::Ordering> for Tally {
    fn from(ordering: std::cmp::Ordering) -> Self {
        match ordering {
            std::cmp::Ordering::Greater => Self::win(),
            std::cmp::Ordering::Equal => Self::split(),
            std::cmp::Ordering::Less => Self::loss(),
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            wins: self.wins + rhs.wins,
            splits: self.splits + rhs.splits,
            losses: self.losses + rhs.losses,
        }
    }
}

impl std::iter::Sum for Tally {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), std::ops::Add::add)
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "W{} S{} L{} ({:.3})",
            self.wins,
            self.splits,
            self.losses,
            self.equity()
        )
    }
}
