use crate::Chips;
use crate::MONSTER_CATEGORY;
use crate::Probability;
use crate::STRONG_CATEGORY;
use crate::WET_BOARD;

/// Discrete bet sizes as fractions of the pot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sizing {
    Third,
    Half,
    TwoThirds,
    Pot,
    AllIn,
}

impl Sizing {
    pub const LADDER: [Self; 5] = [Self::Third, Self::Half, Self::TwoThirds, Self::Pot, Self::AllIn];

    /// Bigger with stronger hands and wetter boards. Out of position,
    /// marginal hands size up a notch on wet boards to deny equity.
    pub fn choose(category: u8, wetness: Probability, in_position: bool, spr: f32) -> Self {
        let wet = wetness >= WET_BOARD;
        match category {
            c if c >= MONSTER_CATEGORY && spr <= 1.0 => Self::AllIn,
            c if c >= MONSTER_CATEGORY && wet => Self::Pot,
            c if c >= MONSTER_CATEGORY => Self::TwoThirds,
            c if c >= STRONG_CATEGORY && wet => Self::TwoThirds,
            c if c >= STRONG_CATEGORY => Self::Half,
            _ if wet && !in_position => Self::Half,
            _ => Self::Third,
        }
    }
    /// Chips for this size into `pot`, capped at `stack`.
    pub fn chips(&self, pot: Chips, stack: Chips) -> Chips {
        let (num, den) = match self {
            Self::Third => (1, 3),
            Self::Half => (1, 2),
            Self::TwoThirds => (2, 3),
            Self::Pot => (1, 1),
            Self::AllIn => return stack,
        };
        (pot * num / den).min(stack)
    }
}

impl std::fmt::Display for Sizing {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Third => write!(f, "1/3 pot"),
            Self::Half => write!(f, "1/2 pot"),
            Self::TwoThirds => write!(f, "2/3 pot"),
            Self::Pot => write!(f, "pot"),
            Self::AllIn => write!(f, "all-in"),
        }
    }
}
