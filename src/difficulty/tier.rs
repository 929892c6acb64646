use super::features::Features;
use crate::Probability;

/// Difficulty tier of a computer player.
///
/// Higher tiers simulate more rollouts, switch on more subsystems and make
/// fewer deliberate mistakes. Experts stop tilting.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Easy,
    #[default]
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const fn all() -> [Self; 5] {
        [
            Self::Beginner,
            Self::Easy,
            Self::Medium,
            Self::Hard,
            Self::Expert,
        ]
    }
    /// Monte Carlo rollouts per equity query.
    pub const fn iterations(&self) -> usize {
        match self {
            Self::Beginner => 200,
            Self::Easy => 500,
            Self::Medium => 1000,
            Self::Hard => 2000,
            Self::Expert => 5000,
        }
    }
    /// Chance that a decision is swapped for a systematic mistake.
    pub const fn mistake_rate(&self) -> Probability {
        match self {
            Self::Beginner => 0.15,
            Self::Easy => 0.10,
            Self::Medium => 0.05,
            Self::Hard => 0.02,
            Self::Expert => 0.00,
        }
    }
    pub const fn features(&self) -> Features {
        match self {
            Self::Beginner => Features {
                opponent_modeling: false,
                icm: false,
                tilt: true,
                ranges: false,
                board_texture: false,
                gto: false,
            },
            Self::Easy => Features {
                opponent_modeling: false,
                icm: false,
                tilt: true,
                ranges: false,
                board_texture: true,
                gto: false,
            },
            Self::Medium => Features {
                opponent_modeling: true,
                icm: false,
                tilt: true,
                ranges: true,
                board_texture: true,
                gto: false,
            },
            Self::Hard => Features {
                opponent_modeling: true,
                icm: true,
                tilt: true,
                ranges: true,
                board_texture: true,
                gto: false,
            },
            Self::Expert => Features {
                opponent_modeling: true,
                icm: true,
                tilt: false,
                ranges: true,
                board_texture: true,
                gto: true,
            },
        }
    }
}

impl TryFrom<&str> for Difficulty {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "expert" => Ok(Self::Expert),
            _ => Err(format!("invalid difficulty: {}", s)),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
            Self::Expert => write!(f, "expert"),
        }
    }
}
