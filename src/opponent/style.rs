use super::stats::Stats;
use crate::MIN_HANDS_FOR_STYLE;

/// Coarse read on an opponent.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Rock,
    Tag,
    Lag,
    Fish,
    #[default]
    Unknown,
}

impl Style {
    pub const fn all() -> [Self; 5] {
        [Self::Rock, Self::Tag, Self::Lag, Self::Fish, Self::Unknown]
    }
    /// Rules apply in order. Too few hands is always unknown.
    pub fn classify(stats: &Stats) -> Self {
        if stats.hands < MIN_HANDS_FOR_STYLE {
            return Self::Unknown;
        }
        let vpip = stats.vpip();
        let pfr = stats.pfr();
        let af = stats.aggression_factor();
        match () {
            _ if vpip >= 0.40 && af < 1.5 => Self::Fish,
            _ if vpip >= 0.28 && af >= 2.0 => Self::Lag,
            _ if vpip < 0.18 => Self::Rock,
            _ if vpip < 0.28 && pfr >= 0.12 => Self::Tag,
            _ => Self::Unknown,
        }
    }
}

impl std::fmt::Display for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Tag => write!(f, "tag"),
            Self::Lag => write!(f, "lag"),
            Self::Fish => write!(f, "fish"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}
