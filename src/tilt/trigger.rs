use crate::Probability;

/// Events that move the tilt scalar.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigger {
    /// Lost as a big favourite at showdown.
    BadBeat,
    /// Lost a large share of the stack in one hand.
    BigLoss,
    /// Lost with a very strong hand to a stronger one.
    Cooler,
    /// Several losing hands in a row.
    LosingStreak,
    /// Won a pot. Soothes rather than tilts.
    Win,
}

impl Trigger {
    /// Tilt added at neutral sensitivity. Negative for soothing events.
    pub const fn weight(&self) -> Probability {
        match self {
            Self::BadBeat => 0.30,
            Self::BigLoss => 0.20,
            Self::Cooler => 0.15,
            Self::LosingStreak => 0.10,
            Self::Win => -0.10,
        }
    }
    pub const fn is_negative(&self) -> bool {
        !matches!(self, Self::Win)
    }
}

impl TryFrom<&str> for Trigger {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "badbeat" => Ok(Self::BadBeat),
            "bigloss" => Ok(Self::BigLoss),
            "cooler" => Ok(Self::Cooler),
            "losingstreak" => Ok(Self::LosingStreak),
            "win" => Ok(Self::Win),
            _ => Err(format!("invalid tilt trigger: {}", s)),
        }
    }
}
