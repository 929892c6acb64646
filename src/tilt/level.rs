use crate::Probability;

/// Ordinal reading of the tilt scalar.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Calm,
    Annoyed,
    Frustrated,
    Steaming,
    OnTilt,
}

impl From<Probability> for Level {
    fn from(tilt: Probability) -> Self {
        match tilt {
            t if t < 0.15 => Self::Calm,
            t if t < 0.35 => Self::Annoyed,
            t if t < 0.60 => Self::Frustrated,
            t if t < 0.85 => Self::Steaming,
            _ => Self::OnTilt,
        }
    }
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Calm => write!(f, "calm"),
            Self::Annoyed => write!(f, "annoyed"),
            Self::Frustrated => write!(f, "frustrated"),
            Self::Steaming => write!(f, "steaming"),
            Self::OnTilt => write!(f, "on tilt"),
        }
    }
}
