use crate::icm::Payouts;

/// Key half of opponent statistics: cash and tournament play are tracked
/// separately for the same player.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    #[default]
    Cash,
    Tournament,
}

/// Game format with its payout structure when there is one.
#[derive(Debug, Default, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Cash,
    Tournament(Payouts),
}

impl Format {
    pub fn mode(&self) -> GameMode {
        match self {
            Format::Cash => GameMode::Cash,
            Format::Tournament(_) => GameMode::Tournament,
        }
    }
    pub fn payouts(&self) -> Option<&Payouts> {
        match self {
            Format::Cash => None,
            Format::Tournament(payouts) => Some(payouts),
        }
    }
}

impl std::fmt::Display for GameMode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            GameMode::Cash => write!(f, "cash"),
            GameMode::Tournament => write!(f, "tournament"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tournament_json() {
        let format = serde_json::from_str::<Format>(r#"{"tournament":[500,300,200]}"#).unwrap();
        assert_eq!(format.mode(), GameMode::Tournament);
        assert_eq!(format.payouts().map(|p| p.spots()), Some(3));
        let cash = serde_json::from_str::<Format>(r#""cash""#).unwrap();
        assert_eq!(cash.payouts(), None);
    }
}
