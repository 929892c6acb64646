/// What a player did preflop, as far as ranges care.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreflopAction {
    Limp,
    Call,
    Raise,
    ThreeBet,
    FourBet,
    AllIn,
}

/// What a player did on a postflop street.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostflopAction {
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
    Fold,
}

impl PreflopAction {
    /// Read off the number of raises a player made or faced.
    pub fn from_raises(raises: usize, limped: bool) -> Self {
        match raises {
            0 if limped => Self::Limp,
            0 => Self::Call,
            1 => Self::Raise,
            2 => Self::ThreeBet,
            _ => Self::FourBet,
        }
    }
}

impl std::fmt::Display for PreflopAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Limp => write!(f, "limp"),
            Self::Call => write!(f, "call"),
            Self::Raise => write!(f, "open"),
            Self::ThreeBet => write!(f, "3-bet"),
            Self::FourBet => write!(f, "4-bet"),
            Self::AllIn => write!(f, "shove"),
        }
    }
}

impl std::fmt::Display for PostflopAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Check => write!(f, "check"),
            Self::Call => write!(f, "call"),
            Self::Bet => write!(f, "bet"),
            Self::Raise => write!(f, "raise"),
            Self::AllIn => write!(f, "shove"),
            Self::Fold => write!(f, "fold"),
        }
    }
}
