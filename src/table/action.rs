use crate::Chips;

/// A betting decision.
///
/// Every amount is the chips the actor adds to the pot with this action,
/// not the size of the bet it reaches.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Fold,
    Check,
    Call(Chips),
    Bet(Chips),
    Raise(Chips),
    AllIn(Chips),
}

impl Action {
    /// Chips added to the pot.
    pub fn amount(&self) -> Chips {
        match self {
            Action::Fold | Action::Check => 0,
            Action::Call(n) | Action::Bet(n) | Action::Raise(n) | Action::AllIn(n) => *n,
        }
    }
    /// True if this is a bet, raise or shove.
    pub fn is_aggro(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_) | Action::AllIn(_))
    }
    /// True if this is a fold or check (no chips added).
    pub fn is_passive(&self) -> bool {
        matches!(self, Action::Fold | Action::Check)
    }
    /// Variant name without the amount, for tallies.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call(_) => "call",
            Action::Bet(_) => "bet",
            Action::Raise(_) => "raise",
            Action::AllIn(_) => "allin",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Action::Fold => write!(f, "FOLD"),
            Action::Check => write!(f, "CHECK"),
            Action::Call(n) => write!(f, "CALL  {}", n),
            Action::Bet(n) => write!(f, "BET   {}", n),
            Action::Raise(n) => write!(f, "RAISE {}", n),
            Action::AllIn(n) => write!(f, "SHOVE {}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts() {
        assert_eq!(Action::Fold.amount(), 0);
        assert_eq!(Action::Raise(60).amount(), 60);
        assert!(Action::AllIn(5).is_aggro());
        assert!(Action::Check.is_passive());
    }

    #[test]
    fn serde_shape() {
        assert_eq!(serde_json::to_string(&Action::Call(20)).unwrap(), r#"{"call":20}"#);
        assert_eq!(serde_json::to_string(&Action::Fold).unwrap(), r#""fold""#);
    }
}
