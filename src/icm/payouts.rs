use crate::Chips;
use crate::Utility;

/// Prize for each paid place, best place first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Payouts(Vec<Chips>);

impl Payouts {
    /// Number of paid places.
    pub fn spots(&self) -> usize {
        self.0.len()
    }
    /// Prize for finishing in `place` (1-indexed). Unpaid places get nothing.
    pub fn prize(&self, place: usize) -> Utility {
        match place {
            0 => 0.0,
            p => self.0.get(p - 1).copied().unwrap_or(0) as Utility,
        }
    }
    pub fn total(&self) -> Utility {
        self.0.iter().map(|p| *p as Utility).sum()
    }
}

impl From<Vec<Chips>> for Payouts {
    fn from(prizes: Vec<Chips>) -> Self {
        Self(prizes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_are_one_indexed() {
        let payouts = Payouts::from(vec![500, 300, 200]);
        assert_eq!(payouts.spots(), 3);
        assert_eq!(payouts.prize(1), 500.0);
        assert_eq!(payouts.prize(3), 200.0);
        assert_eq!(payouts.prize(4), 0.0);
        assert_eq!(payouts.prize(0), 0.0);
    }
}
