use crate::Probability;

/// What one player did in one finished hand.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct HandSummary {
    /// Put chips in preflop without being forced to.
    pub vpip: bool,
    /// Raised preflop.
    pub pfr: bool,
    /// Bets and raises over the hand.
    pub aggressive: u32,
    /// Calls over the hand.
    pub passive: u32,
    /// Faced a single raise preflop with the option to re-raise.
    pub three_bet_chance: bool,
    pub three_bet: bool,
    pub showdown: bool,
    pub won_showdown: bool,
}

/// Aggregate counters for one player in one game mode.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Stats {
    pub hands: u32,
    pub vpip: u32,
    pub pfr: u32,
    pub aggressive: u32,
    pub passive: u32,
    pub three_bet: u32,
    pub three_bet_chances: u32,
    pub showdowns: u32,
    pub showdowns_won: u32,
}

impl Stats {
    fn rate(n: u32, d: u32) -> Probability {
        match d {
            0 => 0.0,
            d => crate::unit(n as f32 / d as f32),
        }
    }
    pub fn vpip(&self) -> Probability {
        Self::rate(self.vpip, self.hands)
    }
    pub fn pfr(&self) -> Probability {
        Self::rate(self.pfr, self.hands)
    }
    /// Bets and raises per call. Unbounded above.
    pub fn aggression_factor(&self) -> f32 {
        match self.passive {
            0 => self.aggressive as f32,
            p => self.aggressive as f32 / p as f32,
        }
    }
    pub fn three_bet(&self) -> Probability {
        Self::rate(self.three_bet, self.three_bet_chances)
    }
    /// Went to showdown.
    pub fn wtsd(&self) -> Probability {
        Self::rate(self.showdowns, self.hands)
    }
    /// Won at showdown.
    pub fn wsd(&self) -> Probability {
        Self::rate(self.showdowns_won, self.showdowns)
    }
    pub fn record(&mut self, hand: &HandSummary) {
        self.hands += 1;
        self.vpip += hand.vpip as u32;
        self.pfr += hand.pfr as u32;
        self.aggressive += hand.aggressive;
        self.passive += hand.passive;
        self.three_bet_chances += hand.three_bet_chance as u32;
        self.three_bet += (hand.three_bet_chance && hand.three_bet) as u32;
        self.showdowns += hand.showdown as u32;
        self.showdowns_won += (hand.showdown && hand.won_showdown) as u32;
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} hands vpip {:.2} pfr {:.2} af {:.2} 3b {:.2} wtsd {:.2}",
            self.hands,
            self.vpip(),
            self.pfr(),
            self.aggression_factor(),
            self.three_bet(),
            self.wtsd()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rates_are_zero() {
        let stats = Stats::default();
        assert_eq!(stats.vpip(), 0.0);
        assert_eq!(stats.wsd(), 0.0);
        assert_eq!(stats.aggression_factor(), 0.0);
    }

    #[test]
    fn records_hands() {
        let mut stats = Stats::default();
        let hand = HandSummary {
            vpip: true,
            pfr: true,
            aggressive: 2,
            passive: 1,
            three_bet_chance: true,
            three_bet: true,
            showdown: true,
            won_showdown: false,
        };
        stats.record(&hand);
        stats.record(&HandSummary::default());
        assert_eq!(stats.hands, 2);
        assert_eq!(stats.vpip(), 0.5);
        assert_eq!(stats.aggression_factor(), 2.0);
        assert_eq!(stats.three_bet(), 1.0);
        assert_eq!(stats.wtsd(), 0.5);
        assert_eq!(stats.wsd(), 0.0);
    }

    #[test]
    fn aggression_without_calls() {
        let stats = Stats {
            aggressive: 3,
            ..Stats::default()
        };
        assert_eq!(stats.aggression_factor(), 3.0);
    }
}
