use super::exploit::Exploit;
use super::stats::HandSummary;
use super::stats::Stats;
use super::style::Style;
use crate::FULL_CONFIDENCE_HANDS;
use crate::Probability;
use crate::RELIABLE_CONFIDENCE;
use crate::table::GameMode;
use crate::table::PlayerId;

/// Everything we believe about one opponent in one game mode.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct OpponentModel {
    pub player: PlayerId,
    pub mode: GameMode,
    pub stats: Stats,
    pub style: Style,
    pub confidence: Probability,
}

impl OpponentModel {
    pub fn new(player: PlayerId, mode: GameMode, stats: Stats) -> Self {
        Self {
            player,
            mode,
            stats,
            style: Style::classify(&stats),
            confidence: Self::confidence(&stats),
        }
    }
    /// Grows with sample size and saturates at one.
    fn confidence(stats: &Stats) -> Probability {
        crate::unit(stats.hands as f32 / FULL_CONFIDENCE_HANDS as f32)
    }
    pub fn observe(&mut self, hand: &HandSummary) {
        self.stats.record(hand);
        self.style = Style::classify(&self.stats);
        self.confidence = Self::confidence(&self.stats);
    }
    pub fn is_reliable(&self) -> bool {
        self.confidence > RELIABLE_CONFIDENCE
    }
    /// Style adjustment once the read is trustworthy, nothing before.
    pub fn exploit(&self) -> Exploit {
        match self.is_reliable() {
            true => Exploit::from(self.style),
            false => Exploit::default(),
        }
    }
}

impl std::fmt::Display for OpponentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) {} @ {:.2}",
            self.player, self.mode, self.style, self.confidence
        )
    }
}
