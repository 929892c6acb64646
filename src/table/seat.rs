use super::player::PlayerId;
use crate::Chips;
use crate::cards::Hole;

/// Whether a seat is still contesting the pot.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Folded,
    AllIn,
    Out,
}

/// A player's state at the table.
///
/// - `chips`: behind, not yet committed
/// - `bet`: committed this street
/// - `hole`: private, known only for the actor
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Seat {
    pub id: PlayerId,
    pub chips: Chips,
    #[serde(default)]
    pub bet: Chips,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub hole: Option<Hole>,
}

impl Seat {
    pub fn new(id: &str, chips: Chips) -> Self {
        Self {
            id: PlayerId::from(id),
            chips,
            bet: 0,
            status: Status::Active,
            hole: None,
        }
    }
    pub fn with_bet(mut self, bet: Chips) -> Self {
        self.bet = bet;
        self
    }
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
    pub fn with_hole(mut self, hole: Hole) -> Self {
        self.hole = Some(hole);
        self
    }
    /// Still contesting the pot, able to act or not.
    pub fn is_live(&self) -> bool {
        matches!(self.status, Status::Active | Status::AllIn)
    }
    /// Chips behind plus chips committed this street.
    pub fn total(&self) -> Chips {
        self.chips + self.bet
    }
}
