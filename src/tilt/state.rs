use super::level::Level;
use super::trigger::Trigger;
use crate::Probability;
use crate::TILT_RECOVERY_HANDS;

/// A player's tilt scalar in [0, 1] and how it got there.
///
/// Negative events push it up in proportion to the player's sensitivity.
/// Each hand played without a trigger bleeds off a fixed share, so a fully
/// tilted player is calm again after `TILT_RECOVERY_HANDS` quiet hands.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Tilt {
    value: Probability,
    triggers: u32,
    hands_since: u32,
}

impl Tilt {
    pub fn value(&self) -> Probability {
        self.value
    }
    pub fn level(&self) -> Level {
        Level::from(self.value)
    }
    /// Negative events seen so far.
    pub fn triggers(&self) -> u32 {
        self.triggers
    }
    /// Hands since the last negative event.
    pub fn hands_since(&self) -> u32 {
        self.hands_since
    }
    pub fn trigger(&mut self, event: Trigger, sensitivity: Probability) {
        match event.is_negative() {
            true => {
                let scale = 0.5 + crate::unit(sensitivity);
                self.value = crate::unit(self.value + event.weight() * scale);
                self.triggers += 1;
                self.hands_since = 0;
            }
            false => {
                self.value = crate::unit(self.value + event.weight());
            }
        }
    }
    pub fn recover(&mut self, hands: u32) {
        self.value = crate::unit(self.value - hands as f32 / TILT_RECOVERY_HANDS);
        self.hands_since += hands;
    }
}

impl std::fmt::Display for Tilt {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({:.2})", self.level(), self.value)
    }
}
