use super::base::Profile;
use crate::MAX_STEAL_BONUS;
use crate::MAX_VALUE_SIZING;
use crate::MIN_VALUE_SIZING;
use crate::Probability;
use crate::TILT_AGGRESSION_CEILING;
use crate::TILT_AGGRESSION_SLOPE;
use crate::TILT_BLUFF_CEILING;
use crate::TILT_BLUFF_SLOPE;
use crate::TILT_CALL_DOWN_CEILING;
use crate::TILT_CALL_DOWN_SLOPE;
use crate::TILT_TIGHTNESS_FLOOR;
use crate::TILT_TIGHTNESS_SLOPE;
use crate::icm::Posture;
use crate::opponent::Exploit;

/// The profile actually played for one decision.
///
/// Starts as a copy of the base profile and folds in tilt, opponent exploits
/// and tournament posture. Every layer clamps what it writes, so the view is
/// in range no matter how the layers stack.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize)]
pub struct Effective {
    pub tightness: Probability,
    pub aggression: Probability,
    pub bluff: Probability,
    pub fold_to_three_bet: Probability,
    pub cbet_flop: Probability,
    pub cbet_turn: Probability,
    pub position_awareness: Probability,
    pub call_down: Probability,
    pub risk_tolerance: Probability,
    pub bluff_detection: Probability,
    pub deep_stack_bb: f32,
    pub gto: bool,
    /// Extra willingness to raise blinds from late position, in [0, 0.5].
    pub steal_bonus: f32,
    /// Multiplier on value bet sizes, in [0.5, 2].
    pub value_sizing: f32,
    pub tilt: Probability,
}

impl From<&Profile> for Effective {
    fn from(p: &Profile) -> Self {
        Self {
            tightness: crate::unit(p.tightness),
            aggression: crate::unit(p.aggression),
            bluff: crate::unit(p.bluff),
            fold_to_three_bet: crate::unit(p.fold_to_three_bet),
            cbet_flop: crate::unit(p.cbet_flop),
            cbet_turn: crate::unit(p.cbet_turn),
            position_awareness: crate::unit(p.position_awareness),
            call_down: crate::unit(p.call_down),
            risk_tolerance: crate::unit(p.risk_tolerance),
            bluff_detection: crate::unit(p.bluff_detection),
            deep_stack_bb: p.deep_stack_bb.max(0.0),
            gto: p.gto,
            steal_bonus: 0.0,
            value_sizing: 1.0,
            tilt: 0.0,
        }
    }
}

impl Effective {
    /// Loosen and heat up linearly with tilt.
    pub fn tilted(mut self, tilt: Probability) -> Self {
        let t = crate::unit(tilt);
        self.tilt = t;
        self.tightness = (self.tightness + TILT_TIGHTNESS_SLOPE * t).clamp(TILT_TIGHTNESS_FLOOR, 1.0);
        self.aggression = (self.aggression + TILT_AGGRESSION_SLOPE * t).clamp(0.0, TILT_AGGRESSION_CEILING);
        self.bluff = (self.bluff + TILT_BLUFF_SLOPE * t).clamp(0.0, TILT_BLUFF_CEILING);
        self.call_down = (self.call_down + TILT_CALL_DOWN_SLOPE * t).clamp(0.0, TILT_CALL_DOWN_CEILING);
        self
    }
    /// Counter a classified opponent.
    pub fn exploit(mut self, e: &Exploit) -> Self {
        self.steal_bonus = (self.steal_bonus + e.steal_bonus).clamp(0.0, MAX_STEAL_BONUS);
        self.bluff = crate::unit(self.bluff + e.bluff_delta);
        self.value_sizing = (self.value_sizing + e.value_size_delta).clamp(MIN_VALUE_SIZING, MAX_VALUE_SIZING);
        self.call_down = crate::unit(self.call_down + e.call_down_delta);
        self
    }
    /// Lean into tournament standing.
    pub fn posture(mut self, p: &Posture) -> Self {
        self.steal_bonus = (self.steal_bonus + p.steal_bonus).clamp(0.0, MAX_STEAL_BONUS);
        self.aggression = crate::unit(self.aggression + p.aggression_delta);
        self.tightness = crate::unit(self.tightness + p.tightness_delta);
        self
    }
    /// Every scalar within its documented bounds.
    pub fn is_bounded(&self) -> bool {
        let unit = [
            self.tightness,
            self.aggression,
            self.bluff,
            self.fold_to_three_bet,
            self.cbet_flop,
            self.cbet_turn,
            self.position_awareness,
            self.call_down,
            self.risk_tolerance,
            self.bluff_detection,
            self.tilt,
        ];
        unit.iter().all(|x| (0.0..=1.0).contains(x))
            && (0.0..=MAX_STEAL_BONUS).contains(&self.steal_bonus)
            && (MIN_VALUE_SIZING..=MAX_VALUE_SIZING).contains(&self.value_sizing)
    }
}
