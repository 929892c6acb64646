use super::archetype::Archetype;
use crate::Probability;

/// A behavioural profile.
///
/// Every scalar lives in [0, 1]. Profiles are immutable during play: tilt,
/// opponent exploits and tournament pressure are folded into an
/// [`Effective`](super::Effective) view rebuilt for each decision.
#[derive(Debug, Clone, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub name: String,
    /// Reluctance to enter pots voluntarily.
    pub tightness: Probability,
    /// Preference for betting and raising over checking and calling.
    pub aggression: Probability,
    pub bluff: Probability,
    pub fold_to_three_bet: Probability,
    pub cbet_flop: Probability,
    pub cbet_turn: Probability,
    pub position_awareness: Probability,
    pub tilt_sensitivity: Probability,
    pub call_down: Probability,
    pub risk_tolerance: Probability,
    pub bluff_detection: Probability,
    /// Stack in big blinds from which implied odds are credited.
    pub deep_stack_bb: f32,
    /// Route decisions through the GTO-flavoured procedure.
    #[serde(default)]
    pub gto: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self::from(Archetype::Tag)
    }
}

impl Profile {
    /// Copy with every scalar clamped into range, for profiles read from disk.
    pub fn sanitized(mut self) -> Self {
        for x in [
            &mut self.tightness,
            &mut self.aggression,
            &mut self.bluff,
            &mut self.fold_to_three_bet,
            &mut self.cbet_flop,
            &mut self.cbet_turn,
            &mut self.position_awareness,
            &mut self.tilt_sensitivity,
            &mut self.call_down,
            &mut self.risk_tolerance,
            &mut self.bluff_detection,
        ] {
            *x = crate::unit(*x);
        }
        self.deep_stack_bb = self.deep_stack_bb.max(0.0);
        self
    }
}

impl std::fmt::Display for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} (tight {:.2} aggro {:.2} bluff {:.2}{})",
            self.name,
            self.tightness,
            self.aggression,
            self.bluff,
            if self.gto { " gto" } else { "" }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps() {
        let mut profile = Profile::default();
        profile.bluff = 3.0;
        profile.tightness = -1.0;
        let profile = profile.sanitized();
        assert_eq!(profile.bluff, 1.0);
        assert_eq!(profile.tightness, 0.0);
    }

    #[test]
    fn json_defaults_gto_off() {
        let mut json = serde_json::to_value(Profile::default()).unwrap();
        json.as_object_mut().unwrap().remove("gto");
        let profile = serde_json::from_value::<Profile>(json).unwrap();
        assert!(!profile.gto);
    }
}
