use super::base::Profile;

/// Curated catalog of playing styles.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Archetype {
    Rock,
    Nit,
    Tag,
    Lag,
    Maniac,
    CallingStation,
    Shark,
    Novice,
}

impl Archetype {
    pub const fn all() -> [Self; 8] {
        [
            Self::Rock,
            Self::Nit,
            Self::Tag,
            Self::Lag,
            Self::Maniac,
            Self::CallingStation,
            Self::Shark,
            Self::Novice,
        ]
    }
}

#[rustfmt::skip]
impl From<Archetype> for Profile {
    fn from(archetype: Archetype) -> Self {
        // tight aggro bluff f3bet cbetf cbett posit tiltsn callDn risk  detect deepBB gto
        let (t, a, b, f3, cf, ct, pa, ts, cd, r, bd, deep, gto) = match archetype {
            Archetype::Rock           => (0.85, 0.30, 0.05, 0.80, 0.50, 0.30, 0.40, 0.20, 0.20, 0.20, 0.40, 100.0, false),
            Archetype::Nit            => (0.90, 0.20, 0.02, 0.85, 0.40, 0.25, 0.30, 0.30, 0.15, 0.10, 0.30, 120.0, false),
            Archetype::Tag            => (0.65, 0.65, 0.20, 0.60, 0.70, 0.50, 0.80, 0.30, 0.35, 0.50, 0.60, 100.0, false),
            Archetype::Lag            => (0.35, 0.80, 0.40, 0.45, 0.80, 0.60, 0.85, 0.40, 0.45, 0.70, 0.60,  80.0, false),
            Archetype::Maniac         => (0.10, 0.95, 0.70, 0.20, 0.90, 0.80, 0.30, 0.70, 0.50, 0.95, 0.30,  60.0, false),
            Archetype::CallingStation => (0.30, 0.15, 0.05, 0.30, 0.30, 0.20, 0.20, 0.50, 0.85, 0.50, 0.20, 100.0, false),
            Archetype::Shark          => (0.60, 0.70, 0.30, 0.55, 0.65, 0.50, 0.90, 0.10, 0.40, 0.60, 0.85, 100.0, true ),
            Archetype::Novice         => (0.40, 0.40, 0.15, 0.50, 0.50, 0.40, 0.20, 0.60, 0.55, 0.50, 0.20, 100.0, false),
        };
        Self {
            name: archetype.to_string(),
            tightness: t,
            aggression: a,
            bluff: b,
            fold_to_three_bet: f3,
            cbet_flop: cf,
            cbet_turn: ct,
            position_awareness: pa,
            tilt_sensitivity: ts,
            call_down: cd,
            risk_tolerance: r,
            bluff_detection: bd,
            deep_stack_bb: deep,
            gto,
        }
    }
}

impl TryFrom<&str> for Archetype {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "rock" => Ok(Self::Rock),
            "nit" => Ok(Self::Nit),
            "tag" => Ok(Self::Tag),
            "lag" => Ok(Self::Lag),
            "maniac" => Ok(Self::Maniac),
            "callingstation" | "station" => Ok(Self::CallingStation),
            "shark" | "gto" => Ok(Self::Shark),
            "novice" => Ok(Self::Novice),
            _ => Err(format!("invalid archetype: {}", s)),
        }
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Rock => write!(f, "rock"),
            Self::Nit => write!(f, "nit"),
            Self::Tag => write!(f, "tag"),
            Self::Lag => write!(f, "lag"),
            Self::Maniac => write!(f, "maniac"),
            Self::CallingStation => write!(f, "calling-station"),
            Self::Shark => write!(f, "shark"),
            Self::Novice => write!(f, "novice"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_in_range() {
        for archetype in Archetype::all() {
            let profile = Profile::from(archetype);
            assert_eq!(profile.clone().sanitized(), profile);
        }
    }

    #[test]
    fn parses_display_names() {
        for archetype in Archetype::all() {
            assert_eq!(Archetype::try_from(archetype.to_string().as_str()), Ok(archetype));
        }
    }

    #[test]
    fn only_shark_plays_gto() {
        let gto = Archetype::all()
            .into_iter()
            .filter(|a| Profile::from(*a).gto)
            .collect::<Vec<_>>();
        assert_eq!(gto, vec![Archetype::Shark]);
    }

    #[test]
    fn station_calls_down() {
        assert!(Profile::from(Archetype::CallingStation).call_down > crate::CALLING_STATION);
    }
}
