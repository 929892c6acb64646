/// Seat position relative to the button.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    Early,
    Middle,
    Cutoff,
    Button,
    SmallBlind,
    BigBlind,
    #[default]
    Unknown,
}

impl Position {
    /// Position of the seat `offset` places after the button at a table of
    /// `seats` players. 0 is the button, 1 the small blind, 2 the big blind,
    /// the last seat the cutoff. Seats between split into an early half and
    /// a middle rest. Heads-up the button posts the small blind and acts as
    /// the button.
    pub fn from_offset(offset: usize, seats: usize) -> Self {
        match (seats, offset) {
            (n, o) if o >= n || n < 2 => Self::Unknown,
            (2, 0) => Self::Button,
            (2, _) => Self::BigBlind,
            (_, 0) => Self::Button,
            (_, 1) => Self::SmallBlind,
            (_, 2) => Self::BigBlind,
            (n, o) if o == n - 1 => Self::Cutoff,
            (n, o) => match o - 3 < (n - 4).div_ceil(2) {
                true => Self::Early,
                false => Self::Middle,
            },
        }
    }
    /// Cutoff and button act last postflop against most of the table.
    pub fn is_late(&self) -> bool {
        matches!(self, Self::Cutoff | Self::Button)
    }
    pub fn is_blind(&self) -> bool {
        matches!(self, Self::SmallBlind | Self::BigBlind)
    }
    pub const fn all() -> [Self; 7] {
        [
            Self::Early,
            Self::Middle,
            Self::Cutoff,
            Self::Button,
            Self::SmallBlind,
            Self::BigBlind,
            Self::Unknown,
        ]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Early => write!(f, "early"),
            Self::Middle => write!(f, "middle"),
            Self::Cutoff => write!(f, "cutoff"),
            Self::Button => write!(f, "button"),
            Self::SmallBlind => write!(f, "small blind"),
            Self::BigBlind => write!(f, "big blind"),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_max() {
        let positions = (0..6)
            .map(|o| Position::from_offset(o, 6))
            .collect::<Vec<_>>();
        assert_eq!(
            positions,
            vec![
                Position::Button,
                Position::SmallBlind,
                Position::BigBlind,
                Position::Early,
                Position::Middle,
                Position::Cutoff,
            ]
        );
    }

    #[test]
    fn full_ring_splits_early_and_middle() {
        let early = (0..9)
            .map(|o| Position::from_offset(o, 9))
            .filter(|p| *p == Position::Early)
            .count();
        let middle = (0..9)
            .map(|o| Position::from_offset(o, 9))
            .filter(|p| *p == Position::Middle)
            .count();
        assert_eq!((early, middle), (3, 2));
    }

    #[test]
    fn heads_up() {
        assert_eq!(Position::from_offset(0, 2), Position::Button);
        assert_eq!(Position::from_offset(1, 2), Position::BigBlind);
    }

    #[test]
    fn out_of_range() {
        assert_eq!(Position::from_offset(6, 6), Position::Unknown);
        assert_eq!(Position::from_offset(0, 1), Position::Unknown);
    }
}
