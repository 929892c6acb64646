use crate::FLUSH_OUTS;
use crate::GUTSHOT_OUTS;
use crate::OPEN_ENDED_OUTS;
use crate::Probability;
use crate::cards::Board;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Street;
use crate::cards::Suit;

/// Unfinished straight.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Straight {
    #[default]
    None,
    Gutshot,
    OpenEnded,
}

impl Straight {
    pub fn outs(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Gutshot => GUTSHOT_OUTS,
            Self::OpenEnded => OPEN_ENDED_OUTS,
        }
    }
    /// Outs shared with a flush draw.
    fn overlap(&self) -> usize {
        match self {
            Self::None => 0,
            Self::Gutshot => 1,
            Self::OpenEnded => 2,
        }
    }
}

/// Draws held by hole cards plus board with cards still to come.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[derive(serde::Serialize)]
pub struct Draws {
    pub flush: bool,
    pub straight: Straight,
}

impl From<(Hole, Board)> for Draws {
    fn from((hole, board): (Hole, Board)) -> Self {
        if board.size() >= 5 {
            return Self::default();
        }
        let hand = Hand::or(Hand::from(hole), Hand::from(board));
        Self {
            flush: Suit::all().iter().any(|s| hand.of(s).size() == 4),
            straight: Self::straight(u16::from(hand)),
        }
    }
}

impl Draws {
    /// Slide a five-rank window over the rank set with the ace also below
    /// the deuce. A window holding four ranks is open-ended when the gap
    /// sits at either edge and a gutshot when it sits inside. The best
    /// window wins.
    fn straight(ranks: u16) -> Straight {
        let ace = (ranks >> 12) & 1;
        let bits = (ranks << 1) | ace;
        let windows = (0..=9).map(|lo| (bits >> lo) & 0b11111).collect::<Vec<_>>();
        if windows.iter().any(|w| *w == 0b11111) {
            return Straight::None;
        }
        windows
            .iter()
            .filter(|w| w.count_ones() == 4)
            .map(|w| match (!w & 0b11111).trailing_zeros() {
                0 | 4 => Straight::OpenEnded,
                _ => Straight::Gutshot,
            })
            .max()
            .unwrap_or_default()
    }
    pub fn outs(&self) -> usize {
        match self.flush {
            true => FLUSH_OUTS + self.straight.outs() - self.straight.overlap(),
            false => self.straight.outs(),
        }
    }
    pub fn is_live(&self) -> bool {
        self.outs() > 0
    }
    pub fn is_combo(&self) -> bool {
        self.flush && self.straight != Straight::None
    }
    /// Rule of two and four: chance to hit by the river.
    pub fn equity(&self, street: Street) -> Probability {
        let per_out = match street {
            Street::Flop => 0.04,
            Street::Turn => 0.02,
            _ => 0.00,
        };
        crate::unit(self.outs() as f32 * per_out)
    }
}

impl std::fmt::Display for Draws {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.flush, self.straight) {
            (false, Straight::None) => write!(f, "no draw"),
            (true, Straight::None) => write!(f, "flush draw"),
            (false, s) => write!(f, "{:?} straight draw", s),
            (true, s) => write!(f, "flush + {:?} straight draw", s),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draws(hole: &str, board: &str) -> Draws {
        Draws::from((Hole::try_from(hole).unwrap(), Board::try_from(board).unwrap()))
    }

    #[test]
    fn flush_draw() {
        let d = draws("Ah 5h", "Kh 9h 2c");
        assert!(d.flush);
        assert_eq!(d.straight, Straight::None);
        assert_eq!(d.outs(), 9);
    }

    #[test]
    fn made_flush_is_not_a_draw() {
        assert!(!draws("Ah 5h", "Kh 9h 2h").flush);
    }

    #[test]
    fn open_ended() {
        let d = draws("9c 8d", "7h 6s 2c");
        assert_eq!(d.straight, Straight::OpenEnded);
        assert_eq!(d.outs(), 8);
    }

    #[test]
    fn gutshot() {
        let d = draws("9c 8d", "6h 5s Kc");
        assert_eq!(d.straight, Straight::Gutshot);
        assert_eq!(d.outs(), 4);
    }

    #[test]
    fn wheel_draw_uses_low_ace() {
        assert_eq!(draws("Ac 2d", "3h 4s Kc").straight, Straight::OpenEnded);
    }

    #[test]
    fn broadway_gap_at_the_edge() {
        assert_eq!(draws("Ac Kd", "Qh Js 4c").straight, Straight::OpenEnded);
    }

    #[test]
    fn inside_gaps_stay_gutshots() {
        let d = draws("9c 7d", "6h 5s 3c");
        assert_eq!(d.straight, Straight::Gutshot);
        assert_eq!(d.outs(), 4);
    }

    #[test]
    fn made_straight_is_not_a_draw() {
        assert_eq!(draws("9c 8d", "7h 6s 5c").straight, Straight::None);
    }

    #[test]
    fn combo_draws() {
        let oesd = draws("9h 8h", "7h 6c 2h");
        assert!(oesd.is_combo());
        assert_eq!(oesd.outs(), 15);
        let gut = draws("9h 8h", "6h 5c 2h");
        assert_eq!(gut.outs(), 12);
    }

    #[test]
    fn nothing_on_the_river() {
        let d = draws("9h 8h", "7h 6c 2h Kd Qs");
        assert!(!d.is_live());
        assert_eq!(d.equity(Street::Rive), 0.0);
    }

    #[test]
    fn rule_of_two_and_four() {
        let d = draws("Ah 5h", "Kh 9h 2c");
        assert!((d.equity(Street::Flop) - 0.36).abs() < 1e-6);
        assert!((d.equity(Street::Turn) - 0.18).abs() < 1e-6);
    }
}
